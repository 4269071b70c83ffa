use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied identifier is not syntactically valid for the backing
    /// store; raised before any storage access happens.
    #[error("invalid id format: {0}")]
    InvalidId(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
