use async_trait::async_trait;

use models::dog::{CreateDogInput, Dog, UpdateDogInput};

use crate::errors::ServiceError;

/// Storage seam for dog records.
///
/// Identifier syntax is a property of the backing store, not of the resource
/// logic, so each implementation owns its own "is this a valid id" predicate
/// and answers a malformed identifier with [`ServiceError::InvalidId`]
/// without touching storage. `Ok(None)` consistently means "well-formed id,
/// no such record".
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Every record in store-native order.
    async fn list(&self) -> Result<Vec<Dog>, ServiceError>;

    /// Validate, assign a fresh identifier and persist; returns the record
    /// as stored. A single atomic document write.
    async fn create(&self, input: CreateDogInput) -> Result<Dog, ServiceError>;

    async fn get(&self, id: &str) -> Result<Option<Dog>, ServiceError>;

    /// Merge the present payload fields into the record and return its new
    /// full state. Absent fields keep their stored values; a present but
    /// invalid field aborts the whole update.
    async fn update(&self, id: &str, input: UpdateDogInput) -> Result<Option<Dog>, ServiceError>;

    /// Remove the record and return its state immediately before deletion.
    async fn delete(&self, id: &str) -> Result<Option<Dog>, ServiceError>;
}
