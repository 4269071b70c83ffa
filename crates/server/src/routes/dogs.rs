use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use models::dog::{CreateDogInput, DogResponse, UpdateDogInput};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/dogs", tag = "dogs",
    responses(
        (status = 200, description = "All dog records"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<DogResponse>>, JsonApiError> {
    match state.dogs.list().await {
        Ok(dogs) => {
            info!(count = dogs.len(), "list dogs");
            Ok(Json(dogs.into_iter().map(DogResponse::from).collect()))
        }
        Err(e) => {
            error!(err = %e, "list dogs failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch dogs", None))
        }
    }
}

#[utoipa::path(
    get, path = "/dogs/{id}", tag = "dogs",
    params(("id" = String, Path, description = "Dog ID (24-char hex)")),
    responses(
        (status = 200, description = "Matching record"),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DogResponse>, JsonApiError> {
    match state.dogs.get(&id).await {
        Ok(Some(dog)) => Ok(Json(dog.into())),
        Ok(None) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Dog not found", None)),
        Err(ServiceError::InvalidId(_)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid ID format", None))
        }
        Err(e) => {
            error!(err = %e, "fetch dog failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch dog", None))
        }
    }
}

#[utoipa::path(
    post, path = "/dogs", tag = "dogs",
    request_body = crate::openapi::CreateDogInputDoc,
    responses(
        (status = 201, description = "Created, body includes assigned id"),
        (status = 400, description = "Validation failure, details included"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateDogInput>, JsonRejection>,
) -> Result<(StatusCode, Json<DogResponse>), JsonApiError> {
    let Json(input) = payload.map_err(|rejection| {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Failed to create dog", Some(rejection.body_text()))
    })?;
    match state.dogs.create(input).await {
        Ok(dog) => {
            let dog = DogResponse::from(dog);
            info!(id = %dog.id, name = %dog.name, "created dog");
            Ok((StatusCode::CREATED, Json(dog)))
        }
        Err(e @ ServiceError::Model(_)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Failed to create dog", Some(e.to_string())))
        }
        Err(e) => {
            error!(err = %e, "create dog failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create dog", None))
        }
    }
}

#[utoipa::path(
    put, path = "/dogs/{id}", tag = "dogs",
    params(("id" = String, Path, description = "Dog ID (24-char hex)")),
    request_body = crate::openapi::UpdateDogInputDoc,
    responses(
        (status = 200, description = "Merged record"),
        (status = 400, description = "Invalid ID format or validation failure"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDogInput>, JsonRejection>,
) -> Result<Json<DogResponse>, JsonApiError> {
    let Json(input) = payload.map_err(|rejection| {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Failed to update dog", Some(rejection.body_text()))
    })?;
    match state.dogs.update(&id, input).await {
        Ok(Some(dog)) => {
            info!(id = %id, "updated dog");
            Ok(Json(dog.into()))
        }
        Ok(None) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Dog not found", None)),
        Err(ServiceError::InvalidId(_)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid ID format", None))
        }
        Err(e @ ServiceError::Model(_)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Failed to update dog", Some(e.to_string())))
        }
        Err(e) => {
            error!(err = %e, "update dog failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update dog", None))
        }
    }
}

#[utoipa::path(
    delete, path = "/dogs/{id}", tag = "dogs",
    params(("id" = String, Path, description = "Dog ID (24-char hex)")),
    responses(
        (status = 200, description = "Record as it was before deletion"),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DogResponse>, JsonApiError> {
    match state.dogs.delete(&id).await {
        Ok(Some(dog)) => {
            info!(id = %id, "deleted dog");
            Ok(Json(dog.into()))
        }
        Ok(None) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Dog not found", None)),
        Err(ServiceError::InvalidId(_)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid ID format", None))
        }
        Err(e) => {
            error!(err = %e, "delete dog failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete dog", None))
        }
    }
}
