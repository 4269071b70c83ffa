use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct DogOwnerDoc {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

#[derive(ToSchema)]
pub struct DogDoc {
    pub id: String,
    pub name: String,
    pub age: f64,
    pub gender: String,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub owner: Option<DogOwnerDoc>,
}

#[derive(ToSchema)]
pub struct CreateDogInputDoc {
    pub name: String,
    pub age: f64,
    pub gender: String,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub owner: Option<DogOwnerDoc>,
}

#[derive(ToSchema)]
pub struct UpdateDogInputDoc {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub owner: Option<DogOwnerDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::dogs::list,
        crate::routes::dogs::create,
        crate::routes::dogs::get,
        crate::routes::dogs::update,
        crate::routes::dogs::delete,
    ),
    components(
        schemas(
            HealthResponse,
            DogDoc,
            DogOwnerDoc,
            CreateDogInputDoc,
            UpdateDogInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "dogs", description = "Dog adoption records")
    )
)]
pub struct ApiDoc;
