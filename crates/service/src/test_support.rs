//! In-memory [`DogStore`] used as a test double and for running the server
//! without a database. Issues real ObjectIds and applies the same id-syntax
//! rule and merge semantics as the Mongo implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use models::dog::{CreateDogInput, Dog, UpdateDogInput};

use crate::dog::repository::DogStore;
use crate::errors::ServiceError;

#[derive(Default)]
pub struct MemoryDogStore {
    dogs: DashMap<ObjectId, Dog>,
}

impl MemoryDogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_id(id: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(id).map_err(|_| ServiceError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl DogStore for MemoryDogStore {
    async fn list(&self) -> Result<Vec<Dog>, ServiceError> {
        Ok(self.dogs.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn create(&self, input: CreateDogInput) -> Result<Dog, ServiceError> {
        let mut dog = input.validate()?;
        let oid = ObjectId::new();
        dog.id = Some(oid);
        self.dogs.insert(oid, dog.clone());
        Ok(dog)
    }

    async fn get(&self, id: &str) -> Result<Option<Dog>, ServiceError> {
        let oid = Self::parse_id(id)?;
        Ok(self.dogs.get(&oid).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: &str, input: UpdateDogInput) -> Result<Option<Dog>, ServiceError> {
        let oid = Self::parse_id(id)?;
        input.validate()?;
        let Some(mut entry) = self.dogs.get_mut(&oid) else {
            return Ok(None);
        };
        let dog = entry.value_mut();
        if let Some(name) = input.name {
            dog.name = name;
        }
        if let Some(age) = input.age {
            dog.age = age;
        }
        if let Some(gender) = input.gender {
            dog.gender = gender;
        }
        if let Some(color) = input.color {
            dog.color = Some(color);
        }
        if let Some(weight) = input.weight {
            dog.weight = Some(weight);
        }
        if let Some(location) = input.location {
            dog.location = Some(location);
        }
        if let Some(image_url) = input.image_url {
            dog.image_url = Some(image_url);
        }
        if let Some(description) = input.description {
            dog.description = Some(description);
        }
        if let Some(owner) = input.owner {
            dog.owner = Some(owner);
        }
        Ok(Some(dog.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Dog>, ServiceError> {
        let oid = Self::parse_id(id)?;
        Ok(self.dogs.remove(&oid).map(|(_, dog)| dog))
    }
}
