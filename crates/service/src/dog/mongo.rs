use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use tracing::debug;

use models::dog::{CreateDogInput, Dog, UpdateDogInput};

use crate::errors::ServiceError;
use crate::dog::repository::DogStore;

/// MongoDB-backed repository. Each operation is exactly one driver call, so
/// per-record atomicity is whatever the server guarantees for a single
/// document write.
pub struct MongoDogStore {
    collection: Collection<Dog>,
}

impl MongoDogStore {
    pub fn new(db: &Database) -> Self {
        Self { collection: db.collection("dogs") }
    }

    /// The store's identifier syntax: a 24-character hex ObjectId. Checked
    /// before any round-trip so malformed ids never reach the server.
    fn parse_id(id: &str) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(id).map_err(|_| ServiceError::InvalidId(id.to_string()))
    }
}

fn db_err(e: mongodb::error::Error) -> ServiceError {
    ServiceError::Db(e.to_string())
}

#[async_trait]
impl DogStore for MongoDogStore {
    async fn list(&self) -> Result<Vec<Dog>, ServiceError> {
        let cursor = self.collection.find(doc! {}).await.map_err(db_err)?;
        cursor.try_collect().await.map_err(db_err)
    }

    async fn create(&self, input: CreateDogInput) -> Result<Dog, ServiceError> {
        let mut dog = input.validate()?;
        let result = self.collection.insert_one(&dog).await.map_err(db_err)?;
        dog.id = result.inserted_id.as_object_id();
        debug!(id = ?dog.id, "inserted dog document");
        Ok(dog)
    }

    async fn get(&self, id: &str) -> Result<Option<Dog>, ServiceError> {
        let oid = Self::parse_id(id)?;
        self.collection.find_one(doc! { "_id": oid }).await.map_err(db_err)
    }

    async fn update(&self, id: &str, input: UpdateDogInput) -> Result<Option<Dog>, ServiceError> {
        let oid = Self::parse_id(id)?;
        input.validate()?;
        if input.is_empty() {
            // Mongo rejects an empty $set; an empty payload is just a read.
            return self.collection.find_one(doc! { "_id": oid }).await.map_err(db_err);
        }
        let fields = bson::to_document(&input).map_err(|e| ServiceError::Db(e.to_string()))?;
        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await
            .map_err(db_err)
    }

    async fn delete(&self, id: &str) -> Result<Option<Dog>, ServiceError> {
        let oid = Self::parse_id(id)?;
        self.collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(db_err)
    }
}
