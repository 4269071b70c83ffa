use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// An adoptable dog as stored in the `dogs` collection.
///
/// The identifier lives under `_id` in the document and is `None` only on the
/// way into an insert; optional fields that were never supplied are omitted
/// from the document entirely rather than stored as nulls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: f64,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<DogOwner>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Submitted payload for creating a dog. Everything is optional at the wire
/// level; [`CreateDogInput::validate`] enforces the required set and unknown
/// payload keys are dropped by serde before they get here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDogInput {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub owner: Option<DogOwner>,
}

impl CreateDogInput {
    /// Enforce the write-time invariants (`name`, `age`, `gender` present and
    /// well formed) and convert into a record ready for insertion.
    pub fn validate(self) -> Result<Dog, ModelError> {
        let name = require_text("name", self.name)?;
        let age = self
            .age
            .ok_or_else(|| ModelError::Validation("age is required".into()))?;
        let gender = require_text("gender", self.gender)?;
        Ok(Dog {
            id: None,
            name,
            age,
            gender,
            color: self.color,
            weight: self.weight,
            location: self.location,
            image_url: self.image_url,
            description: self.description,
            owner: self.owner,
        })
    }
}

/// Submitted payload for a partial update. Unlike create, the required-field
/// set is deliberately NOT re-checked here: fields absent from the payload
/// keep their stored values, so a partial update never has to restate them.
/// Only fields that are present are validated. An `id`/`_id` key in the
/// payload is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDogInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<DogOwner>,
}

impl UpdateDogInput {
    /// Check every field that is present; a single violation aborts the whole
    /// update before anything is merged.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ModelError::Validation("name must be a non-empty string".into()));
            }
        }
        if let Some(gender) = &self.gender {
            if gender.trim().is_empty() {
                return Err(ModelError::Validation("gender must be a non-empty string".into()));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.color.is_none()
            && self.weight.is_none()
            && self.location.is_none()
            && self.image_url.is_none()
            && self.description.is_none()
            && self.owner.is_none()
    }
}

/// Wire representation of a dog: the identifier is flattened to a hex string
/// under `id` and unset optional fields are omitted from the JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogResponse {
    pub id: String,
    pub name: String,
    pub age: f64,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<DogOwner>,
}

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        Self {
            id: dog.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: dog.name,
            age: dog.age,
            gender: dog.gender,
            color: dog.color,
            weight: dog.weight,
            location: dog.location,
            image_url: dog.image_url,
            description: dog.description,
            owner: dog.owner,
        }
    }
}

fn require_text(field: &str, value: Option<String>) -> Result<String, ModelError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(ModelError::Validation(format!("{field} must be a non-empty string"))),
        None => Err(ModelError::Validation(format!("{field} is required"))),
    }
}
