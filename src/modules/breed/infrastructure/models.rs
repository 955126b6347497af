use bson::oid::ObjectId;
use bson::Document;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::breed::domain::entities::breed::Breed;
use crate::shared::config::BREEDS_COLLECTION;
use crate::shared::domain::Entity;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::persistence::StoredEntity;

/// Stored layout of a breed. `_id` is left out on writes so the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub updated_at: Option<bson::DateTime>,
}

impl From<&Breed> for BreedDocument {
    fn from(breed: &Breed) -> Self {
        Self {
            id: None,
            name: breed.name.clone(),
            description: breed.description.clone(),
            created_at: Some(bson::DateTime::from_chrono(breed.created_at)),
            updated_at: Some(bson::DateTime::from_chrono(breed.updated_at)),
        }
    }
}

impl TryFrom<BreedDocument> for Breed {
    type Error = AppError;

    fn try_from(document: BreedDocument) -> AppResult<Self> {
        let now = Utc::now();
        let mut breed = Breed {
            id: document.id,
            name: document.name,
            description: document.description,
            created_at: document.created_at.map(|d| d.to_chrono()).unwrap_or(now),
            updated_at: document.updated_at.map(|d| d.to_chrono()).unwrap_or(now),
        };
        breed.validate()?;
        Ok(breed)
    }
}

impl StoredEntity for Breed {
    const COLLECTION: &'static str = BREEDS_COLLECTION;

    fn to_document(&self) -> AppResult<Document> {
        Ok(bson::to_document(&BreedDocument::from(self))?)
    }

    fn from_document(document: Document) -> AppResult<Self> {
        bson::from_document::<BreedDocument>(document)?.try_into()
    }

    fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
