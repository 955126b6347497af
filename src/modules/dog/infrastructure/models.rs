use bson::oid::ObjectId;
use bson::Document;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::dog::domain::entities::dog::Dog;
use crate::modules::dog::domain::entities::enriched_dog::EnrichedDog;
use crate::modules::dog::domain::value_objects::adoption_status::AdoptionStatus;
use crate::shared::config::DOGS_COLLECTION;
use crate::shared::domain::Entity;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::persistence::StoredEntity;

// ============= DOG DOCUMENT =============

/// Stored layout of a dog. `status` holds the label; `breed_id` is a native
/// ObjectId so `$lookup` against `breeds._id` resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub breed_id: Option<ObjectId>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub intake_date: Option<bson::DateTime>,
    #[serde(default)]
    pub adoption_date: Option<bson::DateTime>,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
    #[serde(default)]
    pub updated_at: Option<bson::DateTime>,
}

impl From<&Dog> for DogDocument {
    fn from(dog: &Dog) -> Self {
        Self {
            id: None,
            name: dog.name.clone(),
            breed_id: dog.breed_id,
            age: dog.age,
            gender: dog.gender.clone(),
            description: dog.description.clone(),
            status: Some(dog.status.label().to_string()),
            intake_date: Some(bson::DateTime::from_chrono(dog.intake_date)),
            adoption_date: dog.adoption_date.map(bson::DateTime::from_chrono),
            created_at: Some(bson::DateTime::from_chrono(dog.created_at)),
            updated_at: Some(bson::DateTime::from_chrono(dog.updated_at)),
        }
    }
}

fn decode_status(raw: Option<&str>) -> AppResult<Option<AdoptionStatus>> {
    raw.map(AdoptionStatus::decode).transpose()
}

impl TryFrom<DogDocument> for Dog {
    type Error = AppError;

    fn try_from(document: DogDocument) -> AppResult<Self> {
        let now = Utc::now();
        let mut dog = Dog {
            id: document.id,
            name: document.name,
            breed_id: document.breed_id,
            age: document.age,
            gender: document.gender,
            description: document.description,
            status: decode_status(document.status.as_deref())?.unwrap_or_default(),
            intake_date: document.intake_date.map(|d| d.to_chrono()).unwrap_or(now),
            adoption_date: document.adoption_date.map(|d| d.to_chrono()),
            created_at: document.created_at.map(|d| d.to_chrono()).unwrap_or(now),
            updated_at: document.updated_at.map(|d| d.to_chrono()).unwrap_or(now),
        };
        dog.validate()?;
        Ok(dog)
    }
}

impl StoredEntity for Dog {
    const COLLECTION: &'static str = DOGS_COLLECTION;

    fn to_document(&self) -> AppResult<Document> {
        Ok(bson::to_document(&DogDocument::from(self))?)
    }

    fn from_document(document: Document) -> AppResult<Self> {
        bson::from_document::<DogDocument>(document)?.try_into()
    }

    fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

// ============= ENRICHMENT ROW =============

/// One row of the dog/breed join pipeline. `breed` is missing when the
/// lookup found nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichedDogRow {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub intake_date: Option<bson::DateTime>,
    #[serde(default)]
    pub adoption_date: Option<bson::DateTime>,
}

impl TryFrom<EnrichedDogRow> for EnrichedDog {
    type Error = AppError;

    fn try_from(row: EnrichedDogRow) -> AppResult<Self> {
        Ok(EnrichedDog {
            id: row.id,
            name: row.name,
            breed: row.breed,
            age: row.age,
            gender: row.gender,
            description: row.description,
            status: decode_status(row.status.as_deref())?,
            intake_date: row.intake_date.map(|d| d.to_chrono()),
            adoption_date: row.adoption_date.map(|d| d.to_chrono()),
        })
    }
}

impl EnrichedDog {
    pub fn from_row(document: Document) -> AppResult<Self> {
        bson::from_document::<EnrichedDogRow>(document)?.try_into()
    }
}
