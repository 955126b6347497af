use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::shared::domain::projection::{
    format_timestamp, read_object_id, read_timestamp, Projection,
};
use crate::shared::domain::Entity;
use crate::shared::errors::AppResult;
use crate::shared::validation::{validate_required, validate_string_length, validate_string_value};

const NAME_MIN_LENGTH: usize = 2;
const DESCRIPTION_MIN_LENGTH: usize = 10;

/// A dog breed, referenced by dogs through their `breed_id`
#[derive(Debug, Clone, PartialEq)]
pub struct Breed {
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Breed {
    /// New, not yet persisted breed. Name and description are validated and trimmed.
    pub fn new(name: impl Into<String>, description: Option<String>) -> AppResult<Self> {
        let now = Utc::now();
        let mut breed = Self {
            id: None,
            name: name.into(),
            description,
            created_at: now,
            updated_at: now,
        };
        breed.validate()?;
        Ok(breed)
    }
}

impl Entity for Breed {
    const KIND: &'static str = "Breed";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn validate(&mut self) -> AppResult<()> {
        self.name = validate_required("Breed name", &self.name, NAME_MIN_LENGTH)?;
        self.description = validate_string_length(
            "Description",
            self.description.as_deref(),
            DESCRIPTION_MIN_LENGTH,
            true,
        )?;
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn to_projection(&self, include_id: bool) -> Projection {
        let mut data = Projection::new();
        if let (true, Some(id)) = (include_id, self.id) {
            data.insert("id".into(), Value::String(id.to_hex()));
        }
        data.insert(
            "created_at".into(),
            Value::String(format_timestamp(&self.created_at)),
        );
        data.insert(
            "updated_at".into(),
            Value::String(format_timestamp(&self.updated_at)),
        );
        data.insert("name".into(), Value::String(self.name.clone()));
        data.insert(
            "description".into(),
            self.description
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
        );
        data
    }

    fn from_projection(data: &Projection) -> AppResult<Self> {
        let now = Utc::now();
        let name = validate_string_value("Breed name", data.get("name"), NAME_MIN_LENGTH, false)?
            .unwrap_or_default();
        let description = validate_string_value(
            "Description",
            data.get("description"),
            DESCRIPTION_MIN_LENGTH,
            true,
        )?;

        Ok(Self {
            id: read_object_id("id", data.get("id"))?,
            name,
            description,
            created_at: read_timestamp("created_at", data.get("created_at"))?.unwrap_or(now),
            updated_at: read_timestamp("updated_at", data.get("updated_at"))?.unwrap_or(now),
        })
    }
}
