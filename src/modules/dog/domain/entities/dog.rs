use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::super::value_objects::adoption_status::AdoptionStatus;
use crate::shared::domain::projection::{
    format_timestamp, id_value, read_object_id, read_optional_int, read_optional_string,
    read_timestamp, timestamp_value, Projection,
};
use crate::shared::domain::Entity;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{validate_required, validate_string_length, validate_string_value};

const NAME_MIN_LENGTH: usize = 2;
const DESCRIPTION_MIN_LENGTH: usize = 10;

pub const GENDERS: [&str; 3] = ["Male", "Female", "Unknown"];

/// Fields accepted when registering a dog. Omitted status defaults to
/// `Available`, omitted intake date to the construction time.
#[derive(Debug, Clone, Default)]
pub struct NewDog {
    pub name: String,
    pub breed_id: Option<ObjectId>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub status: Option<AdoptionStatus>,
    pub intake_date: Option<DateTime<Utc>>,
    pub adoption_date: Option<DateTime<Utc>>,
}

impl NewDog {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: Option<ObjectId>,
    pub name: String,
    /// Weak reference: the breed may be deleted while the dog remains
    pub breed_id: Option<ObjectId>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub status: AdoptionStatus,
    pub intake_date: DateTime<Utc>,
    pub adoption_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dog {
    pub fn new(fields: NewDog) -> AppResult<Self> {
        let now = Utc::now();
        let mut dog = Self {
            id: None,
            name: fields.name,
            breed_id: fields.breed_id,
            age: fields.age,
            gender: fields.gender,
            description: fields.description,
            status: fields.status.unwrap_or_default(),
            intake_date: fields.intake_date.unwrap_or(now),
            adoption_date: fields.adoption_date,
            created_at: now,
            updated_at: now,
        };
        dog.validate()?;
        Ok(dog)
    }
}

/// Absent, or exactly one of [`GENDERS`]. Values are never corrected.
fn validate_gender(gender: Option<&str>) -> AppResult<Option<String>> {
    match gender {
        None => Ok(None),
        Some(value) if GENDERS.contains(&value) => Ok(Some(value.to_string())),
        Some(_) => Err(AppError::ValidationError(
            "Gender must be 'Male', 'Female', or 'Unknown'".to_string(),
        )),
    }
}

fn read_status(value: Option<&Value>) -> AppResult<AdoptionStatus> {
    match value {
        None | Some(Value::Null) => Ok(AdoptionStatus::default()),
        Some(Value::String(raw)) => AdoptionStatus::decode(raw),
        Some(_) => Err(AppError::ValidationError(
            "Status must be a string".to_string(),
        )),
    }
}

impl Entity for Dog {
    const KIND: &'static str = "Dog";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn validate(&mut self) -> AppResult<()> {
        self.name = validate_required("Dog name", &self.name, NAME_MIN_LENGTH)?;
        self.gender = validate_gender(self.gender.as_deref())?;
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
        data.insert("breed_id".into(), id_value(self.breed_id.as_ref()));
        data.insert("age".into(), self.age.map(Value::from).unwrap_or(Value::Null));
        data.insert(
            "gender".into(),
            self.gender.clone().map(Value::String).unwrap_or(Value::Null),
        );
        data.insert(
            "description".into(),
            self.description
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
        );
        data.insert(
            "status".into(),
            Value::String(self.status.label().to_string()),
        );
        data.insert(
            "intake_date".into(),
            Value::String(format_timestamp(&self.intake_date)),
        );
        data.insert(
            "adoption_date".into(),
            timestamp_value(self.adoption_date.as_ref()),
        );
        data
    }

    fn from_projection(data: &Projection) -> AppResult<Self> {
        let now = Utc::now();
        let name = validate_string_value("Dog name", data.get("name"), NAME_MIN_LENGTH, false)?
            .unwrap_or_default();
        let gender = read_optional_string("gender", data.get("gender"))?;
        let description = validate_string_value(
            "Description",
            data.get("description"),
            DESCRIPTION_MIN_LENGTH,
            true,
        )?;

        Ok(Self {
            id: read_object_id("id", data.get("id"))?,
            name,
            breed_id: read_object_id("breed_id", data.get("breed_id"))?,
            age: read_optional_int("age", data.get("age"))?,
            gender: validate_gender(gender.as_deref())?,
            description,
            status: read_status(data.get("status"))?,
            intake_date: read_timestamp("intake_date", data.get("intake_date"))?.unwrap_or(now),
            adoption_date: read_timestamp("adoption_date", data.get("adoption_date"))?,
            created_at: read_timestamp("created_at", data.get("created_at"))?.unwrap_or(now),
            updated_at: read_timestamp("updated_at", data.get("updated_at"))?.unwrap_or(now),
        })
    }
}
