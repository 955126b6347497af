use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::super::value_objects::adoption_status::AdoptionStatus;
use crate::shared::domain::projection::{timestamp_value, Projection};

/// A dog joined with the name of its breed.
///
/// `breed` is `None` when the dog has no breed reference or the reference
/// resolves to no breed. Read-only: never saved back.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDog {
    pub id: ObjectId,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub status: Option<AdoptionStatus>,
    pub intake_date: Option<DateTime<Utc>>,
    pub adoption_date: Option<DateTime<Utc>>,
}

impl EnrichedDog {
    /// Exactly `id, name, breed, age, gender, description, status,
    /// intake_date, adoption_date`; `breed` is left out when unresolved.
    pub fn to_projection(&self) -> Projection {
        let mut data = Projection::new();
        data.insert("id".into(), Value::String(self.id.to_hex()));
        data.insert("name".into(), Value::String(self.name.clone()));
        if let Some(breed) = &self.breed {
            data.insert("breed".into(), Value::String(breed.clone()));
        }
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
            self.status
                .map(|status| Value::String(status.label().to_string()))
                .unwrap_or(Value::Null),
        );
        data.insert(
            "intake_date".into(),
            timestamp_value(self.intake_date.as_ref()),
        );
        data.insert(
            "adoption_date".into(),
            timestamp_value(self.adoption_date.as_ref()),
        );
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> EnrichedDog {
        EnrichedDog {
            id: ObjectId::new(),
            name: "Rex".into(),
            breed: None,
            age: Some(2),
            gender: None,
            description: None,
            status: Some(AdoptionStatus::Available),
            intake_date: None,
            adoption_date: None,
        }
    }

    #[test]
    fn test_unresolved_breed_is_omitted() {
        let data = rex().to_projection();
        assert!(!data.contains_key("breed"));
        assert_eq!(data.len(), 8);
        assert_eq!(data["status"], Value::String("Available".into()));
    }

    #[test]
    fn test_resolved_breed_is_present() {
        let dog = EnrichedDog {
            breed: Some("Labrador".into()),
            ..rex()
        };
        let data = dog.to_projection();
        assert_eq!(data["breed"], Value::String("Labrador".into()));
        assert_eq!(data.len(), 9);
    }
}
