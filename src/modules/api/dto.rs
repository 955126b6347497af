use serde::Serialize;

use crate::modules::breed::Breed;
use crate::modules::dog::EnrichedDog;

/// Shown when a dog's breed reference does not resolve
pub const UNKNOWN_BREED: &str = "Unknown";
/// Reported for dogs stored without a status
pub const DEFAULT_STATUS: &str = "AVAILABLE";

fn breed_or_unknown(dog: &EnrichedDog) -> String {
    dog.breed
        .clone()
        .unwrap_or_else(|| UNKNOWN_BREED.to_string())
}

/// Entry of `GET /api/dogs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DogSummaryResponse {
    pub id: String,
    pub name: String,
    pub breed: String,
}

impl From<&EnrichedDog> for DogSummaryResponse {
    fn from(dog: &EnrichedDog) -> Self {
        Self {
            id: dog.id.to_hex(),
            name: dog.name.clone(),
            breed: breed_or_unknown(dog),
        }
    }
}

/// Body of `GET /api/dogs/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DogDetailResponse {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub status: String,
}

impl From<&EnrichedDog> for DogDetailResponse {
    fn from(dog: &EnrichedDog) -> Self {
        Self {
            id: dog.id.to_hex(),
            name: dog.name.clone(),
            breed: breed_or_unknown(dog),
            age: dog.age,
            description: dog.description.clone(),
            gender: dog.gender.clone(),
            status: dog
                .status
                .map(|status| status.label().to_string())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

/// Entry of `GET /api/breeds`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedResponse {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Breed> for BreedResponse {
    fn from(breed: &Breed) -> Self {
        Self {
            id: breed.id.map(|id| id.to_hex()),
            name: breed.name.clone(),
            description: breed.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub breeds_count: u64,
    pub dogs_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnhealthyResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dog::AdoptionStatus;
    use bson::oid::ObjectId;

    fn dog(breed: Option<&str>, status: Option<AdoptionStatus>) -> EnrichedDog {
        EnrichedDog {
            id: ObjectId::new(),
            name: "Rex".into(),
            breed: breed.map(str::to_string),
            age: Some(3),
            gender: Some("Male".into()),
            description: None,
            status,
            intake_date: None,
            adoption_date: None,
        }
    }

    #[test]
    fn test_missing_breed_defaults_to_unknown() {
        let summary = DogSummaryResponse::from(&dog(None, None));
        assert_eq!(summary.breed, "Unknown");

        let summary = DogSummaryResponse::from(&dog(Some("Beagle"), None));
        assert_eq!(summary.breed, "Beagle");
    }

    #[test]
    fn test_detail_status() {
        let detail = DogDetailResponse::from(&dog(None, Some(AdoptionStatus::Pending)));
        assert_eq!(detail.status, "Pending");

        let detail = DogDetailResponse::from(&dog(None, None));
        assert_eq!(detail.status, "AVAILABLE");
    }
}
