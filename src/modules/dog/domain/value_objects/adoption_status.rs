use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

/// Where a dog stands in the adoption process.
///
/// Each status has a symbolic name (`AVAILABLE`) and a display label
/// (`Available`). The label is what gets stored and shown; decoding accepts
/// either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdoptionStatus {
    #[default]
    Available,
    Adopted,
    Pending,
}

impl AdoptionStatus {
    pub const ALL: [AdoptionStatus; 3] = [
        AdoptionStatus::Available,
        AdoptionStatus::Adopted,
        AdoptionStatus::Pending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdoptionStatus::Available => "Available",
            AdoptionStatus::Adopted => "Adopted",
            AdoptionStatus::Pending => "Pending",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AdoptionStatus::Available => "AVAILABLE",
            AdoptionStatus::Adopted => "ADOPTED",
            AdoptionStatus::Pending => "PENDING",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name)
    }

    /// Label first, then symbolic name. Matching is exact.
    pub fn decode(value: &str) -> AppResult<Self> {
        Self::from_label(value)
            .or_else(|| Self::from_name(value))
            .ok_or_else(|| {
                AppError::ValidationError(format!("Unknown adoption status '{}'", value))
            })
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AdoptionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for AdoptionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for AdoptionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}
