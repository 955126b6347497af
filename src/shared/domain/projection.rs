use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::shared::errors::{AppError, AppResult};

/// Flat key/value representation of an entity for transport
pub type Projection = Map<String, Value>;

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn id_value(id: Option<&ObjectId>) -> Value {
    id.map(|id| Value::String(id.to_hex())).unwrap_or(Value::Null)
}

pub fn timestamp_value(timestamp: Option<&DateTime<Utc>>) -> Value {
    timestamp
        .map(|ts| Value::String(format_timestamp(ts)))
        .unwrap_or(Value::Null)
}

/// Reads an identifier rendered as a hex string. `null` and absence are `None`.
pub fn read_object_id(field: &str, value: Option<&Value>) -> AppResult<Option<ObjectId>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => ObjectId::parse_str(raw.trim()).map(Some).map_err(|_| {
            AppError::ValidationError(format!("{} must be a valid identifier", field))
        }),
        Some(_) => Err(AppError::ValidationError(format!(
            "{} must be a string identifier",
            field
        ))),
    }
}

/// Reads an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn read_timestamp(field: &str, value: Option<&Value>) -> AppResult<Option<DateTime<Utc>>> {
    let raw = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(raw)) => raw.trim(),
        Some(_) => {
            return Err(AppError::ValidationError(format!(
                "{} must be an ISO-8601 string",
                field
            )))
        }
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| AppError::ValidationError(format!("{} is not a valid timestamp: {}", field, e)))
}

pub fn read_optional_int(field: &str, value: Option<&Value>) -> AppResult<Option<i32>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| AppError::ValidationError(format!("{} must be an integer", field))),
        Some(_) => Err(AppError::ValidationError(format!(
            "{} must be an integer",
            field
        ))),
    }
}

pub fn read_optional_string(field: &str, value: Option<&Value>) -> AppResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::ValidationError(format!(
            "{} must be a string",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let rendered = format_timestamp(&ts);
        assert_eq!(rendered, "2024-03-01T12:30:00.000000Z");

        let parsed = read_timestamp("created_at", Some(&json!(rendered))).unwrap();
        assert_eq!(parsed, Some(ts));
    }

    #[test]
    fn test_naive_timestamp_is_utc() {
        let parsed = read_timestamp("intake_date", Some(&json!("2024-03-01T12:30:00.250000")))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.timestamp_millis() % 1000, 250);
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap() + chrono::Duration::milliseconds(250));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        assert!(read_timestamp("intake_date", Some(&json!("yesterday"))).is_err());
        assert!(read_timestamp("intake_date", Some(&json!(5))).is_err());
        assert_eq!(read_timestamp("intake_date", None).unwrap(), None);
    }

    #[test]
    fn test_read_object_id() {
        let id = ObjectId::new();
        assert_eq!(
            read_object_id("breed_id", Some(&json!(id.to_hex()))).unwrap(),
            Some(id)
        );
        assert_eq!(read_object_id("breed_id", Some(&Value::Null)).unwrap(), None);
        assert!(read_object_id("breed_id", Some(&json!("zzz"))).is_err());
    }

    #[test]
    fn test_read_optional_int() {
        assert_eq!(read_optional_int("age", Some(&json!(4))).unwrap(), Some(4));
        assert!(read_optional_int("age", Some(&json!("4"))).is_err());
        assert!(read_optional_int("age", Some(&json!(4.5))).is_err());
    }
}
