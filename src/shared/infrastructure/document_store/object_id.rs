use bson::oid::ObjectId;

use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};

/// Parse a client-supplied identifier into the store's native form
pub fn try_parse_object_id(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::MalformedIdentifier(format!("'{}' is not a valid identifier", raw)))
}

/// Soft-fail variant used by every lookup path: a malformed id behaves like
/// a missing record instead of an error.
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    match try_parse_object_id(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            log_debug!("Treating lookup as not found: {}", e);
            None
        }
    }
}
