use bson::oid::ObjectId;

use super::projection::Projection;
use crate::shared::errors::AppResult;

/// Capabilities shared by every persisted record kind.
///
/// Implementors keep their fields public so callers can mutate a record
/// after construction; `validate` is therefore re-run before every write.
pub trait Entity: Sized + Send + Sync {
    /// Human-readable name used in log lines and error messages
    const KIND: &'static str;

    /// Store-assigned identifier, `None` until the first insert
    fn id(&self) -> Option<ObjectId>;

    /// Check every constrained field, normalising (trimming) values in place
    fn validate(&mut self) -> AppResult<()>;

    /// Refresh the `updated_at` timestamp
    fn touch(&mut self);

    /// Flat key/value view with string ids and ISO-8601 timestamps
    fn to_projection(&self, include_id: bool) -> Projection;

    /// Rebuild (and validate) a record from a projection
    fn from_projection(data: &Projection) -> AppResult<Self>;
}
