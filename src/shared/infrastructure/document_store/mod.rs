/// Document store gateway
///
/// A thin, replaceable interface over a collection-oriented store:
/// - `gateway` - the `DocumentStore` trait and index definitions
/// - `filter` / `pipeline` - typed queries and aggregation stages that render to BSON
/// - `mongo` - MongoDB implementation
/// - `memory` - in-memory implementation for tests and local runs
pub mod filter;
pub mod gateway;
pub mod memory;
pub mod mongo;
pub mod object_id;
pub mod ordering;
pub mod pipeline;

pub use filter::Filter;
pub use gateway::{DocumentStore, IndexSpec};
pub use memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;
pub use object_id::{parse_object_id, try_parse_object_id};
pub use pipeline::{PipelineStage, ProjectedField, SortOrder};

#[cfg(test)]
pub use gateway::MockDocumentStore;
