use bson::doc;
use mongodb::Client;

use super::document_store::{DocumentStore, IndexSpec, MongoDocumentStore};
use crate::shared::config::{AppConfig, BREEDS_COLLECTION, DOGS_COLLECTION};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_info, log_warn};

/// Live connection to the MongoDB deployment named in [`AppConfig`]
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// Connect and ping; fails fast when the deployment is unreachable
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .map_err(|e| {
                log_error!("Failed to create MongoDB client: {}", e);
                AppError::from(e)
            })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                log_error!("Failed to connect to MongoDB: {}", e);
                AppError::from(e)
            })?;

        log_info!(
            "Successfully connected to MongoDB: {}",
            config.database_name
        );

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn document_store(&self) -> MongoDocumentStore {
        MongoDocumentStore::new(self.client.database(&self.database_name))
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// Indexes the shelter collections rely on: unique breed names, plus lookup
/// indexes on the dog fields used for sorting and filtering.
pub fn shelter_indexes() -> Vec<(&'static str, Vec<IndexSpec>)> {
    vec![
        (
            DOGS_COLLECTION,
            vec![
                IndexSpec::ascending("name"),
                IndexSpec::ascending("breed_id"),
                IndexSpec::ascending("status"),
                IndexSpec::ascending("age"),
            ],
        ),
        (BREEDS_COLLECTION, vec![IndexSpec::unique("name")]),
    ]
}

/// Create the shelter indexes. Failures are logged, not fatal.
pub async fn ensure_indexes(store: &dyn DocumentStore) -> bool {
    let mut all_created = true;
    for (collection, indexes) in shelter_indexes() {
        if let Err(e) = store.ensure_indexes(collection, indexes).await {
            log_warn!("Failed to create indexes on {}: {}", collection, e);
            all_created = false;
        }
    }
    if all_created {
        log_info!("Database indexes created successfully");
    }
    all_created
}
