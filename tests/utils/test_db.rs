/// Isolated MongoDB databases for the opt-in live tests.
///
/// Set `TEST_MONGODB_URI` to run them; each `TestDb` gets its own uniquely
/// named database which `cleanup` drops.
use shelter_lib::shared::config::AppConfig;
use shelter_lib::shared::infrastructure::{Database, DocumentStore};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct TestDb {
    database: Database,
    client_db: mongodb::Database,
}

impl TestDb {
    /// `None` when `TEST_MONGODB_URI` is not set
    pub async fn connect() -> Option<Self> {
        dotenvy::dotenv().ok();
        let uri = std::env::var("TEST_MONGODB_URI").ok()?;

        // Database name format: shelter_test_{process_id}_{counter}
        let name = format!(
            "shelter_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let config = AppConfig::from_lookup(|key| match key {
            "MONGODB_URI" => Some(uri.clone()),
            "DATABASE_NAME" => Some(name.clone()),
            "APP_ENV" => Some("testing".to_string()),
            _ => None,
        })
        .expect("test configuration should be valid");

        let database = Database::connect(&config)
            .await
            .expect("TEST_MONGODB_URI should point at a reachable server");
        let client = mongodb::Client::with_uri_str(&uri)
            .await
            .expect("Failed to create cleanup client");

        Some(Self {
            database,
            client_db: client.database(&name),
        })
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::new(self.database.document_store())
    }

    pub fn name(&self) -> &str {
        self.database.database_name()
    }

    pub async fn cleanup(self) {
        if let Err(e) = self.client_db.drop().await {
            eprintln!("Failed to drop test database '{}': {}", self.name(), e);
        }
    }
}
