pub mod modules;
pub mod shared;

use std::net::SocketAddr;
use std::sync::Arc;

use modules::api::{build_router, AppState};
use modules::breed::BreedRepositoryImpl;
use modules::dog::DogRepositoryImpl;
use modules::seeding::{SeedReport, SeedService};
use shared::config::AppConfig;
use shared::infrastructure::{ensure_indexes, Database, DocumentStore};
use shared::utils::init_logger;

/// Connect to the configured database and make sure its indexes exist
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let database = Database::connect(config).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(database.document_store());
    ensure_indexes(store.as_ref()).await;
    Ok(store)
}

/// Start the HTTP server and block until it stops
pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logger(config.debug);
    log::info!(
        "Starting in {} mode (debug: {})",
        config.environment.as_str(),
        config.debug
    );
    let store = open_store(&config).await?;

    // Dependency injection: every repository shares the one store handle
    let router = build_router(AppState::from_store(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Dog shelter API listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}

/// Seed empty collections from `breeds.csv` and `dogs.csv` in the configured data directory
pub async fn seed() -> anyhow::Result<SeedReport> {
    use rand::SeedableRng;

    let config = AppConfig::from_env()?;
    init_logger(config.debug);
    let store = open_store(&config).await?;

    let breeds_csv = tokio::fs::read_to_string(config.seed_data_dir.join("breeds.csv")).await?;
    let dogs_csv = tokio::fs::read_to_string(config.seed_data_dir.join("dogs.csv")).await?;

    let mut service = SeedService::new(
        Arc::new(BreedRepositoryImpl::new(Arc::clone(&store))),
        Arc::new(DogRepositoryImpl::new(store)),
        rand::rngs::StdRng::from_entropy(),
    );
    let report = service.seed_database(&breeds_csv, &dogs_csv).await?;
    Ok(report)
}
