use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_polls::MemoryPollStore;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StoreConfig};
use state::{AppState, Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = match &config.store {
        StoreConfig::MongoDb(mongo) => {
            info!("Connecting to MongoDB at {}", mongo.redacted_url());
            let client = database::mongodb::connect_from_config_with_retry(mongo, None).await?;
            let db = client.database(mongo.database());
            info!("Successfully connected to MongoDB database: {}", mongo.database());

            api::polls::init_indexes(&db).await?;
            Store::MongoDb { client, db }
        }
        StoreConfig::Memory => {
            warn!("Using in-memory poll store; data is lost on restart");
            Store::Memory(MemoryPollStore::new())
        }
    };

    let state = AppState { config, store };

    let probes = health_router(state.config.app).merge(api::health::router(state.clone()));
    let app = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state), probes);

    info!(
        "Starting Chosei API ({:?} shutdown timeout)",
        state.config.server.shutdown_timeout
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, async move {
        if let Store::MongoDb { client, .. } = state.store {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed successfully");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Chosei API shutdown complete");
    Ok(())
}
