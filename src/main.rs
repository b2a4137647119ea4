//! RegBoard - Application Entry Point
//!
//! This is the main entry point for the RegBoard server.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regboard::{
    config::{StoreBackend, CONFIG},
    create_router,
    db::{
        self,
        repositories::{MemoryRegistrationStore, PgRegistrationStore},
        RegistrationStore,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RegBoard server...");

    let store: Arc<dyn RegistrationStore> = match CONFIG.store.backend {
        StoreBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = db::create_pool(&CONFIG.store).await?;
            db::test_connection(&pool).await?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&pool).await?;

            Arc::new(PgRegistrationStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory registration store; data is lost on restart");
            Arc::new(MemoryRegistrationStore::new())
        }
    };

    let state = AppState::new(store, CONFIG.clone());
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
