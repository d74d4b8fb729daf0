use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nowzer::{
    api,
    auth::AuthService,
    config::{Settings, StorageBackend},
    repository::DataStore,
    service::ServiceContext,
    storage::{FileStorage, MemoryStorage, Storage},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nowzer=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!("Starting Nowzer server on {}:{}", settings.server.host, settings.server.port);

    // Pick the storage backend once, up front
    let storage: Arc<dyn Storage> = match settings.storage.backend {
        StorageBackend::File => {
            tracing::info!("Using file storage in {}", settings.storage.data_dir.display());
            Arc::new(FileStorage::new(&settings.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; content will not survive a restart");
            Arc::new(MemoryStorage::new())
        }
    };

    let store = Arc::new(DataStore::open(storage, settings.storage.seed_defaults).await?);
    let auth_service = Arc::new(AuthService::new(&settings.auth)?);

    let service_context = Arc::new(ServiceContext::new(store, auth_service));

    let app = api::create_app(service_context, Arc::new(settings.clone()));

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", settings.server.host, settings.server.port)
    ).await?;

    tracing::info!("Server listening on http://{}:{}", settings.server.host, settings.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
