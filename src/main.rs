use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mentor_match::config::{LoggingSettings, Settings, StoreBackend};
use mentor_match::core::Matcher;
use mentor_match::routes::{self, AppState};
use mentor_match::services::{CachedProfileStore, InMemoryProfileStore, PostgresProfileStore, ProfileStore};
use std::io::{Error as IoError, ErrorKind};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

async fn build_store(settings: &Settings) -> std::io::Result<Arc<dyn ProfileStore>> {
    let store: Arc<dyn ProfileStore> = match settings.store.backend {
        StoreBackend::Memory => {
            let store = match &settings.store.seed_path {
                Some(path) => InMemoryProfileStore::from_seed_file(path).map_err(|e| {
                    error!("Failed to load seed file {}: {}", path.display(), e);
                    IoError::new(ErrorKind::InvalidData, e.to_string())
                })?,
                None => {
                    warn!("In-memory store has no seed file, every lookup will miss");
                    InMemoryProfileStore::default()
                }
            };
            info!("Using in-memory profile store");
            Arc::new(store)
        }
        StoreBackend::Postgres => {
            let database = settings.database.as_ref().ok_or_else(|| {
                error!("store.backend = \"postgres\" requires a [database] section");
                IoError::new(ErrorKind::InvalidInput, "missing database settings")
            })?;

            let store = PostgresProfileStore::from_settings(
                &database.url,
                database.max_connections,
                database.min_connections,
                database.acquire_timeout_secs,
                database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                IoError::new(ErrorKind::Other, e.to_string())
            })?;

            info!(
                "PostgreSQL profile store initialized (max: {} connections)",
                database.max_connections.unwrap_or(10)
            );
            Arc::new(store)
        }
    };

    if !settings.cache.enabled() {
        return Ok(store);
    }

    let ttl = settings.cache.mentor_ttl_secs.unwrap_or(0);
    let capacity = settings.cache.capacity.unwrap_or(16);
    info!("Mentor catalog cache enabled (TTL: {}s)", ttl);

    Ok(Arc::new(CachedProfileStore::new(store, capacity, ttl)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    init_tracing(&settings.as_ref().map(|s| s.logging.clone()).unwrap_or_default());

    info!("Starting mentor matching service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        IoError::new(ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let store = build_store(&settings).await?;

    let weights = settings.scoring_weights();
    if (weights.total() - 100.0).abs() > f64::EPSILON {
        warn!("Scoring weights sum to {}, scores will still be capped at 100", weights.total());
    }

    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState { store, matcher };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_app)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
