use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use funding_match::config::{LoggingSettings, RepositoryBackend, Settings};
use funding_match::core::{Ranker, RecommendationEngine};
use funding_match::models::ScoringWeights;
use funding_match::routes::{self, AppState};
use funding_match::services::{InMemoryRepository, OpportunityRepository, PostgresRepository};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// RUST_LOG and LOG_LEVEL take precedence over the configured level, LOG_FORMAT
/// over the configured format.
fn init_tracing(logging: &LoggingSettings) {
    let logging = logging.with_process_env();
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

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

async fn build_repository(settings: &Settings) -> std::io::Result<Arc<dyn OpportunityRepository>> {
    match settings.repository.backend {
        RepositoryBackend::Postgres => {
            let repository = PostgresRepository::connect(
                &settings.database.url,
                &settings.database.pool_options(),
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;

            info!(
                "PostgreSQL repository initialized (max: {} connections)",
                settings.database.pool_options().max_connections
            );
            Ok(Arc::new(repository))
        }
        RepositoryBackend::Memory => match &settings.repository.data_file {
            Some(path) => {
                let repository = InMemoryRepository::from_json_file(path).map_err(|e| {
                    error!("Failed to load opportunities from {}: {}", path.display(), e);
                    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
                })?;

                info!("In-memory repository initialized from {}", path.display());
                Ok(Arc::new(repository))
            }
            None => {
                warn!("Using empty in-memory repository; no opportunities will be recommended");
                Ok(Arc::new(InMemoryRepository::default()))
            }
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting funding match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let repository = build_repository(&settings).await?;

    // Initialize engine with configured weights and ranking
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let ranker = Ranker::from(&settings.ranking);

    if weights.max_score() != 100.0 {
        warn!("Scoring weights sum to {}, scores are clamped to 100", weights.max_score());
    }

    let engine = RecommendationEngine::new(weights, ranker);

    info!("Engine initialized with weights: {:?}, ranker: {:?}", weights, ranker);

    let app_state = AppState {
        repository,
        engine,
        candidate_limit: settings.repository.candidate_limit,
        listing_limit: settings.repository.listing_limit,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
