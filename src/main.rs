use augur_indexer::api::router::create_router;
use augur_indexer::config::AppConfig;
use augur_indexer::search::create_search_provider;
use augur_indexer::metrics::init_metrics;
use augur_indexer::{db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("Connecting to database...");
    let db = db::init_pool(&config).await?;
    db::run_migrations(&db).await?;
    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connected"
    );

    let metrics_handle = init_metrics()?;

    let search = create_search_provider(config.search_backend);
    if search.is_none() {
        tracing::warn!("Search provider disabled (SEARCH_PROVIDER=none), search filters will be ignored");
    }

    let state = AppState {
        db,
        config,
        search,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
