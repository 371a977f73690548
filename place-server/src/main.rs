use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use place_server::cache::ResolutionCache;
use place_server::config::ServerConfig;
use place_server::engine::ResolutionEngine;
use place_server::offline::OfflineSource;
use place_server::provider::ProviderClient;
use place_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("place_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let settings = config.settings_source();

    let gateway = ProviderClient::new(config.provider.clone())?;
    let cache = ResolutionCache::new(&config.cache);
    let engine = ResolutionEngine::new(gateway, cache, OfflineSource::new(), settings);

    info!(
        geocoder = %config.provider.geocoder_url,
        router = %config.provider.router_url,
        cache_dir = ?config.cache.dir,
        settings = ?config.settings_path,
        offline_override = ?config.offline_mode,
        "resolver configured"
    );

    let app = create_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("place server listening on http://{}", config.bind);
    info!("  GET  /api/search?q=...");
    info!("  GET  /api/nearby?lat=..&lng=..&category=..");
    info!("  GET  /api/route?from_lat=..&from_lng=..&to_lat=..&to_lng=..&mode=..");
    info!("  POST /api/cache/clear");

    axum::serve(listener, app).await?;
    Ok(())
}
