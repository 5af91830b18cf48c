use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::{error, info};

use portal_api::{build_router, AppState};
use portal_core::NavigationService;
use portal_infrastructure::HttpMenuSource;
use portal_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize telemetry
    portal_shared::telemetry::init_telemetry();

    info!("Portal navigation server starting...");

    // Load configuration (.env is read here)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Menu source
    let source = HttpMenuSource::new(&config.menu_source);
    info!("Reading menus from {}", source.endpoint());

    // Create App State
    let state = AppState {
        navigation: Arc::new(NavigationService::new(Arc::new(source))),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT_LANGUAGE]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
