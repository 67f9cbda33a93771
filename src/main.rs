use axum::Router;
use runroute::config::Config;
use runroute::services::geocoder::NominatimClient;
use runroute::services::route_engine::RouteEngine;
use runroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting RunRoute API server");
    tracing::info!(
        geocoder = %config.geocoder.base_url,
        timeout_secs = config.geocoder.timeout_secs,
        alternatives = config.engine.num_routes,
        "Configuration loaded successfully"
    );

    // Initialize services
    let geocoder = Arc::new(NominatimClient::from_config(&config.geocoder));
    let engine = RouteEngine::new(geocoder, config.engine.clone());

    // Create application state
    let state = Arc::new(AppState { engine });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", runroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
