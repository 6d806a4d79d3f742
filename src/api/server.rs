//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::rag::NocEngine;
use crate::Result;

/// Assemble the full application router around an engine
pub fn build_app(engine: Arc<NocEngine>, enable_cors: bool) -> Router {
    let state = AppState::new(engine);

    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: &str, port: u16, enable_cors: bool) -> Result<()> {
    info!("Starting NOC-Oracle API server...");

    let engine = Arc::new(NocEngine::from_config(config).await?);
    let app = build_app(engine, enable_cors);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health    - Health check");
    info!("  POST /api/solution  - Grounded answer (set \"compare\" for a baseline)");
    info!("  POST /api/baseline  - Ungrounded baseline answer");

    axum::serve(listener, app).await?;

    Ok(())
}
