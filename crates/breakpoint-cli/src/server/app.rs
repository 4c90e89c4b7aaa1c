//! Axum application setup.

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::{AppState, ServerConfig};
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The JSON API may be called from other origins; the form is same-origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/rules", get(handlers::get_rules))
        .route("/organisms", get(handlers::list_organisms))
        .route(
            "/organisms/:organism/antibiotics",
            get(handlers::list_antibiotics),
        )
        .route("/classify", post(handlers::classify))
        .layer(cors);

    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit_form))
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
///
/// `on_bound` runs once the listener holds the port, before the first
/// request is accepted. It is not called when binding fails.
pub async fn run_server(
    state: AppState,
    config: &ServerConfig,
    on_bound: impl FnOnce(SocketAddr),
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    let addr = listener.local_addr()?;
    info!(addr = %addr, "server listening");
    on_bound(addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
