//! `compdir serve` -- HTTP server for the company directory page.
//!
//! Serves the rendered "Company Data" page using `axum` + `tokio`. The
//! database is probed once at startup; an unreachable database is fatal
//! before the listener is bound, matching the page the service replaces.
//!
//! Endpoints:
//! - GET /        - Rendered "Company Data" HTML page
//! - GET /health  - Server status (JSON)

mod handlers;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use compdir_core::config::DirectoryConfig;
use compdir_core::db;

use self::handlers::{handle_directory, handle_health, handle_not_found};
use self::state::AppState;

/// Start the HTTP server, listening on `port_override` or the config port.
///
/// Each request opens and closes its own database connection; the shared
/// state holds only the immutable config.
pub async fn start_server(
    mut config: DirectoryConfig,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(port) = port_override {
        config.server.port = port;
    }

    // Startup probe: connection failure halts before anything is served.
    db::probe(&config.database).await?;

    let port = config.server.port;
    let state = Arc::new(AppState { config });

    // CORS: permissive for a read-only page service.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handle_directory))
        .route("/health", get(handle_health))
        .fallback(handle_not_found)
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("Company directory listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("\nServer shut down.");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    eprintln!("\nReceived shutdown signal...");
}
