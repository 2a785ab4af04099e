//! Keep-alive HTTP endpoint for hosting platforms that check a port.
//!
//! Runs as its own tokio task next to the Discord client and shares no state
//! with command handling.

use crate::errors::Result;
use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Body of `GET /`.
pub const BANNER: &str = "👨‍🍳 Fridge Chef is open for business!";

#[derive(Debug, Clone, Copy)]
struct KeepAliveState {
    started_at: DateTime<Utc>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Always `"ok"` while the process is serving
    pub status: &'static str,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

async fn banner() -> &'static str {
    BANNER
}

async fn health(State(state): State<KeepAliveState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        started_at: state.started_at,
    })
}

/// Builds the keep-alive router.
pub fn router(started_at: DateTime<Utc>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .with_state(KeepAliveState { started_at })
}

/// Binds `0.0.0.0:port` and serves the keep-alive routes on a spawned task.
///
/// # Errors
/// Returns an error if the port cannot be bound.
pub async fn spawn(port: u16) -> Result<JoinHandle<()>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Keep-alive server listening on http://{addr}");

    let app = router(Utc::now());
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Keep-alive server stopped: {e}");
        }
    }))
}
