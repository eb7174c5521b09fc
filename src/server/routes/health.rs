//! Health Routes
//!
//! - GET /health/live - Liveness probe
//! - GET /health - Generated status, used when `dist/health.json` is absent

use axum::http::StatusCode;
use serde::Serialize;

use crate::server::state::ServerState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the UI has not been built
    pub status: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn health_status(state: &ServerState) -> HealthResponse {
    let built = tokio::fs::metadata(state.dist_dir.join("index.html"))
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);

    HealthResponse {
        status: if built { "ok" } else { "degraded" }.to_string(),
        environment: state.environment.name().to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    #[tokio::test]
    async fn test_liveness() {
        assert_eq!(liveness().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unbuilt_ui_is_degraded() {
        let dir = tempfile::tempdir().unwrap();
        let state = ServerState::new(dir.path(), Environment::Staging);
        let status = health_status(&state).await;
        assert_eq!(status.status, "degraded");
        assert_eq!(status.environment, "test");

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert_eq!(health_status(&state).await.status, "ok");
    }
}
