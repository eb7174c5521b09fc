//! Helium Dev Server
//!
//! Serves the built UI (`helium-ui/dist`) the way the bundler's dev server
//! does: static files as-is, page paths through the history-fallback rewrite
//! table.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - `dist/health.json` if built, else a generated status
//! - everything else - Files from `dist/`, with history fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use helium::config::ServerConfig;
//! use helium::environment::Environment;
//! use helium::server::{serve, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(ServerState::from_config(&config, Environment::Local), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the dev server router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/health/live", get(routes::health::liveness))
        .fallback(routes::pages::serve_page)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the dev server
pub async fn serve(state: ServerState, config: &ServerConfig) -> Result<(), ServerError> {
    let dist_dir = state.dist_dir.clone();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Helium dev server listening on http://{}", addr);
    tracing::info!("Serving {:?}", dist_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Helium dev server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<html><head><title>Helium Student Planner | Lightening Your Course Load</title></head></html>";

    fn create_test_app(files: &[(&str, &str)]) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, content).unwrap();
        }
        let router = build_router(ServerState::new(dir.path(), Environment::Local));
        (router, dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(&[]);
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_built_in() {
        let (app, _dir) = create_test_app(&[("index.html", INDEX)]);
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["environment"], "dev");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _dir) = create_test_app(&[("index.html", INDEX)]);
        let (status, body) = get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Lightening Your Course Load"));
    }

    #[tokio::test]
    async fn test_static_file_served_as_is() {
        let (app, _dir) = create_test_app(&[
            ("index.html", INDEX),
            ("assets/helium.css", "body {}"),
        ]);
        let (status, body) = get(app, "/assets/helium.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_rewrite_to_built_page() {
        let (app, _dir) = create_test_app(&[("index.html", INDEX), ("login.html", "login page")]);
        let (status, body) = get(app, "/login").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "login page");
    }

    #[tokio::test]
    async fn test_history_fallback_to_index() {
        let (app, _dir) = create_test_app(&[("index.html", INDEX)]);
        let (status, body) = get(app, "/planner/grades").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Helium Student Planner"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (app, _dir) = create_test_app(&[("index.html", INDEX), ("404.html", "gone")]);
        let (status, body) = get(app, "/no/such/page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "gone");
    }

    #[tokio::test]
    async fn test_unknown_path_without_404_page_uses_index() {
        let (app, _dir) = create_test_app(&[("index.html", INDEX)]);
        let (status, body) = get(app, "/no/such/page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<title>"));
    }

    #[tokio::test]
    async fn test_missing_build() {
        let (app, _dir) = create_test_app(&[]);
        let (status, body) = get(app, "/").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("UI_NOT_BUILT"));
    }
}
