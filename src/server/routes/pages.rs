//! Page Routes
//!
//! Everything that is not a health probe lands here. Real files in `dist/`
//! are served as-is; other paths go through the history-fallback rewrite
//! table, and a rewrite target that was not built falls back to
//! `index.html` so the client-side router can render the scene.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::util::ServiceExt;
use tower_http::services::ServeFile;

use super::health::health_status;
use crate::routes;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::ServerState;

const NOT_FOUND_PAGE: &str = "/404.html";
const HEALTH_FILE: &str = "/health.json";

/// Fallback handler for every page and asset request
pub async fn serve_page(
    State(state): State<Arc<ServerState>>,
    request: Request,
) -> ServerResult<Response> {
    let path = request.uri().path().to_string();

    let requested = state
        .dist_path(&path)
        .ok_or_else(|| ServerError::BadRequest(format!("invalid path {}", path)))?;
    if path != "/" && is_file(&requested).await {
        return send_file(requested, request, StatusCode::OK).await;
    }

    let target = routes::rewrite(&path);
    tracing::debug!(path = %path, rewrite = target, "history fallback");

    let status = if target == NOT_FOUND_PAGE {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    if let Some(file) = state.dist_path(target) {
        if is_file(&file).await {
            return send_file(file, request, status).await;
        }
    }

    if target == HEALTH_FILE {
        return Ok(Json(health_status(&state).await).into_response());
    }

    let index = state.dist_dir.join("index.html");
    if !is_file(&index).await {
        return Err(ServerError::MissingBuild(state.dist_dir.clone()));
    }
    send_file(index, request, status).await
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn send_file(file: PathBuf, request: Request, status: StatusCode) -> ServerResult<Response> {
    let mut response = ServeFile::new(file)
        .oneshot(request)
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?
        .into_response();

    if response.status().is_success() {
        *response.status_mut() = status;
    }
    Ok(response)
}
