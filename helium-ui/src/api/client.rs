//! HTTP API Client
//!
//! Functions for communicating with the planner REST API. The backend is
//! chosen from the page's own location; a URL saved in local storage wins.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use helium::api::{
    ApiError, ApiResult, ForgotRequest, InfoResponse, LoginRequest, RefreshRequest,
    RegisterRequest, TokenPair, UserDetails, BLACKLIST_PATH, FORGOT_PATH, INFO_PATH,
    REFRESH_PATH, REGISTER_PATH, TOKEN_PATH, USER_PATH,
};
use helium::environment::Endpoints;
use helium::flows::VerifyParams;
use helium::session::needs_refresh;

use crate::state::session;

/// Local storage key of the API URL override
pub const API_URL_KEY: &str = "helium_api_url";

/// Endpoints for the current page, honouring a saved API URL
pub fn endpoints() -> Endpoints {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_else(|| "http:".to_string());
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_else(|| "localhost:3000".to_string());

    let endpoints = Endpoints::resolve(&protocol, &host);
    match session::get_item(API_URL_KEY) {
        Some(url) => endpoints.with_api_url(url),
        None => endpoints,
    }
}

/// The API base URL in use
pub fn get_api_base() -> String {
    endpoints().api_url
}

/// Save an API URL override; an empty URL clears it
pub fn set_api_base(url: &str) {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        session::remove_item(API_URL_KEY);
    } else {
        session::set_item(API_URL_KEY, url);
    }
}

fn url(path: &str) -> String {
    endpoints().api(path)
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Send a request and return the body of a successful response
async fn send(request: Request) -> ApiResult<String> {
    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if response.ok() {
        Ok(body)
    } else {
        Err(ApiError::from_response(status, &body))
    }
}

/// Attach `Authorization: Bearer` when a token is known
fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
    builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET /common/info/
pub async fn info() -> ApiResult<InfoResponse> {
    let body = send(Request::get(&url(INFO_PATH)).build().map_err(transport)?).await?;
    decode(&body)
}

/// PUT /auth/user/forgot/
pub async fn forgot(request: &ForgotRequest) -> ApiResult<()> {
    send(with_json(Request::put(&url(FORGOT_PATH)), request)?).await?;
    Ok(())
}

/// POST /auth/token/
pub async fn login(request: &LoginRequest) -> ApiResult<TokenPair> {
    let body = send(with_json(Request::post(&url(TOKEN_PATH)), request)?).await?;
    decode(&body)
}

/// POST /auth/token/refresh/
pub async fn refresh(refresh: &str) -> ApiResult<TokenPair> {
    let request = RefreshRequest {
        refresh: refresh.to_string(),
    };
    let body = send(with_json(Request::post(&url(REFRESH_PATH)), &request)?).await?;
    decode(&body)
}

/// POST /auth/token/blacklist/
///
/// Takes the access token explicitly; logout clears storage before this
/// request goes out.
pub async fn blacklist(refresh: &str, access: Option<&str>) -> ApiResult<()> {
    let request = RefreshRequest {
        refresh: refresh.to_string(),
    };
    let builder = authorized(Request::post(&url(BLACKLIST_PATH)), access);
    send(with_json(builder, &request)?).await?;
    Ok(())
}

/// POST /auth/user/register/
pub async fn register(request: &RegisterRequest) -> ApiResult<()> {
    send(with_json(Request::post(&url(REGISTER_PATH)), request)?).await?;
    Ok(())
}

/// GET /auth/user/verify/
pub async fn verify(params: &VerifyParams) -> ApiResult<()> {
    send(
        Request::get(&url(&params.api_path()))
            .build()
            .map_err(transport)?,
    )
    .await?;
    Ok(())
}

/// A valid access token, refreshing the stored pair when it is about to
/// expire
async fn access_token() -> ApiResult<String> {
    let token = session::access_token()
        .ok_or_else(|| ApiError::from_response(401, r#"{"detail": "Not signed in."}"#))?;

    let expiring = session::access_token_exp()
        .map_or(false, |exp| needs_refresh(exp, chrono::Utc::now()));
    if !expiring {
        return Ok(token);
    }

    let stored_refresh = session::refresh_token()
        .ok_or_else(|| ApiError::from_response(401, r#"{"detail": "Session expired."}"#))?;
    let tokens = refresh(&stored_refresh).await?;
    session::store_tokens(&tokens, endpoints().environment);
    Ok(tokens.access)
}

/// GET /auth/user/
pub async fn user() -> ApiResult<UserDetails> {
    let token = access_token().await?;
    let request = authorized(Request::get(&url(USER_PATH)), Some(&token))
        .build()
        .map_err(transport)?;
    let body = send(request).await?;
    decode(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn blacklist_request_carries_bearer_token() {
        let request = RefreshRequest {
            refresh: "r".into(),
        };
        let builder = authorized(Request::post("http://localhost/auth/token/blacklist/"), Some("a"));
        let request = with_json(builder, &request).unwrap();
        assert_eq!(request.headers().get("Authorization").as_deref(), Some("Bearer a"));
    }

    #[wasm_bindgen_test]
    fn no_token_means_no_authorization_header() {
        let request = authorized(Request::get("http://localhost/auth/user/"), None)
            .build()
            .unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }
}
