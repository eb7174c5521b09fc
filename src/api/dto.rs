//! Data Transfer Objects
//!
//! Request and response bodies exchanged with the planner REST API.

use serde::{Deserialize, Serialize};

/// `GET /common/info/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InfoResponse {
    pub support_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// `PUT /auth/user/forgot/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// `POST /auth/token/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub last_login_now: bool,
}

/// Access/refresh pair returned by the token endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// `POST /auth/token/refresh/` and `POST /auth/token/blacklist/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST /auth/user/register/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub time_zone: String,
}

/// `GET /auth/user/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserDetails {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}
