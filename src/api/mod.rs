//! Planner API
//!
//! Everything needed to talk to the Helium REST API.
//!
//! # Endpoints
//!
//! - `GET /common/info/` - Site info (support URL)
//! - `PUT /auth/user/forgot/` - Email a temporary password
//! - `POST /auth/token/` - Obtain an access/refresh pair
//! - `POST /auth/token/refresh/` - Refresh the pair
//! - `POST /auth/token/blacklist/` - Revoke a refresh token
//! - `POST /auth/user/register/` - Create an account
//! - `GET /auth/user/verify/` - Verify an email address
//! - `GET /auth/user/` - The authenticated user
//!
//! The DTOs and error normalisation are plain data and compile for the browser.
//! The HTTP client itself needs the `native` feature.

pub mod dto;
pub mod error;

#[cfg(feature = "native")]
pub mod client;

pub use dto::{
    ForgotRequest, InfoResponse, LoginRequest, RefreshRequest, RegisterRequest, TokenPair,
    UserDetails,
};
pub use error::{
    generic_error_message, normalize_errors, ApiError, ApiResult, ErrorEntry,
    GENERIC_ERROR_MESSAGE, UNKNOWN_ERROR,
};

#[cfg(feature = "native")]
pub use client::{ClientOptions, PlannerApi, PlannerClient};

pub const INFO_PATH: &str = "common/info/";
pub const FORGOT_PATH: &str = "auth/user/forgot/";
pub const TOKEN_PATH: &str = "auth/token/";
pub const REFRESH_PATH: &str = "auth/token/refresh/";
pub const BLACKLIST_PATH: &str = "auth/token/blacklist/";
pub const REGISTER_PATH: &str = "auth/user/register/";
pub const VERIFY_PATH: &str = "auth/user/verify/";
pub const USER_PATH: &str = "auth/user/";

/// Path and query for the email verification call
pub fn verify_path(username: &str, code: &str, welcome_email: Option<&str>) -> String {
    let mut path = format!(
        "{}?username={}&code={}",
        VERIFY_PATH,
        urlencoding::encode(username),
        urlencoding::encode(code)
    );
    if let Some(welcome) = welcome_email {
        path.push_str(&format!("&welcome-email={}", urlencoding::encode(welcome)));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_path() {
        assert_eq!(
            verify_path("jane doe", "123456", None),
            "auth/user/verify/?username=jane%20doe&code=123456"
        );
        assert_eq!(
            verify_path("jane", "42", Some("true")),
            "auth/user/verify/?username=jane&code=42&welcome-email=true"
        );
    }
}
