//! Email Verification Flow
//!
//! The verify page has no UI of its own. It reads `username`, `code` and
//! `welcome-email` from the query, calls the backend once, and replaces itself
//! with the login (or register) page.

use crate::api::{ApiError, GENERIC_ERROR_MESSAGE};
use crate::routes::query_param;

use super::status::{Flash, StatusMessage};
use super::Navigation;

pub const VERIFIED_MESSAGE: &str =
    "Your email address has been verified. You can now login to Helium!";

/// Query parameters of a verification link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyParams {
    pub username: String,
    pub code: String,
    pub welcome_email: Option<String>,
}

impl VerifyParams {
    /// Parse from the page's query string. Missing values become empty and
    /// are left for the backend to reject.
    pub fn from_query(query: &str) -> Self {
        Self {
            username: query_param(query, "username").unwrap_or_default(),
            code: query_param(query, "code").unwrap_or_default(),
            welcome_email: query_param(query, "welcome-email"),
        }
    }

    /// API path for this verification
    pub fn api_path(&self) -> String {
        crate::api::verify_path(&self.username, &self.code, self.welcome_email.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub flash: Option<Flash>,
    pub navigation: Navigation,
}

/// Map the verification answer to a flash and a page replace
pub fn outcome(result: Result<(), ApiError>) -> VerifyOutcome {
    match result {
        Ok(()) => VerifyOutcome {
            flash: Some(StatusMessage::info(VERIFIED_MESSAGE).into()),
            navigation: Navigation::Replace("/login".to_string()),
        },
        Err(e) if e.is_not_found() => VerifyOutcome {
            flash: None,
            navigation: Navigation::Replace("/register".to_string()),
        },
        Err(e) => VerifyOutcome {
            flash: Some(StatusMessage::warning(e.user_message(GENERIC_ERROR_MESSAGE)).into()),
            navigation: Navigation::Replace("/login".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::status::StatusKind;

    #[test]
    fn test_params_from_query() {
        let params = VerifyParams::from_query("?username=jane&code=123456&welcome-email=true");
        assert_eq!(params.username, "jane");
        assert_eq!(params.code, "123456");
        assert_eq!(params.welcome_email.as_deref(), Some("true"));
        assert_eq!(
            params.api_path(),
            "auth/user/verify/?username=jane&code=123456&welcome-email=true"
        );

        let bare = VerifyParams::from_query("username=jane");
        assert_eq!(bare.code, "");
        assert!(bare.welcome_email.is_none());
    }

    #[test]
    fn test_success() {
        let out = outcome(Ok(()));
        assert_eq!(out.navigation, Navigation::Replace("/login".into()));
        assert_eq!(out.flash.unwrap().message, VERIFIED_MESSAGE);
    }

    #[test]
    fn test_unknown_user_goes_to_register() {
        let out = outcome(Err(ApiError::from_response(404, "")));
        assert_eq!(out.navigation, Navigation::Replace("/register".into()));
        assert!(out.flash.is_none());
    }

    #[test]
    fn test_other_failure_flashes_warning() {
        let out = outcome(Err(ApiError::from_response(
            400,
            r#"{"code": ["The verification code has expired."]}"#,
        )));
        let flash = out.flash.unwrap();
        assert_eq!(flash.kind, StatusKind::Warning);
        assert_eq!(flash.message, "The verification code has expired.");
        assert_eq!(out.navigation, Navigation::Replace("/login".into()));
    }
}
