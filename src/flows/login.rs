//! Login and Logout
//!
//! A visitor with an access token goes straight to the planner. Otherwise the
//! page shows any pending flash status, submits credentials, and on success
//! follows the `next` query parameter.

use crate::api::{ApiError, LoginRequest, TokenPair, GENERIC_ERROR_MESSAGE};
use crate::routes::query_param;

use super::status::{Flash, StatusElement, StatusMessage};
use super::{Navigation, PageLoad};

/// Landing page after login
pub const DEFAULT_LANDING: &str = "/planner/calendar";
pub const LOGIN_PATH: &str = "/login";

/// Decide what the login page does on load
pub fn on_load(access_token: Option<&str>) -> PageLoad {
    match access_token {
        Some(token) if !token.is_empty() => PageLoad::Redirect(DEFAULT_LANDING.to_string()),
        _ => PageLoad::Ready,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Store the tokens, then navigate
    SignedIn {
        tokens: TokenPair,
        navigation: Navigation,
    },
    /// The status element shows why
    Failed,
}

/// State of the login form
#[derive(Debug, Clone)]
pub struct LoginPage {
    status: StatusElement,
    next: Option<String>,
}

impl LoginPage {
    /// Build the page from the URL query string and a pending flash, if any
    pub fn new(query: &str, flash: Option<Flash>) -> Self {
        let mut status = StatusElement::new();
        if let Some(flash) = flash {
            status.show(&flash.into_message());
        }

        Self {
            status,
            next: query_param(query, "next").filter(|n| is_local_path(n)),
        }
    }

    pub fn status(&self) -> &StatusElement {
        &self.status
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn submit(&self, username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            last_login_now: true,
        }
    }

    pub fn complete(&mut self, result: Result<TokenPair, ApiError>) -> LoginOutcome {
        match result {
            Ok(tokens) => LoginOutcome::SignedIn {
                tokens,
                navigation: Navigation::Push(
                    self.next
                        .clone()
                        .unwrap_or_else(|| DEFAULT_LANDING.to_string()),
                ),
            },
            Err(e) => {
                self.status
                    .show(&StatusMessage::warning(e.user_message(GENERIC_ERROR_MESSAGE)));
                LoginOutcome::Failed
            }
        }
    }
}

/// What logging out has to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutPlan {
    /// Refresh token to revoke, if one is stored
    pub blacklist: Option<String>,
    pub navigation: Navigation,
}

/// Plan a logout. Stored tokens are cleared whatever the backend says.
pub fn logout(refresh_token: Option<&str>) -> LogoutPlan {
    LogoutPlan {
        blacklist: refresh_token
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        navigation: Navigation::Replace(LOGIN_PATH.to_string()),
    }
}

/// Same-origin absolute path; rejects protocol-relative forms like `//host`.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::status::StatusKind;

    fn tokens() -> TokenPair {
        TokenPair {
            access: "a".into(),
            refresh: "r".into(),
        }
    }

    #[test]
    fn test_on_load() {
        assert_eq!(
            on_load(Some("token")),
            PageLoad::Redirect(DEFAULT_LANDING.into())
        );
        assert_eq!(on_load(None), PageLoad::Ready);
        assert_eq!(on_load(Some("")), PageLoad::Ready);
    }

    #[test]
    fn test_flash_is_shown() {
        let flash = Flash {
            kind: StatusKind::Info,
            message: "Verified".into(),
        };
        let page = LoginPage::new("", Some(flash));
        assert!(page.status().has_class("alert-info"));
        assert_eq!(page.status().html(), "Verified");
    }

    #[test]
    fn test_success_follows_next() {
        let mut page = LoginPage::new("?next=%2Fplanner%2Fgrades", None);
        assert_eq!(page.next(), Some("/planner/grades"));

        let outcome = page.complete(Ok(tokens()));
        assert_eq!(
            outcome,
            LoginOutcome::SignedIn {
                tokens: tokens(),
                navigation: Navigation::Push("/planner/grades".into()),
            }
        );
    }

    #[test]
    fn test_offsite_next_is_ignored() {
        let mut page = LoginPage::new("next=https://evil.example", None);
        assert_eq!(page.next(), None);
        match page.complete(Ok(tokens())) {
            LoginOutcome::SignedIn { navigation, .. } => {
                assert_eq!(navigation, Navigation::Push(DEFAULT_LANDING.into()))
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_protocol_relative_next_is_ignored() {
        assert_eq!(LoginPage::new("next=//evil.example/x", None).next(), None);
        assert_eq!(LoginPage::new("next=%2F%2Fevil.example", None).next(), None);
        assert_eq!(LoginPage::new("next=/%5Cevil.example", None).next(), None);
        assert_eq!(LoginPage::new("next=/planner", None).next(), Some("/planner"));
    }

    #[test]
    fn test_failure_shows_warning() {
        let mut page = LoginPage::new("", None);
        let request = page.submit("jane", "wrong");
        assert!(request.last_login_now);

        let outcome = page.complete(Err(ApiError::from_response(
            401,
            r#"{"detail": "No active account found with the given credentials"}"#,
        )));
        assert_eq!(outcome, LoginOutcome::Failed);
        assert!(page.status().has_class("alert-warning"));
        assert_eq!(
            page.status().html(),
            "No active account found with the given credentials"
        );
    }

    #[test]
    fn test_logout_plan() {
        let plan = logout(Some("r"));
        assert_eq!(plan.blacklist.as_deref(), Some("r"));
        assert_eq!(plan.navigation, Navigation::Replace("/login".into()));
        assert!(logout(None).blacklist.is_none());
    }
}
