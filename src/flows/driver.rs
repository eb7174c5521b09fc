//! Flow Driver
//!
//! Runs the page flows end to end against a [`PlannerApi`]. Used by the CLI
//! and by tests that want the whole request/answer cycle without a browser.

use crate::api::PlannerApi;

use super::forgot::ForgotPage;
use super::login::{self, LoginOutcome, LoginPage};
use super::register::{RegisterForm, RegisterPage};
use super::status::{Flash, StatusElement};
use super::support::{self, SupportOutcome};
use super::verify::{self, VerifyOutcome, VerifyParams};
use super::Navigation;

/// Submit the forgot-password form and return the resulting status
pub async fn forgot_password(api: &dyn PlannerApi, email: &str) -> StatusElement {
    let mut page = ForgotPage::new();
    let request = page.submit(email);
    let result = api.forgot(&request.email).await;
    page.complete(result).clone()
}

/// Look up the support URL
pub async fn support(api: &dyn PlannerApi) -> SupportOutcome {
    support::resolve(api.info().await)
}

/// Submit the login form
pub async fn sign_in(
    api: &dyn PlannerApi,
    query: &str,
    username: &str,
    password: &str,
) -> (LoginOutcome, StatusElement) {
    let mut page = LoginPage::new(query, None);
    let request = page.submit(username, password);
    let outcome = page.complete(api.login(&request).await);
    (outcome, page.status().clone())
}

/// Revoke the refresh token, if any. Failures are logged and ignored.
pub async fn sign_out(api: &dyn PlannerApi, refresh_token: Option<&str>) -> Navigation {
    let plan = login::logout(refresh_token);
    if let Some(refresh) = plan.blacklist.as_deref() {
        if let Err(e) = api.blacklist(refresh).await {
            tracing::warn!(error = %e, "failed to blacklist refresh token");
        }
    }
    plan.navigation
}

/// Submit the registration form. `Ok` carries the flash and navigation,
/// `Err` the status element showing why it failed.
pub async fn register(
    api: &dyn PlannerApi,
    form: &RegisterForm,
) -> Result<(Flash, Navigation), StatusElement> {
    let mut page = RegisterPage::new();
    let request = match page.submit(form) {
        Some(request) => request,
        None => return Err(page.status().clone()),
    };

    let result = api.register(&request).await;
    page.complete(result).ok_or_else(|| page.status().clone())
}

/// Follow a verification link
pub async fn verify_email(api: &dyn PlannerApi, query: &str) -> VerifyOutcome {
    let params = VerifyParams::from_query(query);
    let result = api
        .verify(&params.username, &params.code, params.welcome_email.as_deref())
        .await;
    verify::outcome(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        ApiError, ApiResult, InfoResponse, LoginRequest, RegisterRequest, TokenPair,
    };
    use crate::flows::forgot::FORGOT_SUCCESS_MESSAGE;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Fake backend answering every call with the configured result
    #[derive(Default)]
    struct FakeApi {
        fail: Option<ApiError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn failing(err: ApiError) -> Self {
            Self {
                fail: Some(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.lock().unwrap().push(call);
            match &self.fail {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlannerApi for FakeApi {
        async fn info(&self) -> ApiResult<InfoResponse> {
            self.record("info".into())?;
            Ok(InfoResponse {
                support_url: "https://support.heliumedu.com".into(),
                name: None,
                version: None,
            })
        }

        async fn forgot(&self, email: &str) -> ApiResult<()> {
            self.record(format!("forgot {}", email))
        }

        async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair> {
            self.record(format!("login {}", request.username))?;
            Ok(TokenPair {
                access: "a".into(),
                refresh: "r".into(),
            })
        }

        async fn blacklist(&self, refresh: &str) -> ApiResult<()> {
            self.record(format!("blacklist {}", refresh))
        }

        async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
            self.record(format!("register {}", request.username))
        }

        async fn verify(
            &self,
            username: &str,
            code: &str,
            _welcome_email: Option<&str>,
        ) -> ApiResult<()> {
            self.record(format!("verify {} {}", username, code))
        }
    }

    #[tokio::test]
    async fn test_forgot_password_success() {
        let api = FakeApi::default();
        let status = forgot_password(&api, "student@example.com").await;
        assert_eq!(status.html(), FORGOT_SUCCESS_MESSAGE);
        assert_eq!(api.calls(), vec!["forgot student@example.com"]);
    }

    #[tokio::test]
    async fn test_support_failure_stays_on_page() {
        let api = FakeApi::failing(ApiError::Timeout);
        assert!(matches!(support(&api).await, SupportOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let api = FakeApi::default();
        let (outcome, status) = sign_in(&api, "next=/planner/classes", "jane", "pw").await;
        assert!(status.is_hidden());
        match outcome {
            LoginOutcome::SignedIn { navigation, .. } => {
                assert_eq!(navigation, Navigation::Push("/planner/classes".into()))
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let nav = sign_out(&api, Some("r")).await;
        assert_eq!(nav, Navigation::Replace("/login".into()));
        assert_eq!(api.calls(), vec!["login jane", "blacklist r"]);
    }

    #[tokio::test]
    async fn test_sign_out_ignores_backend_failure() {
        let api = FakeApi::failing(ApiError::Transport("down".into()));
        let nav = sign_out(&api, Some("r")).await;
        assert_eq!(nav.path(), "/login");
    }

    #[tokio::test]
    async fn test_register_mismatch_never_calls_backend() {
        let api = FakeApi::default();
        let form = RegisterForm {
            username: "jane".into(),
            password1: "a".into(),
            password2: "b".into(),
            ..Default::default()
        };
        let status = register(&api, &form).await.unwrap_err();
        assert!(status.has_class("alert-warning"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_verify_email_not_found() {
        let api = FakeApi::failing(ApiError::from_response(404, ""));
        let outcome = verify_email(&api, "username=jane&code=1").await;
        assert_eq!(outcome.navigation, Navigation::Replace("/register".into()));
        assert_eq!(api.calls(), vec!["verify jane 1"]);
    }
}
