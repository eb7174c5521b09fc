//! Forgot-Password Flow
//!
//! `Idle` → `Submitted` → `Answered`. A browser that already holds a session
//! token never reaches the form: it is sent to the settings page instead.

use crate::api::{ApiError, ForgotRequest, GENERIC_ERROR_MESSAGE};
use crate::session::CookieJar;

use super::status::{StatusElement, StatusMessage};
use super::PageLoad;

/// Where an authenticated visitor is sent
pub const AUTHENTICATED_REDIRECT: &str = "/settings";

pub const FORGOT_SUCCESS_MESSAGE: &str = "You've been emailed a temporary password. Login to your account immediately using the temporary password, then change your password";

/// Decide what the page does on load
pub fn on_load(cookies: &CookieJar) -> PageLoad {
    if cookies.is_authenticated() {
        PageLoad::Redirect(AUTHENTICATED_REDIRECT.to_string())
    } else {
        PageLoad::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgotState {
    Idle,
    Submitted { email: String },
    Answered,
}

/// State of the forgot-password form
#[derive(Debug, Clone)]
pub struct ForgotPage {
    state: ForgotState,
    status: StatusElement,
    generic_error: String,
}

impl Default for ForgotPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPage {
    pub fn new() -> Self {
        Self {
            state: ForgotState::Idle,
            status: StatusElement::new(),
            generic_error: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Message shown when the backend gives no usable error text
    pub fn with_generic_error(mut self, message: impl Into<String>) -> Self {
        self.generic_error = message.into();
        self
    }

    pub fn state(&self) -> &ForgotState {
        &self.state
    }

    pub fn status(&self) -> &StatusElement {
        &self.status
    }

    /// Submit the form. The email is sent as typed.
    pub fn submit(&mut self, email: &str) -> ForgotRequest {
        self.state = ForgotState::Submitted {
            email: email.to_string(),
        };
        ForgotRequest {
            email: email.to_string(),
        }
    }

    /// Apply the backend's answer to the status element
    pub fn complete(&mut self, result: Result<(), ApiError>) -> &StatusElement {
        if !matches!(self.state, ForgotState::Submitted { .. }) {
            tracing::warn!(state = ?self.state, "forgot-password answer without a pending submission");
            return &self.status;
        }

        let message = match result {
            Ok(()) => StatusMessage::info(FORGOT_SUCCESS_MESSAGE),
            Err(e) => {
                tracing::debug!(error = %e, "forgot-password request failed");
                StatusMessage::warning(e.user_message(&self.generic_error))
            }
        };

        self.status.show(&message);
        self.state = ForgotState::Answered;
        &self.status
    }
}
