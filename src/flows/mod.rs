//! Page Flows
//!
//! Per-page state machines for the account pages. Each flow turns browser
//! inputs (cookies, query string, form values) and backend answers into
//! status updates and navigations. The UI crate renders them; the native
//! [`driver`] runs them against a live backend.

pub mod forgot;
pub mod login;
pub mod register;
pub mod status;
pub mod support;
pub mod verify;

#[cfg(feature = "native")]
pub mod driver;

pub use forgot::{ForgotPage, ForgotState};
pub use login::{LoginOutcome, LoginPage, LogoutPlan};
pub use register::{RegisterForm, RegisterPage};
pub use status::{Flash, StatusElement, StatusKind, StatusMessage};
pub use support::SupportOutcome;
pub use verify::{VerifyOutcome, VerifyParams};

/// What a page does as soon as it loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLoad {
    /// Render the page
    Ready,
    /// Leave for another path before rendering
    Redirect(String),
}

/// A client-side navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// New history entry
    Push(String),
    /// Replace the current history entry
    Replace(String),
}

impl Navigation {
    pub fn path(&self) -> &str {
        match self {
            Navigation::Push(path) | Navigation::Replace(path) => path,
        }
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Navigation::Replace(_))
    }
}
