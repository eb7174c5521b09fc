//! Registration Flow

use crate::api::{ApiError, RegisterRequest, GENERIC_ERROR_MESSAGE};

use super::status::{Flash, StatusElement, StatusMessage};
use super::Navigation;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "You must enter matching passwords.";

pub const REGISTERED_MESSAGE: &str = "You're almost there! The last step is to verify your email address. Click the link in the email we just sent you and your registration will be complete!";

/// Raw values from the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterPage {
    status: StatusElement,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &StatusElement {
        &self.status
    }

    /// Build the request, or show a warning and return `None` when the
    /// passwords differ
    pub fn submit(&mut self, form: &RegisterForm) -> Option<RegisterRequest> {
        if form.password1 != form.password2 {
            self.status
                .show(&StatusMessage::warning(PASSWORD_MISMATCH_MESSAGE));
            return None;
        }

        Some(RegisterRequest {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password1.clone(),
            time_zone: form.time_zone.clone(),
        })
    }

    /// On success, the flash to store and where to go next
    pub fn complete(&mut self, result: Result<(), ApiError>) -> Option<(Flash, Navigation)> {
        match result {
            Ok(()) => Some((
                StatusMessage::info(REGISTERED_MESSAGE).into(),
                Navigation::Push("/login".to_string()),
            )),
            Err(e) => {
                self.status
                    .show(&StatusMessage::warning(e.user_message(GENERIC_ERROR_MESSAGE)));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::status::StatusKind;

    fn form(p1: &str, p2: &str) -> RegisterForm {
        RegisterForm {
            username: "jane".into(),
            email: "jane@example.com".into(),
            password1: p1.into(),
            password2: p2.into(),
            time_zone: "America/Chicago".into(),
        }
    }

    #[test]
    fn test_mismatched_passwords() {
        let mut page = RegisterPage::new();
        assert!(page.submit(&form("a", "b")).is_none());
        assert!(page.status().has_class("alert-warning"));
        assert_eq!(page.status().html(), PASSWORD_MISMATCH_MESSAGE);
    }

    #[test]
    fn test_request_uses_first_password() {
        let mut page = RegisterPage::new();
        let request = page.submit(&form("s3cret", "s3cret")).unwrap();
        assert_eq!(request.password, "s3cret");
        assert_eq!(request.time_zone, "America/Chicago");
    }

    #[test]
    fn test_success_flashes_and_redirects() {
        let mut page = RegisterPage::new();
        let (flash, navigation) = page.complete(Ok(())).unwrap();
        assert_eq!(flash.kind, StatusKind::Info);
        assert_eq!(flash.message, REGISTERED_MESSAGE);
        assert_eq!(navigation, Navigation::Push("/login".into()));
    }

    #[test]
    fn test_failure_shows_backend_message() {
        let mut page = RegisterPage::new();
        let result = page.complete(Err(ApiError::from_response(
            400,
            r#"{"username": ["A user with that username already exists."]}"#,
        )));
        assert!(result.is_none());
        assert_eq!(
            page.status().html(),
            "A user with that username already exists."
        );
    }
}
