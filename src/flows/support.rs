//! Support Redirect
//!
//! The support page only fetches site info and replaces itself with the
//! support URL. A failed lookup leaves the visitor on the page with a warning.

use crate::api::{ApiError, InfoResponse, GENERIC_ERROR_MESSAGE};

use super::status::StatusMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportOutcome {
    /// Full-page replace to the support site
    Redirect(String),
    /// Stay on the page and show the message
    Failed(StatusMessage),
}

/// Decide where the support page goes given the info lookup
pub fn resolve(result: Result<InfoResponse, ApiError>) -> SupportOutcome {
    match result {
        Ok(info) if !info.support_url.trim().is_empty() => {
            SupportOutcome::Redirect(info.support_url)
        }
        Ok(_) => {
            tracing::warn!("site info has no support URL");
            SupportOutcome::Failed(StatusMessage::warning(GENERIC_ERROR_MESSAGE))
        }
        Err(e) => {
            tracing::warn!(error = %e, "site info lookup failed");
            SupportOutcome::Failed(StatusMessage::warning(GENERIC_ERROR_MESSAGE))
        }
    }
}
