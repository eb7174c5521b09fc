//! Page-Load Smoke Check
//!
//! Loads the root page and waits for its title, the same check the browser
//! test performs against a running dev server. Each check owns its own HTTP
//! client, dropped when the check ends.

use regex::Regex;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

use crate::config::SmokeConfig;
use crate::routes::PRODUCT_NAME;

/// Title fragment waited for
pub const TITLE_MARKER: &str = PRODUCT_NAME;
/// Full title expected on the root page
pub const EXPECTED_TITLE: &str = "Helium Student Planner | Lightening Your Course Load";

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Timed out waiting for the page title (last title: {last_title:?})")]
    Timeout { last_title: Option<String> },

    #[error("Expected title containing {expected:?}, found {actual:?}")]
    TitleMismatch { expected: String, actual: String },
}

/// Options for one check
#[derive(Debug, Clone)]
pub struct SmokeCheck {
    pub url: String,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl From<&SmokeConfig> for SmokeCheck {
    fn from(config: &SmokeConfig) -> Self {
        Self {
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }
}

impl Default for SmokeCheck {
    fn default() -> Self {
        Self::from(&SmokeConfig::default())
    }
}

/// Text of the first `<title>` element, whitespace-collapsed
pub fn extract_title(html: &str) -> Option<String> {
    let re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").ok()?;
    let raw = re.captures(html)?.get(1)?.as_str();
    Some(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

impl SmokeCheck {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Poll the page until its title mentions the product, then check the
    /// full title. Returns the title found.
    pub async fn run(&self) -> Result<String, SmokeError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SmokeError::Request(e.to_string()))?;

        let deadline = Instant::now() + self.timeout;
        let mut last_title = None;
        let mut last_error = None;

        loop {
            let fetch = fetch_title(&client, &self.url);
            let fetched = match tokio::time::timeout_at(deadline, fetch).await {
                Ok(fetched) => fetched,
                Err(_) => {
                    tracing::debug!(url = %self.url, "deadline passed during a page load");
                    return Err(SmokeError::Timeout { last_title });
                }
            };

            match fetched {
                Ok(Some(title)) if title.contains(TITLE_MARKER) => {
                    tracing::debug!(url = %self.url, title = %title, "page title found");
                    return check_title(title);
                }
                Ok(title) => last_title = title,
                Err(e) => {
                    tracing::debug!(url = %self.url, error = %e, "page not reachable yet");
                    last_error = Some(e);
                }
            }

            if Instant::now() + self.poll_interval > deadline {
                break;
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        match (last_title, last_error) {
            (None, Some(e)) => Err(e),
            (last_title, _) => Err(SmokeError::Timeout { last_title }),
        }
    }
}

fn check_title(title: String) -> Result<String, SmokeError> {
    if title.contains(EXPECTED_TITLE) {
        Ok(title)
    } else {
        Err(SmokeError::TitleMismatch {
            expected: EXPECTED_TITLE.to_string(),
            actual: title,
        })
    }
}

async fn fetch_title(client: &reqwest::Client, url: &str) -> Result<Option<String>, SmokeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SmokeError::Request(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| SmokeError::Request(e.to_string()))?;
    Ok(extract_title(&body))
}
