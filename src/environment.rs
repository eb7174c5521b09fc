//! Environment Resolution
//!
//! Maps the page location to one of the known deployments and the API base URL
//! that goes with it. Resolution is total: a host that is not recognised falls
//! through to production.

use serde::{Deserialize, Serialize};
use std::fmt;

/// API base URL for local development
pub const LOCAL_API_URL: &str = "http://localhost:8000";
/// API base URL for the staging deployment
pub const STAGING_API_URL: &str = "http://api-test.heliumedu.com";
/// API base URL for production
pub const PRODUCTION_API_URL: &str = "https://api.heliumedu.com";

/// Site URLs served by the local dev server
pub const LOCAL_SITE_URLS: [&str; 2] = ["http://localhost:3000/", "http://127.0.0.1:3000/"];
/// Site URL of the staging deployment
pub const STAGING_SITE_URL: &str = "http://app-test.heliumedu.com/";
/// Site URL of production
pub const PRODUCTION_SITE_URL: &str = "https://www.heliumedu.com/";

/// A known deployment of the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Staging,
    Production,
}

impl Environment {
    /// Resolve from a full site URL such as `https://www.heliumedu.com/`
    pub fn from_site_url(site_url: &str) -> Self {
        if LOCAL_SITE_URLS.contains(&site_url) {
            Environment::Local
        } else if site_url == STAGING_SITE_URL {
            Environment::Staging
        } else {
            Environment::Production
        }
    }

    /// Resolve from `location.protocol` (e.g. `https:`) and `location.host`
    pub fn from_location(protocol: &str, host: &str) -> Self {
        Self::from_site_url(&site_url(protocol, host))
    }

    /// Resolve from a build environment name.
    ///
    /// Accepts the short names used by the build (`dev`, `test`, `prod`) as
    /// well as the long ones. Anything else is treated as local development.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Environment::Production,
            "test" | "staging" => Environment::Staging,
            _ => Environment::Local,
        }
    }

    /// Base URL of the REST API for this deployment
    pub fn api_url(self) -> &'static str {
        match self {
            Environment::Local => LOCAL_API_URL,
            Environment::Staging => STAGING_API_URL,
            Environment::Production => PRODUCTION_API_URL,
        }
    }

    /// Canonical site URL of this deployment
    pub fn app_url(self) -> &'static str {
        match self {
            Environment::Local => LOCAL_SITE_URLS[0],
            Environment::Staging => STAGING_SITE_URL,
            Environment::Production => PRODUCTION_SITE_URL,
        }
    }

    /// Whether cookies should be marked `Secure`
    pub fn secure_cookies(self) -> bool {
        self == Environment::Production
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Local => "dev",
            Environment::Staging => "test",
            Environment::Production => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the site URL the way the browser reports it: `{protocol}//{host}/`
pub fn site_url(protocol: &str, host: &str) -> String {
    let protocol = protocol.trim_end_matches(':');
    format!("{}://{}/", protocol, host)
}

/// Resolved URLs handed to everything that talks to the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub environment: Environment,
    pub site_url: String,
    pub api_url: String,
}

impl Endpoints {
    /// Resolve endpoints for the page at `protocol` + `host`
    pub fn resolve(protocol: &str, host: &str) -> Self {
        let site_url = site_url(protocol, host);
        let environment = Environment::from_site_url(&site_url);
        Self {
            environment,
            site_url,
            api_url: environment.api_url().to_string(),
        }
    }

    /// Endpoints of a known deployment, using its canonical site URL
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            site_url: environment.app_url().to_string(),
            api_url: environment.api_url().to_string(),
        }
    }

    /// Replace the API base URL, keeping the resolved environment
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Join an API path onto the base URL
    pub fn api(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::for_environment(Environment::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognised_sites() {
        assert_eq!(
            Environment::from_site_url("http://localhost:3000/").api_url(),
            "http://localhost:8000"
        );
        assert_eq!(
            Environment::from_site_url("http://127.0.0.1:3000/").api_url(),
            "http://localhost:8000"
        );
        assert_eq!(
            Environment::from_site_url("http://app-test.heliumedu.com/").api_url(),
            "http://api-test.heliumedu.com"
        );
        assert_eq!(
            Environment::from_site_url("https://www.heliumedu.com/").api_url(),
            "https://api.heliumedu.com"
        );
    }

    #[test]
    fn test_unknown_site_defaults_to_production() {
        for site in [
            "https://example.com/",
            "http://www.heliumedu.com/",
            "http://localhost:3001/",
            "",
        ] {
            assert_eq!(Environment::from_site_url(site), Environment::Production);
        }
    }

    #[test]
    fn test_from_location_matches_browser_shape() {
        assert_eq!(
            Environment::from_location("http:", "localhost:3000"),
            Environment::Local
        );
        assert_eq!(
            Environment::from_location("https:", "www.heliumedu.com"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_location("http:", "app-test.heliumedu.com"),
            Environment::Staging
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Environment::from_name("prod"), Environment::Production);
        assert_eq!(Environment::from_name("test"), Environment::Staging);
        assert_eq!(Environment::from_name("dev"), Environment::Local);
        assert_eq!(Environment::from_name(""), Environment::Local);
    }

    #[test]
    fn test_endpoints_join() {
        let endpoints = Endpoints::resolve("https:", "www.heliumedu.com");
        assert_eq!(endpoints.site_url, "https://www.heliumedu.com/");
        assert_eq!(
            endpoints.api("/common/info/"),
            "https://api.heliumedu.com/common/info/"
        );

        let local = Endpoints::default().with_api_url("http://127.0.0.1:9000/");
        assert_eq!(local.api("auth/token/"), "http://127.0.0.1:9000/auth/token/");
        assert_eq!(local.environment, Environment::Local);
    }
}
