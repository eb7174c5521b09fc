//! Session Cookies and Tokens
//!
//! Cookie parsing/rendering and the access-token lifetime check. The client
//! never verifies tokens; it only reads the `exp` claim to know when to refresh.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Cookie whose presence marks an authenticated browser
pub const AUTH_TOKEN_COOKIE: &str = "authtoken";

/// Storage keys used by the page flows
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const ACCESS_TOKEN_EXP_KEY: &str = "access_token_exp";
pub const STATUS_TYPE_KEY: &str = "status_type";
pub const STATUS_MSG_KEY: &str = "status_msg";

/// Refresh this many seconds before the access token expires
pub const REFRESH_MARGIN_SECS: i64 = 90;

/// One week
pub const DEFAULT_COOKIE_MAX_AGE: u64 = 604_800;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

/// Cookies visible to the page, parsed from a `Cookie` header or
/// `document.cookie`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name=value; other=value` pairs. Malformed pairs are skipped.
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let value = value.trim().trim_matches('"');
                let value = urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                Some((name.to_string(), value))
            })
            .collect();

        Self { cookies }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// True when the cookie exists and is not empty
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).map_or(false, |v| !v.is_empty())
    }

    /// Whether the browser holds a session token
    pub fn is_authenticated(&self) -> bool {
        self.contains(AUTH_TOKEN_COOKIE)
    }
}

/// Attributes applied when writing a cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub max_age: u64,
    pub secure: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            max_age: DEFAULT_COOKIE_MAX_AGE,
            secure: false,
        }
    }
}

impl CookieOptions {
    /// Defaults for a deployment; production cookies are `Secure`
    pub fn for_environment(environment: crate::environment::Environment) -> Self {
        Self {
            secure: environment.secure_cookies(),
            ..Default::default()
        }
    }

    pub fn max_age(mut self, secs: u64) -> Self {
        self.max_age = secs;
        self
    }
}

/// Render a cookie assignment (a `Set-Cookie` value or `document.cookie` write)
pub fn set_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}",
        name,
        urlencoding::encode(value),
        options.path,
        options.max_age
    );
    if options.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Render a cookie assignment that removes `name`
pub fn delete_cookie(name: &str, path: &str) -> String {
    format!("{}=; Path={}; Max-Age=0", name, path)
}

/// Claims the client reads from an access token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    pub exp: i64,
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Decode the payload segment of a JWT without verifying it
pub fn parse_jwt_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| SessionError::MalformedToken("missing payload segment".into()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| SessionError::MalformedToken(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| SessionError::MalformedToken(e.to_string()))
}

/// Whether an access token expiring at `exp` (unix seconds) should be
/// refreshed at `now`
pub fn needs_refresh(exp: i64, now: DateTime<Utc>) -> bool {
    now.timestamp() > exp - REFRESH_MARGIN_SECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_cookie_jar_parse() {
        let jar = CookieJar::parse("csrftoken=abc; authtoken=xyz%3D; empty=; =bad; junk");
        assert_eq!(jar.get("csrftoken"), Some("abc"));
        assert_eq!(jar.get("authtoken"), Some("xyz="));
        assert!(jar.is_authenticated());
        assert!(!jar.contains("empty"));
        assert!(jar.get("junk").is_none());
    }

    #[test]
    fn test_empty_jar_is_not_authenticated() {
        assert!(!CookieJar::parse("").is_authenticated());
        assert!(!CookieJar::parse("authtoken=").is_authenticated());
    }

    #[test]
    fn test_set_cookie_defaults() {
        let cookie = set_cookie("token", "a b", &CookieOptions::default());
        assert_eq!(cookie, "token=a%20b; Path=/; Max-Age=604800");

        let prod = CookieOptions::for_environment(crate::environment::Environment::Production)
            .max_age(1_209_600);
        assert_eq!(
            set_cookie("token", "t", &prod),
            "token=t; Path=/; Max-Age=1209600; Secure"
        );
        assert_eq!(delete_cookie("token", "/"), "token=; Path=/; Max-Age=0");
    }

    #[test]
    fn test_parse_jwt_claims() {
        let claims = parse_jwt_claims(&token_with(r#"{"exp":1700000000,"user_id":3}"#)).unwrap();
        assert_eq!(claims.exp, 1_700_000_000);
        assert_eq!(claims.user_id, Some(3));

        assert!(parse_jwt_claims("not-a-token").is_err());
        assert!(parse_jwt_claims(&token_with("not json")).is_err());
    }

    #[test]
    fn test_needs_refresh_margin() {
        let exp = 1_700_000_000;
        let well_before = Utc.timestamp_opt(exp - 600, 0).unwrap();
        let inside_margin = Utc.timestamp_opt(exp - 60, 0).unwrap();
        assert!(!needs_refresh(exp, well_before));
        assert!(needs_refresh(exp, inside_margin));
    }
}
