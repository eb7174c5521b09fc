//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::ClientOptions;
use crate::environment::{Endpoints, Environment};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub smoke: SmokeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which backend the tools talk to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_environment")]
    pub name: String,

    /// Explicit API base URL; overrides the environment's default
    pub api_url: Option<String>,
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            name: default_environment(),
            api_url: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn environment(&self) -> Environment {
        Environment::from_name(&self.name)
    }

    /// Endpoints for the configured environment and override
    pub fn endpoints(&self) -> Endpoints {
        let endpoints = Endpoints::for_environment(self.environment());
        match self.api_url.as_deref() {
            Some(url) if !url.is_empty() => endpoints.with_api_url(url),
            _ => endpoints,
        }
    }
}

/// Dev server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("helium-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout() -> u64 {
    30_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    pub fn options(&self) -> ClientOptions {
        ClientOptions {
            request_timeout_ms: self.request_timeout_ms,
            ..ClientOptions::default()
        }
    }
}

/// Page-load smoke check configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmokeConfig {
    #[serde(default = "default_smoke_url")]
    pub url: String,

    #[serde(default = "default_smoke_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_smoke_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_smoke_timeout() -> u64 {
    10
}

fn default_poll_interval() -> u64 {
    250
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            url: default_smoke_url(),
            timeout_secs: default_smoke_timeout(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("helium").join("config.toml")),
            Some(PathBuf::from("/etc/helium/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `HELIUM_*` overrides looked up through `var`
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = var("HELIUM_ENVIRONMENT") {
            self.environment.name = name;
        }
        if let Some(url) = var("HELIUM_API_URL") {
            self.environment.api_url = Some(url);
        }

        if let Some(host) = var("HELIUM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HELIUM_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid HELIUM_PORT {:?}", port),
            }
        }
        if let Some(dir) = var("HELIUM_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dir);
        }

        if let Some(url) = var("HELIUM_SMOKE_URL") {
            self.smoke.url = url;
        }

        if let Some(level) = var("HELIUM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HELIUM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Helium Configuration
#
# Environment variables override these settings:
# - HELIUM_ENVIRONMENT
# - HELIUM_API_URL
# - HELIUM_HOST
# - HELIUM_PORT
# - HELIUM_DIST_DIR
# - HELIUM_SMOKE_URL
# - HELIUM_LOG_LEVEL
# - HELIUM_LOG_FORMAT

[environment]
# Backend to talk to: dev, test or prod
name = "dev"

# Explicit API base URL (overrides the environment's default)
# api_url = "http://localhost:8000"

[server]
# Dev server host
host = "127.0.0.1"

# Dev server port
port = 3000

# Built UI served by the dev server
dist_dir = "helium-ui/dist"

[client]
# Request timeout in milliseconds
request_timeout_ms = 30000

[smoke]
# Page checked by `helium-cli check`
url = "http://localhost:3000/"

# How long to wait for the page title (seconds)
timeout_secs = 10

# Delay between page fetches (ms)
poll_interval_ms = 250

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
