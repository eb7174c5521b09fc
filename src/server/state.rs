//! Dev Server State

use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use crate::config::ServerConfig;
use crate::environment::Environment;

/// Shared state for the dev server handlers
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Built UI (Trunk's `dist/`)
    pub dist_dir: PathBuf,
    /// Backend the served UI is expected to talk to
    pub environment: Environment,
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(dist_dir: impl Into<PathBuf>, environment: Environment) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            environment,
            start_time: Instant::now(),
        }
    }

    pub fn from_config(config: &ServerConfig, environment: Environment) -> Self {
        Self::new(config.dist_dir.clone(), environment)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Map a request path into the dist directory.
    ///
    /// Returns `None` for paths that try to leave it (`..`, absolute parts).
    pub fn dist_path(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));
        let mut path = self.dist_dir.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist_path() {
        let state = ServerState::new("/srv/dist", Environment::Local);
        assert_eq!(
            state.dist_path("/assets/app.css"),
            Some(PathBuf::from("/srv/dist/assets/app.css"))
        );
        assert_eq!(state.dist_path("/"), Some(PathBuf::from("/srv/dist")));
        assert_eq!(state.dist_path("/../etc/passwd"), None);
        assert_eq!(state.dist_path("/a/../../b"), None);
    }
}
