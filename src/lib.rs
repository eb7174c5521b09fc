//! # Helium
//!
//! Client for the Helium Student Planner: the pieces of the planner web app
//! that do not depend on rendering, plus the native tooling around it.
//!
//! ## Modules
//!
//! - [`environment`]: Which backend a page talks to
//! - [`api`]: REST API types, error normalisation and (native) HTTP client
//! - [`flows`]: Account page state machines (forgot password, support, login...)
//! - [`store`]: Reducers for the shared application state
//! - [`routes`]: Scene table, auth guard and dev-server rewrites
//! - [`session`]: Cookies and access-token lifetime
//!
//! With the default `native` feature:
//!
//! - [`server`]: Dev server for the built UI
//! - [`smoke`]: Page-load title check
//! - [`config`], [`logging`]: Configuration files and tracing setup
//!
//! The browser front end (`helium-ui`) uses this crate with default features
//! off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helium::api::{ClientOptions, PlannerClient};
//! use helium::environment::Endpoints;
//! use helium::flows::support::{self, SupportOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoints = Endpoints::resolve("https:", "www.heliumedu.com");
//!     let client = PlannerClient::new(endpoints, ClientOptions::default())?;
//!
//!     match support::resolve(client.info().await) {
//!         SupportOutcome::Redirect(url) => println!("Support: {}", url),
//!         SupportOutcome::Failed(msg) => eprintln!("{}", msg.text),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod environment;
pub mod flows;
pub mod routes;
pub mod session;
pub mod store;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;
#[cfg(feature = "native")]
pub mod smoke;

// Re-export top-level types for convenience
pub use api::{ApiError, ApiResult, ErrorEntry, InfoResponse};

pub use environment::{Endpoints, Environment};

pub use flows::{Flash, Navigation, PageLoad, StatusElement, StatusKind, StatusMessage};

pub use routes::{Route, Scene};

pub use session::{CookieJar, CookieOptions, SessionError};

pub use store::{Action, GenericState, RequestStatus, Store};

#[cfg(feature = "native")]
pub use api::{ClientOptions, PlannerApi, PlannerClient};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use server::{build_router, serve, ServerError, ServerState};

#[cfg(feature = "native")]
pub use smoke::{SmokeCheck, SmokeError};
