//! UI Components
//!
//! Reusable Leptos components shared by the scenes.

pub mod footer;
pub mod guard;
pub mod header;
pub mod loading;
pub mod status_alert;
pub mod toast;

pub use footer::Footer;
pub use guard::RequireAuth;
pub use header::Header;
pub use loading::Loading;
pub use status_alert::StatusAlert;
pub use toast::Toast;
