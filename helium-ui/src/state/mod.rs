//! Application State

pub mod global;
pub mod session;
