//! Strata Account Library
//!
//! Shared types, configuration, and the HTTP client for the Strata Cloud
//! account-management API.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{AccountApi, RestClient};
pub use config::AccountConfig;
pub use error::{Error, Result};
pub use types::*;

/// Provider version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
