//! Shared utilities and common types for the Moim auth service
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types loaded from the environment
//! - The API error response envelope and stable error codes

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CookieConfig, DatabaseConfig, JwtConfig, ServerConfig,
};
pub use types::response::{error_codes, ErrorResponse};
