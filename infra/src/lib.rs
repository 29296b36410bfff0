//! Infrastructure layer for the Moim auth service
//!
//! Concrete implementations of the core repository traits:
//! - MySQL (`sqlx`) for refresh token records and the user directory
//! - Redis for the access token blacklist (native per-key TTL)

pub mod cache;
pub mod database;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for moim_core::errors::DomainError {
    fn from(err: InfrastructureError) -> Self {
        moim_core::errors::DomainError::Internal {
            message: err.to_string(),
        }
    }
}
