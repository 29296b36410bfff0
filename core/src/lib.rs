//! # Moim Core
//!
//! Core business logic and domain layer for the Moim auth service.
//! This crate contains domain entities, the token lifecycle services,
//! repository interfaces, and error types. It performs no I/O itself;
//! storage is injected through the repository traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::{Claims, RefreshTokenRecord, ReissuedTokens, TokenPair};
pub use domain::entities::user::{OAuthProvider, User};
pub use domain::value_objects::CanonicalUserInfo;
pub use errors::{AuthError, DomainError, DomainResult, RefreshRejectReason, TokenError};
pub use repositories::{TokenBlacklist, TokenRepository, UserDirectory};
pub use services::{ProviderRegistry, RotationPolicy, TokenService, TokenServiceConfig};
