//! Token lifecycle module
//!
//! This module owns the session token lifecycle:
//! - JWT access/refresh token minting and verification (`TokenIssuer`)
//! - The reissue protocol with configurable refresh rotation
//! - Logout: access token blacklisting plus refresh record removal

mod config;
mod issuer;
mod service;

#[cfg(test)]
mod tests;

pub use config::{RotationPolicy, TokenServiceConfig};
pub use issuer::{hash_token, TokenIssuer};
pub use service::TokenService;
