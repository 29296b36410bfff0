//! HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::{AccessTokenVerifier, AuthContext, JwtAuth, RawAccessToken};
