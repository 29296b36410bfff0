//! Business services

pub mod oauth;
pub mod token;

pub use oauth::{ProviderRegistry, UserInfoExtractor};
pub use token::{RotationPolicy, TokenIssuer, TokenService, TokenServiceConfig};
