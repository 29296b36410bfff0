//! Configuration for the token service

use jsonwebtoken::Algorithm;
use moim_shared::config::JwtConfig;

/// Whether reissue rotates the refresh token alongside the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    /// Every successful reissue replaces the refresh token
    Always,
    /// The refresh token stays valid until its natural expiry
    Never,
}

impl RotationPolicy {
    /// Whether this policy rotates on reissue
    pub fn should_rotate(&self) -> bool {
        matches!(self, RotationPolicy::Always)
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
    /// Issuer claim stamped into every token
    pub issuer: String,
    /// Refresh token rotation policy
    pub rotation: RotationPolicy,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 14,
            issuer: "moim-auth".to_string(),
            rotation: RotationPolicy::Always,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
            issuer: config.issuer.clone(),
            rotation: if config.rotate_refresh_token {
                RotationPolicy::Always
            } else {
                RotationPolicy::Never
            },
        }
    }
}
