//! JWT signing and refresh token transport configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Whether reissue also rotates the refresh token
    #[serde(default = "default_rotate")]
    pub rotate_refresh_token: bool,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_minutes: 30,
            refresh_token_expiry_days: 14,
            issuer: String::from("moim-auth"),
            rotate_refresh_token: default_rotate(),
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry_minutes: std::env::var("JWT_ACCESS_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_minutes),
            refresh_token_expiry_days: std::env::var("JWT_REFRESH_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry_days),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            rotate_refresh_token: std::env::var("JWT_ROTATE_REFRESH_TOKEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rotate_refresh_token),
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

fn default_rotate() -> bool {
    true
}

/// Refresh token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Refresh token cookie name
    pub name: String,

    /// Cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,

    /// Cookie SameSite attribute
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("moim_refresh_token"),
            secure: false, // Set to true in production
            http_only: default_http_only(),
            same_site: String::from("Lax"),
        }
    }
}

impl CookieConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: std::env::var("REFRESH_COOKIE_NAME").unwrap_or(defaults.name),
            secure: std::env::var("REFRESH_COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.secure),
            http_only: defaults.http_only,
            same_site: std::env::var("REFRESH_COOKIE_SAME_SITE").unwrap_or(defaults.same_site),
        }
    }
}

fn default_http_only() -> bool {
    true
}
