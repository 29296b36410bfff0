//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token type marker embedded in the `typ` claim
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Token type marker embedded in the `typ` claim
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Token type: "access" or "refresh"
    pub typ: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(user_id: Uuid, issuer: &str, expiry: Duration) -> Self {
        Self::new(user_id, issuer, expiry, TOKEN_TYPE_ACCESS)
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh_token(user_id: Uuid, issuer: &str, expiry: Duration) -> Self {
        Self::new(user_id, issuer, expiry, TOKEN_TYPE_REFRESH)
    }

    fn new(user_id: Uuid, issuer: &str, expiry: Duration, typ: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + expiry).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            typ: typ.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Remaining lifetime in seconds, zero once expired
    pub fn remaining_lifetime_secs(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        remaining.max(0) as u64
    }

    /// Whether these are access token claims
    pub fn is_access_token(&self) -> bool {
        self.typ == TOKEN_TYPE_ACCESS
    }

    /// Whether these are refresh token claims
    pub fn is_refresh_token(&self) -> bool {
        self.typ == TOKEN_TYPE_REFRESH
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record stored in the database
///
/// At most one record exists per user: issuing or rotating a refresh
/// token overwrites the previous record (upsert keyed by `user_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// User this token belongs to (unique key)
    pub user_id: Uuid,

    /// Hashed token value; tokens are never stored verbatim
    pub token_hash: String,

    /// Timestamp of the last issue or rotation
    pub updated_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a new refresh token record
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self {
            user_id,
            token_hash,
            updated_at: Utc::now(),
        }
    }
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

/// Result of a successful reissue
///
/// The access token is always freshly minted. The refresh token is only
/// present when the rotation policy replaced it; `is_refresh_token_reissued`
/// tells the caller which happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReissuedTokens {
    /// Freshly minted JWT access token
    pub access_token: String,

    /// Rotated refresh token, when the policy rotated it
    pub refresh_token: Option<String>,

    /// Whether the refresh token was rotated during this call
    pub is_refresh_token_reissued: bool,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,
}
