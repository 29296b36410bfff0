//! User entity referenced by token records.
//!
//! The wider user profile domain lives elsewhere; the auth service only
//! needs the identity triple (id, provider, provider-side id).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Supported OAuth providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Kakao,
    Naver,
}

impl OAuthProvider {
    /// Canonical lowercase provider name
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Kakao => "kakao",
            OAuthProvider::Naver => "naver",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "kakao" => Ok(OAuthProvider::Kakao),
            "naver" => Ok(OAuthProvider::Naver),
            _ => Err(()),
        }
    }
}

/// Minimal user identity owned by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal user identifier
    pub id: Uuid,

    /// OAuth provider that authenticated the user
    pub provider: OAuthProvider,

    /// Provider-side user identifier
    pub oauth_id: String,

    /// Timestamp when the identity was first seen
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user identity
    pub fn new(provider: OAuthProvider, oauth_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider,
            oauth_id: oauth_id.into(),
            created_at: Utc::now(),
        }
    }
}
