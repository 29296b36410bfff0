//! Canonical user information extracted from provider attributes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::OAuthProvider;

/// Provider-independent user information
///
/// Produced by a provider-specific extractor from the raw attribute map
/// returned by the OAuth provider's user-info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalUserInfo {
    /// Provider the attributes came from
    pub provider: OAuthProvider,

    /// Provider-side user identifier
    pub oauth_id: String,

    /// Email address, when the provider exposes one
    pub email: Option<String>,

    /// Display name, when the provider exposes one
    pub nickname: Option<String>,
}
