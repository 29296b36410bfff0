//! User directory trait resolving canonical user info to an identity.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::domain::value_objects::CanonicalUserInfo;
use crate::errors::DomainError;

/// Resolves an OAuth identity to the internal user id
///
/// The `(provider, oauth_id)` pair is the unique key: a returning user
/// gets their existing identity, a first login creates one. The wider
/// user profile domain is owned elsewhere.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the user for this identity, creating it on first login
    async fn find_or_create(&self, info: &CanonicalUserInfo) -> Result<User, DomainError>;
}
