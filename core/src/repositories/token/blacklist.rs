//! Access token blacklist interface.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store of access tokens invalidated before their natural expiry
///
/// Entries carry a TTL equal to the token's remaining lifetime; the
/// backing store is expected to expire them natively, so no cleanup
/// process exists. Keys are token digests, never raw tokens.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// Insert a token digest with the given time to live
    ///
    /// A zero TTL is a no-op: the token no longer authenticates anyway.
    async fn blacklist(&self, token_hash: &str, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Membership check used by request authentication on every
    /// protected request
    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, DomainError>;
}
