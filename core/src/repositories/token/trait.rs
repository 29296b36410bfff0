//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Repository trait for RefreshTokenRecord persistence
///
/// Implementations must guarantee the one-record-per-user invariant:
/// `save` is an atomic upsert keyed by `user_id`, so concurrent issues
/// or rotations for the same user leave exactly one record behind.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert or overwrite the refresh token record for a user
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The saved record
    /// * `Err(DomainError)` - Storage failure
    async fn save(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError>;

    /// Find a refresh token record by its hashed token value
    ///
    /// Exact-match lookup: only the latest token per user matches, which
    /// is what rejects replay of a rotated-out token.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Record found
    /// * `Ok(None)` - No record with the given hash
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Delete the refresh token record for a user
    ///
    /// Idempotent: removing an absent record is not an error.
    async fn remove(&self, user_id: Uuid) -> Result<(), DomainError>;
}
