//! In-memory implementations of the token stores for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::blacklist::TokenBlacklist;
use super::r#trait::TokenRepository;

/// In-memory token repository keyed by user id, mirroring the
/// one-record-per-user invariant of the MySQL implementation
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    records: Arc<RwLock<HashMap<Uuid, RefreshTokenRecord>>>,
}

impl InMemoryTokenRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.user_id, record.clone());
        Ok(record)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.token_hash == token_hash).cloned())
    }

    async fn remove(&self, user_id: Uuid) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.remove(&user_id);
        Ok(())
    }
}

/// In-memory blacklist emulating per-key TTL by storing expiry instants
#[derive(Clone, Default)]
pub struct InMemoryTokenBlacklist {
    entries: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl InMemoryTokenBlacklist {
    /// Create a new empty blacklist
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn blacklist(&self, token_hash: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        if ttl_seconds == 0 {
            return Ok(());
        }
        let mut entries = self.entries.write().await;
        entries.insert(
            token_hash.to_string(),
            Utc::now() + Duration::seconds(ttl_seconds as i64),
        );
        Ok(())
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(token_hash)
            .map(|expiry| *expiry > Utc::now())
            .unwrap_or(false))
    }
}
