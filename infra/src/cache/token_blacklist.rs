//! Redis-backed access token blacklist.
//!
//! Logged-out access tokens are recorded under `blacklist:<digest>` with
//! a TTL equal to the token's remaining lifetime. Once the token would
//! have expired anyway the key lapses and Redis reclaims it, so the
//! blacklist never needs sweeping. Only SHA-256 digests reach this
//! layer; raw tokens never touch Redis.

use async_trait::async_trait;
use tracing::debug;

use moim_core::errors::DomainError;
use moim_core::repositories::TokenBlacklist;

use crate::cache::RedisClient;

const BLACKLIST_KEY_PREFIX: &str = "blacklist";

/// Redis implementation of TokenBlacklist
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    client: RedisClient,
}

impl RedisTokenBlacklist {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key_for(token_hash: &str) -> String {
        format!("{}:{}", BLACKLIST_KEY_PREFIX, token_hash)
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn blacklist(&self, token_hash: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        // A token at the end of its life needs no blacklist entry
        if ttl_seconds == 0 {
            debug!("Skipping blacklist entry for already-expired token");
            return Ok(());
        }

        let key = Self::key_for(token_hash);
        self.client
            .set_with_expiry(&key, "1", ttl_seconds)
            .await
            .map_err(DomainError::from)?;

        debug!(ttl_seconds, "blacklisted access token");
        Ok(())
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, DomainError> {
        let key = Self::key_for(token_hash);
        self.client.exists(&key).await.map_err(DomainError::from)
    }
}
