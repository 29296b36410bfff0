//! Unit tests for the in-memory token stores

use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::repositories::token::{InMemoryTokenBlacklist, InMemoryTokenRepository};
use crate::repositories::{TokenBlacklist, TokenRepository};

#[tokio::test]
async fn test_save_is_upsert_per_user() {
    let repo = InMemoryTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save(RefreshTokenRecord::new(user_id, "hash_one".to_string()))
        .await
        .unwrap();
    repo.save(RefreshTokenRecord::new(user_id, "hash_two".to_string()))
        .await
        .unwrap();

    assert_eq!(repo.len().await, 1);
    assert!(repo.find_by_token_hash("hash_one").await.unwrap().is_none());
    let record = repo.find_by_token_hash("hash_two").await.unwrap().unwrap();
    assert_eq!(record.user_id, user_id);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let repo = InMemoryTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save(RefreshTokenRecord::new(user_id, "hash".to_string()))
        .await
        .unwrap();

    repo.remove(user_id).await.unwrap();
    // Second removal of an absent record must not error
    repo.remove(user_id).await.unwrap();

    assert_eq!(repo.len().await, 0);
}

#[tokio::test]
async fn test_blacklist_membership() {
    let blacklist = InMemoryTokenBlacklist::new();

    blacklist.blacklist("digest", 60).await.unwrap();

    assert!(blacklist.is_blacklisted("digest").await.unwrap());
    assert!(!blacklist.is_blacklisted("other").await.unwrap());
}

#[tokio::test]
async fn test_blacklist_zero_ttl_is_noop() {
    let blacklist = InMemoryTokenBlacklist::new();

    blacklist.blacklist("digest", 0).await.unwrap();

    assert!(!blacklist.is_blacklisted("digest").await.unwrap());
}
