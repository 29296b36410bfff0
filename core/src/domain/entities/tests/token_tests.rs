//! Unit tests for token entities

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshTokenRecord, TOKEN_TYPE_ACCESS, TOKEN_TYPE_REFRESH};

#[test]
fn test_access_token_claims() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.iss, "moim-auth");
    assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
    assert!(claims.is_access_token());
    assert!(!claims.is_refresh_token());
    assert!(!claims.is_expired());
}

#[test]
fn test_refresh_token_claims() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new_refresh_token(user_id, "moim-auth", Duration::days(14));

    assert_eq!(claims.typ, TOKEN_TYPE_REFRESH);
    assert!(claims.is_refresh_token());
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_user_id_parsing() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));

    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn test_claims_expiration() {
    let user_id = Uuid::new_v4();
    let mut claims = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));

    claims.exp = Utc::now().timestamp() - 1;

    assert!(claims.is_expired());
    assert_eq!(claims.remaining_lifetime_secs(), 0);
}

#[test]
fn test_claims_remaining_lifetime() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));

    let remaining = claims.remaining_lifetime_secs();
    assert!(remaining > 29 * 60);
    assert!(remaining <= 30 * 60);
}

#[test]
fn test_claims_have_unique_jti() {
    let user_id = Uuid::new_v4();
    let a = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));
    let b = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));

    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_refresh_token_record_creation() {
    let user_id = Uuid::new_v4();
    let record = RefreshTokenRecord::new(user_id, "hashed_token_value".to_string());

    assert_eq!(record.user_id, user_id);
    assert_eq!(record.token_hash, "hashed_token_value");
}

#[test]
fn test_claims_serialization() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new_access_token(user_id, "moim-auth", Duration::minutes(30));

    let json = serde_json::to_string(&claims).unwrap();
    let deserialized: Claims = serde_json::from_str(&json).unwrap();

    assert_eq!(claims, deserialized);
}
