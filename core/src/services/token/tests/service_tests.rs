//! Unit tests for the token lifecycle service

use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::repositories::token::{InMemoryTokenBlacklist, InMemoryTokenRepository, TokenRepository};
use crate::services::token::{hash_token, RotationPolicy, TokenService, TokenServiceConfig};

type TestService = TokenService<InMemoryTokenRepository, InMemoryTokenBlacklist>;

fn test_config(rotation: RotationPolicy) -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "unit-test-secret-0123456789-0123456789".to_string(),
        rotation,
        ..Default::default()
    }
}

fn create_service(rotation: RotationPolicy) -> (TestService, InMemoryTokenRepository) {
    let repository = InMemoryTokenRepository::new();
    let blacklist = InMemoryTokenBlacklist::new();
    let service = TokenService::new(repository.clone(), blacklist, test_config(rotation))
        .expect("failed to create token service");
    (service, repository)
}

#[tokio::test]
async fn test_issue_stores_single_record_per_user() {
    let (service, repository) = create_service(RotationPolicy::Always);
    let user_id = Uuid::new_v4();

    let first = service.issue(user_id).await.unwrap();
    let second = service.issue(user_id).await.unwrap();

    // The second login overwrote the first record
    assert_eq!(repository.len().await, 1);
    assert!(repository
        .find_by_token_hash(&hash_token(&first.refresh_token))
        .await
        .unwrap()
        .is_none());

    let record = repository
        .find_by_token_hash(&hash_token(&second.refresh_token))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.user_id, user_id);
}

#[tokio::test]
async fn test_reissue_without_refresh_token() {
    let (service, _) = create_service(RotationPolicy::Always);

    match service.reissue(None, None).await {
        Err(DomainError::Token(TokenError::RefreshTokenNotExist)) => {}
        other => panic!("expected RefreshTokenNotExist, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_reissue_rotates_and_rejects_replay() {
    let (service, repository) = create_service(RotationPolicy::Always);
    let user_id = Uuid::new_v4();

    let pair = service.issue(user_id).await.unwrap();

    let reissued = service.reissue(Some(&pair.refresh_token), None).await.unwrap();
    assert!(reissued.is_refresh_token_reissued);
    let rotated = reissued.refresh_token.expect("rotation must return a new refresh token");

    // The old token no longer matches the stored record
    assert!(repository
        .find_by_token_hash(&hash_token(&pair.refresh_token))
        .await
        .unwrap()
        .is_none());
    let record = repository
        .find_by_token_hash(&hash_token(&rotated))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.user_id, user_id);

    // Replaying the rotated-out token fails
    match service.reissue(Some(&pair.refresh_token), None).await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken { .. })) => {}
        other => panic!("expected InvalidRefreshToken, got {:?}", other.map(|_| ())),
    }

    // The rotated token works
    service.reissue(Some(&rotated), None).await.unwrap();
}

#[tokio::test]
async fn test_reissue_without_rotation_keeps_refresh_token() {
    let (service, _) = create_service(RotationPolicy::Never);
    let user_id = Uuid::new_v4();

    let pair = service.issue(user_id).await.unwrap();

    let first = service.reissue(Some(&pair.refresh_token), None).await.unwrap();
    assert!(!first.is_refresh_token_reissued);
    assert!(first.refresh_token.is_none());
    assert!(!first.access_token.is_empty());

    // The original refresh token stays valid for further reissues
    let second = service.reissue(Some(&pair.refresh_token), None).await.unwrap();
    assert!(!second.is_refresh_token_reissued);
}

#[tokio::test]
async fn test_reissue_with_unexpired_access_token_rejected() {
    let (service, _) = create_service(RotationPolicy::Always);
    let user_id = Uuid::new_v4();

    let pair = service.issue(user_id).await.unwrap();

    match service
        .reissue(Some(&pair.refresh_token), Some(&pair.access_token))
        .await
    {
        Err(DomainError::Token(TokenError::AccessTokenNotExpired)) => {}
        other => panic!("expected AccessTokenNotExpired, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_reissue_with_expired_access_token_proceeds() {
    // Access tokens expire immediately, refresh tokens stay valid
    let config = TokenServiceConfig {
        jwt_secret: "unit-test-secret-0123456789-0123456789".to_string(),
        access_token_expiry_minutes: -5,
        ..Default::default()
    };
    let service = TokenService::new(
        InMemoryTokenRepository::new(),
        InMemoryTokenBlacklist::new(),
        config,
    )
    .unwrap();
    let user_id = Uuid::new_v4();

    let pair = service.issue(user_id).await.unwrap();

    let reissued = service
        .reissue(Some(&pair.refresh_token), Some(&pair.access_token))
        .await
        .unwrap();
    assert!(!reissued.access_token.is_empty());
}

#[tokio::test]
async fn test_expired_refresh_token_rejected() {
    let config = TokenServiceConfig {
        jwt_secret: "unit-test-secret-0123456789-0123456789".to_string(),
        refresh_token_expiry_days: -1,
        ..Default::default()
    };
    let service = TokenService::new(
        InMemoryTokenRepository::new(),
        InMemoryTokenBlacklist::new(),
        config,
    )
    .unwrap();

    let pair = service.issue(Uuid::new_v4()).await.unwrap();

    match service.reissue(Some(&pair.refresh_token), None).await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken { .. })) => {}
        other => panic!("expected InvalidRefreshToken, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_garbage_refresh_token_rejected() {
    let (service, _) = create_service(RotationPolicy::Always);

    match service.reissue(Some("not.a.jwt"), None).await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken { .. })) => {}
        other => panic!("expected InvalidRefreshToken, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_logout_blacklists_and_removes_record() {
    let (service, repository) = create_service(RotationPolicy::Always);
    let user_id = Uuid::new_v4();

    let pair = service.issue(user_id).await.unwrap();

    // Token authenticates before logout
    service.verify_access_token(&pair.access_token).await.unwrap();

    service.logout(&pair.access_token).await.unwrap();

    // Blacklisted immediately, even though signature and expiry remain valid
    assert!(service.is_blacklisted(&pair.access_token).await.unwrap());
    assert!(service.verify_access_token(&pair.access_token).await.is_err());

    // Refresh record is gone, so reissue fails too
    assert_eq!(repository.len().await, 0);
    match service.reissue(Some(&pair.refresh_token), None).await {
        Err(DomainError::Token(TokenError::InvalidRefreshToken { .. })) => {}
        other => panic!("expected InvalidRefreshToken, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_logout_twice_succeeds() {
    let (service, _) = create_service(RotationPolicy::Always);

    let pair = service.issue(Uuid::new_v4()).await.unwrap();

    service.logout(&pair.access_token).await.unwrap();
    // Record removal is idempotent; a retried logout succeeds
    service.logout(&pair.access_token).await.unwrap();
}

#[tokio::test]
async fn test_verify_access_token_rejects_refresh_token() {
    let (service, _) = create_service(RotationPolicy::Always);

    let pair = service.issue(Uuid::new_v4()).await.unwrap();

    assert!(service.verify_access_token(&pair.refresh_token).await.is_err());
}
