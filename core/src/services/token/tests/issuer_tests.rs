//! Unit tests for the token issuer

use uuid::Uuid;

use crate::errors::{RefreshRejectReason, TokenError};
use crate::services::token::{hash_token, TokenIssuer, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "unit-test-secret-0123456789-0123456789".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_short_secret_is_signing_error() {
    let config = TokenServiceConfig {
        jwt_secret: "too-short".to_string(),
        ..Default::default()
    };

    match TokenIssuer::new(&config) {
        Err(TokenError::SigningError { .. }) => {}
        other => panic!("expected SigningError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_issue_produces_decodable_pair() {
    let issuer = TokenIssuer::new(&test_config()).unwrap();
    let user_id = Uuid::new_v4();

    let pair = issuer.issue(user_id).unwrap();

    let access = issuer.decode_access_token(&pair.access_token).unwrap();
    assert_eq!(access.user_id().unwrap(), user_id);
    assert!(access.is_access_token());

    let refresh = issuer.decode_refresh_token(&pair.refresh_token).unwrap();
    assert_eq!(refresh.user_id().unwrap(), user_id);
    assert!(refresh.is_refresh_token());
}

#[test]
fn test_access_token_rejected_as_refresh() {
    let issuer = TokenIssuer::new(&test_config()).unwrap();
    let access = issuer.mint_access_token(Uuid::new_v4()).unwrap();

    match issuer.decode_refresh_token(&access) {
        Err(TokenError::InvalidRefreshToken {
            reason: RefreshRejectReason::Malformed,
        }) => {}
        other => panic!("expected malformed rejection, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_tampered_refresh_token_is_malformed() {
    let issuer = TokenIssuer::new(&test_config()).unwrap();
    let refresh = issuer.mint_refresh_token(Uuid::new_v4()).unwrap();

    let mut tampered = refresh.clone();
    tampered.push('x');

    match issuer.decode_refresh_token(&tampered) {
        Err(TokenError::InvalidRefreshToken {
            reason: RefreshRejectReason::Malformed,
        }) => {}
        other => panic!("expected malformed rejection, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_foreign_signature_rejected() {
    let issuer = TokenIssuer::new(&test_config()).unwrap();
    let foreign = TokenIssuer::new(&TokenServiceConfig {
        jwt_secret: "another-secret-entirely-0123456789-xyz".to_string(),
        ..Default::default()
    })
    .unwrap();

    let token = foreign.mint_refresh_token(Uuid::new_v4()).unwrap();
    assert!(issuer.decode_refresh_token(&token).is_err());
}

#[test]
fn test_lenient_decode_accepts_expired() {
    let config = TokenServiceConfig {
        jwt_secret: "unit-test-secret-0123456789-0123456789".to_string(),
        access_token_expiry_minutes: -5,
        ..Default::default()
    };
    let issuer = TokenIssuer::new(&config).unwrap();
    let token = issuer.mint_access_token(Uuid::new_v4()).unwrap();

    // Strict decode rejects, lenient decode still yields claims
    assert!(issuer.decode_access_token(&token).is_err());
    let claims = issuer.decode_access_token_lenient(&token).unwrap();
    assert!(claims.is_expired());
}

#[test]
fn test_hash_token_is_stable_hex() {
    let a = hash_token("some.jwt.token");
    let b = hash_token("some.jwt.token");
    let c = hash_token("other.jwt.token");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    assert!(!a.contains("jwt"));
}
