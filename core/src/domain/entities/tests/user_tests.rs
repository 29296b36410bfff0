//! Unit tests for the user entity

use std::str::FromStr;

use crate::domain::entities::user::{OAuthProvider, User};

#[test]
fn test_provider_round_trip() {
    for provider in [OAuthProvider::Google, OAuthProvider::Kakao, OAuthProvider::Naver] {
        let parsed = OAuthProvider::from_str(provider.as_str()).unwrap();
        assert_eq!(parsed, provider);
    }
}

#[test]
fn test_provider_parsing_is_case_insensitive() {
    assert_eq!(OAuthProvider::from_str("KAKAO").unwrap(), OAuthProvider::Kakao);
    assert!(OAuthProvider::from_str("github").is_err());
}

#[test]
fn test_user_creation() {
    let user = User::new(OAuthProvider::Google, "109876543210");

    assert_eq!(user.provider, OAuthProvider::Google);
    assert_eq!(user.oauth_id, "109876543210");
}
