//! Registry mapping provider names to their extractors.

use serde_json::Value;
use std::collections::HashMap;

use crate::domain::value_objects::CanonicalUserInfo;
use crate::errors::AuthError;

use super::extractor::{
    GoogleUserInfoExtractor, KakaoUserInfoExtractor, NaverUserInfoExtractor, UserInfoExtractor,
};

/// Registry of user-info extractors keyed by provider name
pub struct ProviderRegistry {
    extractors: HashMap<String, Box<dyn UserInfoExtractor>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the built-in providers registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GoogleUserInfoExtractor));
        registry.register(Box::new(KakaoUserInfoExtractor));
        registry.register(Box::new(NaverUserInfoExtractor));
        registry
    }

    /// Register an extractor under its provider name
    pub fn register(&mut self, extractor: Box<dyn UserInfoExtractor>) {
        self.extractors
            .insert(extractor.provider().as_str().to_string(), extractor);
    }

    /// Extract canonical user info for a named provider
    ///
    /// Provider name matching is case-insensitive.
    pub fn extract(
        &self,
        provider: &str,
        attributes: &Value,
    ) -> Result<CanonicalUserInfo, AuthError> {
        let extractor = self
            .extractors
            .get(&provider.to_ascii_lowercase())
            .ok_or_else(|| AuthError::UnsupportedProvider {
                provider: provider.to_string(),
            })?;

        extractor.extract(attributes)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::OAuthProvider;
    use serde_json::json;

    #[test]
    fn test_google_extraction() {
        let registry = ProviderRegistry::with_defaults();
        let attributes = json!({
            "sub": "109876543210",
            "email": "mina@example.com",
            "name": "Mina"
        });

        let info = registry.extract("google", &attributes).unwrap();
        assert_eq!(info.provider, OAuthProvider::Google);
        assert_eq!(info.oauth_id, "109876543210");
        assert_eq!(info.email.as_deref(), Some("mina@example.com"));
        assert_eq!(info.nickname.as_deref(), Some("Mina"));
    }

    #[test]
    fn test_kakao_extraction() {
        let registry = ProviderRegistry::with_defaults();
        let attributes = json!({
            "id": 246813579,
            "kakao_account": {
                "email": "jun@example.com",
                "profile": { "nickname": "Jun" }
            }
        });

        let info = registry.extract("kakao", &attributes).unwrap();
        assert_eq!(info.provider, OAuthProvider::Kakao);
        assert_eq!(info.oauth_id, "246813579");
        assert_eq!(info.nickname.as_deref(), Some("Jun"));
    }

    #[test]
    fn test_naver_extraction() {
        let registry = ProviderRegistry::with_defaults();
        let attributes = json!({
            "response": {
                "id": "naver-abc-123",
                "email": "sora@example.com",
                "nickname": "Sora"
            }
        });

        let info = registry.extract("naver", &attributes).unwrap();
        assert_eq!(info.provider, OAuthProvider::Naver);
        assert_eq!(info.oauth_id, "naver-abc-123");
    }

    #[test]
    fn test_provider_name_is_case_insensitive() {
        let registry = ProviderRegistry::with_defaults();
        let attributes = json!({ "sub": "1" });

        assert!(registry.extract("GOOGLE", &attributes).is_ok());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let registry = ProviderRegistry::with_defaults();

        match registry.extract("github", &json!({})) {
            Err(AuthError::UnsupportedProvider { provider }) => assert_eq!(provider, "github"),
            other => panic!("expected UnsupportedProvider, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_subject_rejected() {
        let registry = ProviderRegistry::with_defaults();

        match registry.extract("google", &json!({ "email": "x@example.com" })) {
            Err(AuthError::MissingAttribute { attribute }) => assert_eq!(attribute, "sub"),
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }
}
