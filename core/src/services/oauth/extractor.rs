//! Provider-specific user-info extractors.

use serde_json::Value;

use crate::domain::entities::user::OAuthProvider;
use crate::domain::value_objects::CanonicalUserInfo;
use crate::errors::AuthError;

/// Maps a provider's raw user-info attributes to canonical form
pub trait UserInfoExtractor: Send + Sync {
    /// Provider this extractor handles
    fn provider(&self) -> OAuthProvider;

    /// Extract canonical user info from the raw attribute map
    fn extract(&self, attributes: &Value) -> Result<CanonicalUserInfo, AuthError>;
}

fn missing(attribute: &str) -> AuthError {
    AuthError::MissingAttribute {
        attribute: attribute.to_string(),
    }
}

/// Google: flat OpenID Connect payload, subject in `sub`
pub struct GoogleUserInfoExtractor;

impl UserInfoExtractor for GoogleUserInfoExtractor {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Google
    }

    fn extract(&self, attributes: &Value) -> Result<CanonicalUserInfo, AuthError> {
        let oauth_id = attributes
            .get("sub")
            .and_then(Value::as_str)
            .ok_or_else(|| missing("sub"))?;

        Ok(CanonicalUserInfo {
            provider: self.provider(),
            oauth_id: oauth_id.to_string(),
            email: attributes.get("email").and_then(Value::as_str).map(String::from),
            nickname: attributes.get("name").and_then(Value::as_str).map(String::from),
        })
    }
}

/// Kakao: numeric `id` at the top level, profile nested under
/// `kakao_account.profile`
pub struct KakaoUserInfoExtractor;

impl UserInfoExtractor for KakaoUserInfoExtractor {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Kakao
    }

    fn extract(&self, attributes: &Value) -> Result<CanonicalUserInfo, AuthError> {
        let oauth_id = attributes
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| missing("id"))?;

        let account = attributes.get("kakao_account");
        let email = account
            .and_then(|a| a.get("email"))
            .and_then(Value::as_str)
            .map(String::from);
        let nickname = account
            .and_then(|a| a.get("profile"))
            .and_then(|p| p.get("nickname"))
            .and_then(Value::as_str)
            .map(String::from);

        Ok(CanonicalUserInfo {
            provider: self.provider(),
            oauth_id: oauth_id.to_string(),
            email,
            nickname,
        })
    }
}

/// Naver: everything nested under `response`
pub struct NaverUserInfoExtractor;

impl UserInfoExtractor for NaverUserInfoExtractor {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Naver
    }

    fn extract(&self, attributes: &Value) -> Result<CanonicalUserInfo, AuthError> {
        let response = attributes.get("response").ok_or_else(|| missing("response"))?;

        let oauth_id = response
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| missing("response.id"))?;

        Ok(CanonicalUserInfo {
            provider: self.provider(),
            oauth_id: oauth_id.to_string(),
            email: response.get("email").and_then(Value::as_str).map(String::from),
            nickname: response.get("nickname").and_then(Value::as_str).map(String::from),
        })
    }
}
