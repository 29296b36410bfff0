use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/login
///
/// `attributes` carries the raw user-info payload as returned by the
/// OAuth provider; the shape differs per provider and is interpreted by
/// the registered extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Provider name: "google", "kakao" or "naver"
    #[validate(length(min = 1, max = 32))]
    pub provider: String,

    /// Provider user-info payload
    pub attributes: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Request body for POST /api/v1/auth/reissue
///
/// The refresh token normally travels in the HttpOnly cookie; the body
/// field is a fallback for clients that cannot use cookies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReissueRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReissueResponse {
    pub access_token: String,

    /// Present only when the rotation policy replaced the refresh token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Whether the refresh token was rotated during this call
    pub is_refresh_token_reissued: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
