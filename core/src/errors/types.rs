//! Token and auth error definitions
//!
//! Error variants map to stable external codes in
//! `moim_shared::error_codes`; internal detail (such as why a refresh
//! token was rejected) is logged but never surfaced to clients.

use moim_shared::types::response::{error_codes, ErrorResponse};
use std::fmt;
use thiserror::Error;

/// Why a refresh token failed validation
///
/// All reasons surface as the same external `INVALID_REFRESH_TOKEN` code;
/// the distinction exists for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRejectReason {
    /// Signature was valid but the token is past its expiry
    Expired,
    /// The token could not be decoded or its signature failed
    Malformed,
    /// The token does not match the stored record for any user
    Mismatched,
}

impl fmt::Display for RefreshRejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshRejectReason::Expired => f.write_str("expired"),
            RefreshRejectReason::Malformed => f.write_str("malformed"),
            RefreshRejectReason::Mismatched => f.write_str("mismatched"),
        }
    }
}

/// Token lifecycle errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Refresh token not present in request")]
    RefreshTokenNotExist,

    #[error("Invalid refresh token ({reason})")]
    InvalidRefreshToken { reason: RefreshRejectReason },

    #[error("Access token has not expired yet")]
    AccessTokenNotExpired,

    #[error("Token signing misconfigured: {message}")]
    SigningError { message: String },

    #[error("Logout failed, token state may be unchanged")]
    LogoutFailed,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Authentication errors raised during login
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unsupported OAuth provider: {provider}")]
    UnsupportedProvider { provider: String },

    #[error("Missing attribute from provider response: {attribute}")]
    MissingAttribute { attribute: String },
}

/// Convert TokenError to ErrorResponse
impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        let error_code = match err {
            TokenError::RefreshTokenNotExist => error_codes::REFRESH_TOKEN_NOT_EXIST,
            TokenError::InvalidRefreshToken { .. } => error_codes::INVALID_REFRESH_TOKEN,
            TokenError::AccessTokenNotExpired => error_codes::ACCESS_TOKEN_NOT_EXPIRED,
            TokenError::LogoutFailed => error_codes::LOGOUT_FAILED,
            TokenError::SigningError { .. } | TokenError::TokenGenerationFailed => {
                error_codes::INTERNAL_ERROR
            }
        };

        // Rejection reasons stay internal
        let message = match err {
            TokenError::InvalidRefreshToken { .. } => "Invalid refresh token".to_string(),
            other => other.to_string(),
        };

        ErrorResponse::new(error_code, message)
    }
}

/// Convert AuthError to ErrorResponse
impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let error_code = match err {
            AuthError::UnsupportedProvider { .. } => error_codes::UNSUPPORTED_PROVIDER,
            AuthError::MissingAttribute { .. } => error_codes::VALIDATION_ERROR,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
