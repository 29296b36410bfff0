//! Domain error to HTTP response mapping.
//!
//! Every handler funnels failures through [`handle_domain_error`] so
//! status codes and response bodies stay consistent across endpoints.
//! Internal detail (storage errors, refresh rejection reasons) is
//! logged here and never serialized to the client.

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use moim_core::errors::{AuthError, DomainError, TokenError};
use moim_shared::types::response::{error_codes, ErrorResponse};

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message)),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),
        DomainError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            "Authentication required",
        )),
        DomainError::Internal { message } => {
            error!(%message, "internal error");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

fn handle_token_error(error: &TokenError) -> HttpResponse {
    let status = match error {
        TokenError::RefreshTokenNotExist | TokenError::InvalidRefreshToken { .. } => {
            StatusCode::UNAUTHORIZED
        }
        TokenError::AccessTokenNotExpired => StatusCode::BAD_REQUEST,
        TokenError::LogoutFailed
        | TokenError::SigningError { .. }
        | TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(%error, "token operation failed");
    } else {
        warn!(%error, "token request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::from(error))
}

fn handle_auth_error(error: &AuthError) -> HttpResponse {
    warn!(%error, "login request rejected");
    HttpResponse::BadRequest().json(ErrorResponse::from(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use moim_core::errors::RefreshRejectReason;

    #[test]
    fn missing_refresh_token_maps_to_401() {
        let resp = handle_domain_error(&DomainError::Token(TokenError::RefreshTokenNotExist));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_refresh_token_maps_to_401() {
        let resp = handle_domain_error(&DomainError::Token(TokenError::InvalidRefreshToken {
            reason: RefreshRejectReason::Mismatched,
        }));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unexpired_access_token_maps_to_400() {
        let resp = handle_domain_error(&DomainError::Token(TokenError::AccessTokenNotExpired));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn logout_failure_maps_to_500() {
        let resp = handle_domain_error(&DomainError::Token(TokenError::LogoutFailed));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unsupported_provider_maps_to_400() {
        let resp = handle_domain_error(&DomainError::Auth(AuthError::UnsupportedProvider {
            provider: "github".to_string(),
        }));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
