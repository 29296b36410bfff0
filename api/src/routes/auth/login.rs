use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::error::handle_domain_error;

use moim_core::errors::DomainError;
use moim_core::repositories::{TokenBlacklist, TokenRepository, UserDirectory};
use moim_shared::types::response::{error_codes, ErrorResponse};

use super::{refresh_cookie, AppState};

/// Handler for POST /api/v1/auth/login
///
/// Accepts the user-info payload obtained from an OAuth provider,
/// resolves it to a user identity and issues a token pair. The refresh
/// token is additionally set as an HttpOnly cookie.
///
/// # Request Body
///
/// ```json
/// {
///     "provider": "google",
///     "attributes": { "sub": "109876543210", "email": "mina@example.com" }
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unsupported provider or malformed payload
/// - 500 Internal Server Error: Storage or signing failure
pub async fn login<R, B, U>(
    state: web::Data<AppState<R, B, U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: TokenRepository + 'static,
    B: TokenBlacklist + 'static,
    U: UserDirectory + 'static,
{
    if let Err(validation_errors) = request.0.validate() {
        return HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid login request")
                .add_detail("errors", validation_errors.to_string()),
        );
    }

    let info = match state.providers.extract(&request.provider, &request.attributes) {
        Ok(info) => info,
        Err(e) => return handle_domain_error(&DomainError::Auth(e)),
    };

    let user = match state.user_directory.find_or_create(&info).await {
        Ok(user) => user,
        Err(e) => return handle_domain_error(&e),
    };

    let pair = match state.token_service.issue(user.id).await {
        Ok(pair) => pair,
        Err(e) => return handle_domain_error(&e),
    };

    info!(user_id = %user.id, provider = %user.provider, "user logged in");

    let cookie = refresh_cookie(&state.cookie, &pair.refresh_token, pair.refresh_expires_in);

    HttpResponse::Ok().cookie(cookie).json(AuthResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        expires_in: pair.access_expires_in,
    })
}
