use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::{ReissueRequest, ReissueResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::extract_bearer_token;

use moim_core::repositories::{TokenBlacklist, TokenRepository, UserDirectory};

use super::{refresh_cookie, AppState};

/// Handler for POST /api/v1/auth/reissue
///
/// Exchanges a refresh token for a new access token. The refresh token
/// is read from the HttpOnly cookie when present, falling back to the
/// request body. An Authorization header may accompany the request; a
/// still-valid access token there rejects the call, since clients must
/// only reissue after expiry.
///
/// Whether a new refresh token comes back depends on the configured
/// rotation policy; `is_refresh_token_reissued` reports what happened,
/// and a rotated token also replaces the cookie.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_in": 1800,
///     "is_refresh_token_reissued": true
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Access token has not expired yet
/// - 401 Unauthorized: Missing, invalid or superseded refresh token
/// - 500 Internal Server Error: Storage or signing failure
pub async fn reissue<R, B, U>(
    req: HttpRequest,
    state: web::Data<AppState<R, B, U>>,
    body: Option<web::Json<ReissueRequest>>,
) -> HttpResponse
where
    R: TokenRepository + 'static,
    B: TokenBlacklist + 'static,
    U: UserDirectory + 'static,
{
    let cookie_token = req.cookie(&state.cookie.name).map(|c| c.value().to_string());
    let body_token = body.and_then(|b| b.into_inner().refresh_token);
    let refresh_token = cookie_token.or(body_token);

    let access_token = extract_bearer_token(&req);

    match state
        .token_service
        .reissue(refresh_token.as_deref(), access_token.as_deref())
        .await
    {
        Ok(tokens) => {
            let mut response = HttpResponse::Ok();

            if let Some(new_refresh) = &tokens.refresh_token {
                response.cookie(refresh_cookie(
                    &state.cookie,
                    new_refresh,
                    state.refresh_ttl_secs,
                ));
            }

            response.json(ReissueResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                expires_in: tokens.access_expires_in,
                is_refresh_token_reissued: tokens.is_refresh_token_reissued,
            })
        }
        Err(e) => handle_domain_error(&e),
    }
}
