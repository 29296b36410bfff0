use actix_web::{web, HttpResponse};
use tracing::info;

use crate::dto::auth::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::{AuthContext, RawAccessToken};

use moim_core::repositories::{TokenBlacklist, TokenRepository, UserDirectory};

use super::{clear_refresh_cookie, AppState};

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the current session: the access token goes onto the
/// blacklist for its remaining lifetime and the user's refresh token
/// record is removed. Requires authentication via Bearer token.
///
/// The cookie is only cleared on success; a failed logout leaves the
/// session state untouched so the client can retry.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 500 Internal Server Error: Blacklist or storage failure
pub async fn logout<R, B, U>(
    state: web::Data<AppState<R, B, U>>,
    auth: AuthContext,
    token: RawAccessToken,
) -> HttpResponse
where
    R: TokenRepository + 'static,
    B: TokenBlacklist + 'static,
    U: UserDirectory + 'static,
{
    match state.token_service.logout(&token.0).await {
        Ok(()) => {
            info!(user_id = %auth.user_id, "user logged out");

            HttpResponse::Ok()
                .cookie(clear_refresh_cookie(&state.cookie))
                .json(LogoutResponse {
                    message: "Logged out successfully".to_string(),
                })
        }
        Err(e) => handle_domain_error(&e),
    }
}
