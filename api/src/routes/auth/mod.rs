//! Authentication route handlers
//!
//! - `POST /api/v1/auth/login` - exchange provider user info for tokens
//! - `POST /api/v1/auth/reissue` - exchange a refresh token for a new access token
//! - `POST /api/v1/auth/logout` - revoke the current session

pub mod login;
pub mod logout;
pub mod reissue;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use std::sync::Arc;

use moim_core::repositories::{TokenBlacklist, TokenRepository, UserDirectory};
use moim_core::services::{ProviderRegistry, TokenService};
use moim_shared::config::CookieConfig;

/// Application state shared across handlers
pub struct AppState<R, B, U>
where
    R: TokenRepository,
    B: TokenBlacklist,
    U: UserDirectory,
{
    pub token_service: Arc<TokenService<R, B>>,
    pub user_directory: Arc<U>,
    pub providers: Arc<ProviderRegistry>,
    pub cookie: CookieConfig,
    /// Refresh token lifetime in seconds, used as the cookie max-age
    pub refresh_ttl_secs: i64,
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// Builds the refresh token cookie
///
/// Scoped to the auth endpoints so the browser only attaches it where
/// the server actually reads it.
pub(crate) fn refresh_cookie(
    config: &CookieConfig,
    value: &str,
    max_age_secs: i64,
) -> Cookie<'static> {
    Cookie::build(config.name.clone(), value.to_string())
        .path("/api/v1/auth")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// Builds an expired cookie that clears the refresh token
pub(crate) fn clear_refresh_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(config.name.clone(), "")
        .path("/api/v1/auth")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(Duration::ZERO)
        .finish()
}
