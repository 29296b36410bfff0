//! JWT authentication middleware for protected endpoints.
//!
//! Extracts the Bearer token from the Authorization header, verifies it
//! through the token service (signature, expiry, logout blacklist) and
//! injects [`AuthContext`] plus the raw token into request extensions.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorInternalServerError, ErrorUnauthorized},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::debug;
use uuid::Uuid;

use moim_core::domain::entities::token::Claims;
use moim_core::errors::DomainError;
use moim_core::repositories::{TokenBlacklist, TokenRepository};
use moim_core::services::TokenService;

/// Access token verification behind dynamic dispatch
///
/// Lets the middleware verify tokens without carrying the token
/// service's repository type parameters.
#[async_trait]
pub trait AccessTokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, DomainError>;
}

#[async_trait]
impl<R, B> AccessTokenVerifier for TokenService<R, B>
where
    R: TokenRepository + 'static,
    B: TokenBlacklist + 'static,
{
    async fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_access_token(token).await
    }
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// JWT ID of the access token
    pub jti: String,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let user_id = claims.user_id().map_err(|_| DomainError::Unauthorized)?;
        Ok(Self {
            user_id,
            jti: claims.jti.clone(),
        })
    }
}

/// Raw Bearer token of the authenticated request
///
/// Logout needs the exact token string to blacklist it, not just the
/// decoded claims.
#[derive(Debug, Clone)]
pub struct RawAccessToken(pub String);

/// JWT authentication middleware factory
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(req.request()) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let verifier = req
                .app_data::<web::Data<Arc<dyn AccessTokenVerifier>>>()
                .ok_or_else(|| ErrorInternalServerError("Token verification not configured"))?
                .clone();

            let claims = match verifier.verify(&token).await {
                Ok(claims) => claims,
                Err(e) => {
                    debug!(error = %e, "access token verification failed");
                    return Err(ErrorUnauthorized("Invalid or expired access token"));
                }
            };

            let auth_context = AuthContext::from_claims(&claims)
                .map_err(|_| ErrorUnauthorized("Invalid token subject"))?;

            req.extensions_mut().insert(auth_context);
            req.extensions_mut().insert(RawAccessToken(token));

            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

impl FromRequest for RawAccessToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<RawAccessToken>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
