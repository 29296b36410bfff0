//! Application factory
//!
//! Builds the actix-web App with middleware and routes. Kept separate
//! from `main` so integration tests can construct the same application
//! against in-memory storage.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::middleware::{auth::AccessTokenVerifier, cors::create_cors, JwtAuth};
use crate::routes::auth::{login::login, logout::logout, reissue::reissue, AppState};

use moim_core::repositories::{TokenBlacklist, TokenRepository, UserDirectory};
use moim_shared::types::response::{error_codes, ErrorResponse};

/// Create and configure the application
pub fn create_app<R, B, U>(
    app_state: web::Data<AppState<R, B, U>>,
    verifier: web::Data<Arc<dyn AccessTokenVerifier>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: TokenRepository + 'static,
    B: TokenBlacklist + 'static,
    U: UserDirectory + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::<R, B, U>))
                    .route("/reissue", web::post().to(reissue::<R, B, U>))
                    .route(
                        "/logout",
                        web::post().to(logout::<R, B, U>).wrap(JwtAuth::new()),
                    ),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "moim-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
