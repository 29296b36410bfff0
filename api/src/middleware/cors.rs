//! CORS middleware configuration.
//!
//! Environment-aware: permissive in development, origin-allowlisted in
//! production. Credentials are always supported because the refresh
//! token travels in an HttpOnly cookie.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;
use tracing::info;

/// Creates a CORS middleware instance for the current environment
///
/// # Environment Variables
/// - `ENVIRONMENT`: "production" enables the restrictive configuration
/// - `ALLOWED_ORIGINS`: comma-separated allowlist (production only)
/// - `CORS_MAX_AGE`: preflight cache lifetime in seconds (default 3600)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    info!("Configuring CORS for development environment");

    Cors::permissive().max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_cors_builds() {
        env::remove_var("ENVIRONMENT");
        let _cors = create_cors();
    }

    #[test]
    fn production_cors_builds_with_origins() {
        env::set_var("ENVIRONMENT", "production");
        env::set_var("ALLOWED_ORIGINS", "https://app.moim.dev, https://admin.moim.dev");

        let _cors = create_cors();

        env::remove_var("ENVIRONMENT");
        env::remove_var("ALLOWED_ORIGINS");
    }
}
