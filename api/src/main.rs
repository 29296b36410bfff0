use actix_web::{web, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use moim_api::app::create_app;
use moim_api::middleware::auth::AccessTokenVerifier;
use moim_api::routes::auth::AppState;
use moim_core::services::{ProviderRegistry, TokenService, TokenServiceConfig};
use moim_infra::cache::{RedisClient, RedisTokenBlacklist};
use moim_infra::database::mysql::{MySqlTokenRepository, MySqlUserDirectory};
use moim_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default. Do not run this in production.");
    }

    let pool = moim_infra::database::create_pool(&config.database)
        .await
        .map_err(to_io_error)?;

    let redis = RedisClient::new(&config.cache).await.map_err(to_io_error)?;

    let repository = MySqlTokenRepository::new(pool.clone());
    let blacklist = RedisTokenBlacklist::new(redis);
    let user_directory = Arc::new(MySqlUserDirectory::new(pool));

    let token_service = Arc::new(
        TokenService::new(
            repository,
            blacklist,
            TokenServiceConfig::from(&config.jwt),
        )
        .map_err(to_io_error)?,
    );
    let verifier: Arc<dyn AccessTokenVerifier> = token_service.clone();

    let state = web::Data::new(AppState {
        token_service,
        user_directory,
        providers: Arc::new(ProviderRegistry::with_defaults()),
        cookie: config.cookie.clone(),
        refresh_ttl_secs: config.jwt.refresh_token_expiry_days * 86_400,
    });
    let verifier = web::Data::new(verifier);

    let bind_address = config.server.bind_address();
    info!("Starting Moim auth service on {}", bind_address);

    let mut server =
        HttpServer::new(move || create_app(state.clone(), verifier.clone())).bind(&bind_address)?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.run().await
}

fn to_io_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}
