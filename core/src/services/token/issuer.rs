//! JWT minting and verification.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainError, RefreshRejectReason, TokenError};

use super::config::TokenServiceConfig;

/// Minimum acceptable HS256 secret length in bytes
const MIN_SECRET_LEN: usize = 32;

/// Hashes a token for storage or blacklist keys
///
/// Tokens are never persisted verbatim; stores only ever see this digest.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Mints and verifies signed access and refresh tokens
///
/// Stateless: signatures are verifiable without external state. Storage
/// of refresh tokens is the [`TokenService`](super::TokenService)'s job.
pub struct TokenIssuer {
    algorithm: jsonwebtoken::Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Same validation with expiry checking disabled, for logout paths
    lenient_validation: Validation,
    issuer: String,
    access_expiry: Duration,
    refresh_expiry: Duration,
}

impl TokenIssuer {
    /// Creates a new issuer from configuration
    ///
    /// Fails only on signing misconfiguration (missing or too-short
    /// secret). This is fatal at startup, never a per-request error.
    pub fn new(config: &TokenServiceConfig) -> Result<Self, TokenError> {
        if config.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(TokenError::SigningError {
                message: format!(
                    "JWT secret must be at least {} bytes, got {}",
                    MIN_SECRET_LEN,
                    config.jwt_secret.len()
                ),
            });
        }

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        let mut lenient_validation = validation.clone();
        lenient_validation.validate_exp = false;

        Ok(Self {
            algorithm: config.algorithm,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            lenient_validation,
            issuer: config.issuer.clone(),
            access_expiry: Duration::minutes(config.access_token_expiry_minutes),
            refresh_expiry: Duration::days(config.refresh_token_expiry_days),
        })
    }

    /// Mints a fresh access/refresh token pair for a user
    pub fn issue(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        Ok(TokenPair {
            access_token: self.mint_access_token(user_id)?,
            refresh_token: self.mint_refresh_token(user_id)?,
            access_expires_in: self.access_expiry.num_seconds(),
            refresh_expires_in: self.refresh_expiry.num_seconds(),
        })
    }

    /// Mints a single access token
    pub fn mint_access_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(user_id, &self.issuer, self.access_expiry);
        self.encode_jwt(&claims)
    }

    /// Mints a single refresh token
    pub fn mint_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new_refresh_token(user_id, &self.issuer, self.refresh_expiry);
        self.encode_jwt(&claims)
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token's signature and expiry
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Unauthorized)?;

        if !token_data.claims.is_access_token() {
            return Err(DomainError::Unauthorized);
        }

        Ok(token_data.claims)
    }

    /// Decodes an access token without checking expiry
    ///
    /// Used at logout (the middleware already authenticated the request)
    /// and for the premature-reissue guard, where an expired token is the
    /// expected case.
    pub fn decode_access_token_lenient(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.lenient_validation)
            .map_err(|_| DomainError::Unauthorized)?;

        if !token_data.claims.is_access_token() {
            return Err(DomainError::Unauthorized);
        }

        Ok(token_data.claims)
    }

    /// Verifies a refresh token's signature and expiry
    ///
    /// Expired and malformed tokens are told apart for logging; callers
    /// surface both as the same external error.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        RefreshRejectReason::Expired
                    }
                    _ => RefreshRejectReason::Malformed,
                };
                TokenError::InvalidRefreshToken { reason }
            })?;

        if !token_data.claims.is_refresh_token() {
            return Err(TokenError::InvalidRefreshToken {
                reason: RefreshRejectReason::Malformed,
            });
        }

        Ok(token_data.claims)
    }

    /// Access token lifetime in seconds
    pub fn access_expires_in(&self) -> i64 {
        self.access_expiry.num_seconds()
    }
}
