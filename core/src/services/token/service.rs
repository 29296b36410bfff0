//! Session token lifecycle service.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshTokenRecord, ReissuedTokens, TokenPair};
use crate::errors::{DomainError, RefreshRejectReason, TokenError};
use crate::repositories::{TokenBlacklist, TokenRepository};

use super::config::TokenServiceConfig;
use super::issuer::{hash_token, TokenIssuer};

/// Service owning the session token lifecycle
///
/// Issues token pairs at login, runs the reissue protocol, and handles
/// logout (blacklist plus refresh record removal). Storage goes through
/// the injected repository and blacklist; the service itself is
/// stateless per request.
pub struct TokenService<R: TokenRepository, B: TokenBlacklist> {
    issuer: TokenIssuer,
    repository: R,
    blacklist: B,
    config: TokenServiceConfig,
}

impl<R: TokenRepository, B: TokenBlacklist> TokenService<R, B> {
    /// Creates a new token service
    ///
    /// Fails only when the signing configuration is unusable; that error
    /// is fatal at startup.
    pub fn new(
        repository: R,
        blacklist: B,
        config: TokenServiceConfig,
    ) -> Result<Self, TokenError> {
        let issuer = TokenIssuer::new(&config)?;
        Ok(Self {
            issuer,
            repository,
            blacklist,
            config,
        })
    }

    /// Issues a fresh token pair for a user at login
    ///
    /// The refresh token is upserted into the repository keyed by the
    /// user id, overwriting any previous record: at most one active
    /// refresh token exists per user.
    pub async fn issue(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        let pair = self.issuer.issue(user_id)?;

        let record = RefreshTokenRecord::new(user_id, hash_token(&pair.refresh_token));
        self.repository.save(record).await?;

        debug!(%user_id, "issued token pair");
        Ok(pair)
    }

    /// Exchanges a refresh token for a new access token
    ///
    /// Runs the reissue protocol: extract, verify signature/expiry,
    /// match against the stored record, then mint. When an access token
    /// accompanies the request and has not expired yet, the call is
    /// rejected; clients must not refresh pre-emptively through this
    /// path.
    ///
    /// Whether the refresh token itself is rotated depends on the
    /// configured [`RotationPolicy`](super::RotationPolicy); the result's
    /// `is_refresh_token_reissued` flag reports what happened.
    pub async fn reissue(
        &self,
        refresh_token: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<ReissuedTokens, DomainError> {
        // Premature-reissue guard, only when an access token was supplied
        if let Some(access) = access_token {
            if let Ok(claims) = self.issuer.decode_access_token_lenient(access) {
                if !claims.is_expired() {
                    warn!(sub = %claims.sub, "reissue attempted with unexpired access token");
                    return Err(TokenError::AccessTokenNotExpired.into());
                }
            }
        }

        // Received
        let refresh = refresh_token.ok_or(TokenError::RefreshTokenNotExist)?;

        // Verified
        let claims = self.issuer.decode_refresh_token(refresh).map_err(|e| {
            if let TokenError::InvalidRefreshToken { reason } = &e {
                debug!(%reason, "refresh token failed verification");
            }
            e
        })?;

        // Matched: only the latest stored token per user passes, which
        // rejects replay of a rotated-out token
        let record = self
            .repository
            .find_by_token_hash(&hash_token(refresh))
            .await?
            .ok_or_else(|| {
                debug!(sub = %claims.sub, "refresh token does not match stored record");
                TokenError::InvalidRefreshToken {
                    reason: RefreshRejectReason::Mismatched,
                }
            })?;

        // Issued
        let user_id = record.user_id;
        let access_token = self.issuer.mint_access_token(user_id)?;

        let rotated_refresh = if self.config.rotation.should_rotate() {
            let new_refresh = self.issuer.mint_refresh_token(user_id)?;
            self.repository
                .save(RefreshTokenRecord::new(user_id, hash_token(&new_refresh)))
                .await?;
            Some(new_refresh)
        } else {
            None
        };

        debug!(%user_id, rotated = rotated_refresh.is_some(), "reissued access token");

        Ok(ReissuedTokens {
            access_token,
            is_refresh_token_reissued: rotated_refresh.is_some(),
            refresh_token: rotated_refresh,
            access_expires_in: self.issuer.access_expires_in(),
        })
    }

    /// Logs a user out by their current access token
    ///
    /// Blacklists the token for its remaining lifetime and removes the
    /// user's refresh token record. Either storage step failing fails
    /// the whole logout; the client retries and the access token stays
    /// valid until natural expiry.
    pub async fn logout(&self, access_token: &str) -> Result<(), DomainError> {
        // Expiry is deliberately not re-validated here; the request
        // authentication already did. An expired token just makes the
        // blacklist step a no-op.
        let claims = self.issuer.decode_access_token_lenient(access_token)?;
        let user_id = claims.user_id().map_err(|_| DomainError::Unauthorized)?;

        let ttl = claims.remaining_lifetime_secs();
        if ttl > 0 {
            self.blacklist
                .blacklist(&hash_token(access_token), ttl)
                .await
                .map_err(|e| {
                    warn!(%user_id, error = %e, "failed to blacklist access token");
                    DomainError::Token(TokenError::LogoutFailed)
                })?;
        }

        self.repository.remove(user_id).await.map_err(|e| {
            warn!(%user_id, error = %e, "failed to remove refresh token record");
            DomainError::Token(TokenError::LogoutFailed)
        })?;

        debug!(%user_id, "logged out");
        Ok(())
    }

    /// Verifies an access token for request authentication
    ///
    /// Checks signature, expiry, and the logout blacklist. Consumed by
    /// the authentication middleware on every protected request.
    pub async fn verify_access_token(&self, access_token: &str) -> Result<Claims, DomainError> {
        let claims = self.issuer.decode_access_token(access_token)?;

        if self.is_blacklisted(access_token).await? {
            debug!(sub = %claims.sub, "access token is blacklisted");
            return Err(DomainError::Unauthorized);
        }

        Ok(claims)
    }

    /// Whether an access token has been blacklisted by logout
    pub async fn is_blacklisted(&self, access_token: &str) -> Result<bool, DomainError> {
        self.blacklist.is_blacklisted(&hash_token(access_token)).await
    }
}
