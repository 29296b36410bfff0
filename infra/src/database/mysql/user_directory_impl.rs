//! MySQL implementation of the UserDirectory trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

use moim_core::domain::entities::user::{OAuthProvider, User};
use moim_core::domain::value_objects::CanonicalUserInfo;
use moim_core::errors::DomainError;
use moim_core::repositories::UserDirectory;

/// MySQL implementation of UserDirectory
///
/// The `users` table carries a unique key on `(provider, oauth_id)`.
/// First login inserts; a concurrent duplicate insert loses to the
/// unique key and falls through to the select.
pub struct MySqlUserDirectory {
    pool: MySqlPool,
}

impl MySqlUserDirectory {
    /// Create a new MySQL user directory
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let provider: String = row.try_get("provider").map_err(|e| DomainError::Internal {
            message: format!("Failed to get provider: {}", e),
        })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            provider: provider.parse::<OAuthProvider>().map_err(|_| DomainError::Internal {
                message: format!("Unknown provider in users table: {}", provider),
            })?,
            oauth_id: row.try_get("oauth_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get oauth_id: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    async fn find(&self, info: &CanonicalUserInfo) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, provider, oauth_id, created_at
            FROM users
            WHERE provider = ? AND oauth_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(info.provider.as_str())
            .bind(&info.oauth_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn find_or_create(&self, info: &CanonicalUserInfo) -> Result<User, DomainError> {
        if let Some(user) = self.find(info).await? {
            return Ok(user);
        }

        let user = User::new(info.provider, info.oauth_id.clone());

        let query = r#"
            INSERT INTO users (id, provider, oauth_id, created_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE id = id
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(user.provider.as_str())
            .bind(&user.oauth_id)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create user: {}", e),
            })?;

        // Re-read: a concurrent first login may have won the insert
        let user = self.find(info).await?.ok_or_else(|| DomainError::Internal {
            message: "User vanished after insert".to_string(),
        })?;

        debug!(user_id = %user.id, provider = %user.provider, "resolved user identity");
        Ok(user)
    }
}
