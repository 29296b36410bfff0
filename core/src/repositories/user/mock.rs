//! In-memory user directory for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{OAuthProvider, User};
use crate::domain::value_objects::CanonicalUserInfo;
use crate::errors::DomainError;

use super::r#trait::UserDirectory;

/// In-memory user directory keyed by `(provider, oauth_id)`
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<(OAuthProvider, String), User>>>,
}

impl InMemoryUserDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_or_create(&self, info: &CanonicalUserInfo) -> Result<User, DomainError> {
        let key = (info.provider, info.oauth_id.clone());
        let mut users = self.users.write().await;
        let user = users
            .entry(key)
            .or_insert_with(|| User::new(info.provider, info.oauth_id.clone()));
        Ok(user.clone())
    }
}
