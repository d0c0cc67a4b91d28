use serde::Deserialize;
use shared::domain::{Role, Session};
use tracing::{info, warn};

use crate::{KeyValueStore, StorageMedium};

/// Storage key of the persisted "current user" record.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Shape accepted on read. Only `role` is required; a record without it is
/// not a session.
#[derive(Deserialize)]
struct StoredUser {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Persists the single current-session record.
pub struct SessionStore<M> {
    kv: KeyValueStore<M>,
    key: String,
}

impl<M: StorageMedium> SessionStore<M> {
    pub fn new(medium: M) -> Self {
        Self::with_key(medium, CURRENT_USER_KEY)
    }

    pub fn with_key(medium: M, key: impl Into<String>) -> Self {
        Self {
            kv: KeyValueStore::new(medium),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn save(&self, session: &Session) -> bool {
        let saved = self.kv.set(&self.key, session).await;
        if saved {
            info!(email = %session.email, role = %session.role, "session persisted");
        }
        saved
    }

    pub async fn load(&self) -> Option<Session> {
        let stored: StoredUser = self.kv.get(&self.key).await?;
        match stored.role {
            Some(role) if !role.is_empty() => Some(Session {
                email: stored.email.unwrap_or_default(),
                role: Role::parse(&role),
            }),
            _ => {
                warn!(key = %self.key, "stored session has no role; treating as signed out");
                None
            }
        }
    }

    pub async fn clear(&self) -> bool {
        self.kv.remove(&self.key).await
    }
}
