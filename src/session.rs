use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub issued_at: DateTime<Utc>,
}

/// File-backed session holder. Written exactly once per login, cleared once
/// per logout or auth failure; read by every outgoing request.
///
/// `token()` always reads the live state, so a logout that lands while a
/// request is being retried invalidates the retry instead of reusing the
/// stale token.
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Bootstrap: load the persisted session if one exists. A missing,
    /// corrupt or partially-written file yields the unauthenticated state,
    /// never an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let current = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    tracing::debug!(user = %session.user.username, "restored persisted session");
                    Some(session)
                }
                Err(e) => {
                    tracing::warn!("discarding unreadable session file: {}", e);
                    let _ = std::fs::remove_file(&path);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// In-memory store for tests; nothing touches the filesystem until a
    /// session is written.
    pub fn ephemeral() -> Self {
        let mut path = std::env::temp_dir();
        path.push(format!("agence-session-{}.json", uuid::Uuid::new_v4()));
        Self {
            path,
            current: RwLock::new(None),
        }
    }

    /// Persist a freshly-issued session (single writer: the login flow).
    pub async fn store(&self, session: Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Session(format!("cannot create session dir: {}", e)))?;
        }

        let raw = serde_json::to_string_pretty(&session)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| AppError::Session(format!("cannot write session file: {}", e)))?;

        let mut guard = self.current.write().await;
        *guard = Some(session);
        Ok(())
    }

    /// Drop the session everywhere: memory and disk. Safe to call when no
    /// session exists.
    pub async fn clear(&self) {
        let mut guard = self.current.write().await;
        *guard = None;
        drop(guard);

        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!("failed to remove session file: {}", e);
            }
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn current_user(&self) -> Option<SessionUser> {
        self.current.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Pre-flight check: every authenticated service call goes through here
    /// before anything reaches the network.
    pub async fn require_token(&self) -> Result<String> {
        self.token().await.ok_or(AppError::AuthRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "jwt-abc".to_string(),
            user: SessionUser {
                id: "u-1".to_string(),
                username: "admin".to_string(),
                role: "ADMIN".to_string(),
            },
            issued_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_store_and_reload() {
        let store = SessionStore::ephemeral();
        let path = store.path.clone();
        store.store(sample_session()).await.unwrap();

        // A fresh store pointed at the same file restores the session.
        let reloaded = SessionStore::load(&path);
        assert_eq!(reloaded.token().await.as_deref(), Some("jwt-abc"));
        assert_eq!(reloaded.current_user().await.unwrap().username, "admin");

        store.clear().await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_clear_rejects_before_network() {
        let store = SessionStore::ephemeral();
        store.store(sample_session()).await.unwrap();
        assert!(store.require_token().await.is_ok());

        store.clear().await;
        match store.require_token().await {
            Err(AppError::AuthRequired) => {}
            other => panic!("expected AuthRequired, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_corrupt_file_yields_unauthenticated() {
        let mut path = std::env::temp_dir();
        path.push(format!("agence-session-corrupt-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::load(&path);
        assert!(!store.is_authenticated().await);
        // The corrupt file was removed, not left behind.
        assert!(!path.exists());
    }
}
