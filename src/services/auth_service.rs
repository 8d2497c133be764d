use std::sync::Arc;

use chrono::Utc;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::{AppError, Result};
use crate::models::{LoginRequest, LoginResponse};
use crate::session::{Session, SessionStore, SessionUser};

pub struct AuthService {
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    /// Authenticate against the backend and persist the issued session.
    /// The session store has exactly one writer: this flow.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Le nom d'utilisateur et le mot de passe sont requis".to_string(),
            ));
        }

        let body = serde_json::to_value(LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        })
        .map_err(|e| AppError::Serialization(e.to_string()))?;

        let response: LoginResponse = self.client
            .post(endpoints::AUTH_LOGIN, body).await?
            .decode()?;

        let user = response.user.clone();
        self.session.store(Session {
            token: response.token,
            user: response.user,
            issued_at: Utc::now(),
        }).await?;

        tracing::info!(user = %user.username, "login successful");
        Ok(user)
    }

    /// Tell the server goodbye on a best-effort basis, then clear the local
    /// session unconditionally. The local clear is the part that matters.
    pub async fn logout(&self) -> Result<()> {
        if self.session.is_authenticated().await {
            if let Err(e) = self.client.post(endpoints::AUTH_LOGOUT, serde_json::json!({})).await {
                tracing::warn!("server-side logout failed: {}", e);
            }
        }
        self.session.clear().await;
        tracing::info!("session cleared");
        Ok(())
    }

    /// App bootstrap: report the restored session, if any. Does not hit the
    /// network; an expired token surfaces as a 401 on the first real call.
    pub async fn bootstrap(&self) -> Option<SessionUser> {
        let user = self.session.current_user().await;
        match &user {
            Some(u) => tracing::info!(user = %u.username, "authenticated session restored"),
            None => tracing::info!("no valid session found"),
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn service_without_server() -> AuthService {
        let session = Arc::new(SessionStore::ephemeral());
        let config = Config {
            agence_service_url: "http://127.0.0.1:9".to_string(),
            session_file: std::env::temp_dir().join("unused-session.json"),
            request_timeout: std::time::Duration::from_secs(1),
        };
        let client = Arc::new(ApiClient::new(&config, session.clone()).unwrap());
        AuthService::new(client, session)
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let service = service_without_server();
        match service.login("", "secret").await {
            Err(AppError::Validation(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
        match service.login("admin", "").await {
            Err(AppError::Validation(_)) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_logout_without_session_is_silent() {
        let service = service_without_server();
        service.logout().await.unwrap();
        assert!(service.bootstrap().await.is_none());
    }
}
