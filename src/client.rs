use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{Config, TimeoutClass};
use crate::error::{AppError, Result};
use crate::session::SessionStore;

/// Uniform success envelope: HTTP status plus the payload with the server's
/// own `{success, data, error}` wrapper already peeled off.
#[derive(Debug, Clone)]
pub struct ApiEnvelope {
    pub status: u16,
    pub data: Value,
}

impl ApiEnvelope {
    /// Deserialize the payload into a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.data).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

/// Single HTTP client for the whole console. Injects the bearer token from
/// the session store, bounds every call with a timeout, normalizes transport
/// failures, and clears the session on 401.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    /// Budget for interactive-class calls, from the config. The heavier
    /// classes keep their fixed budgets.
    interactive_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.agence_service_url.clone(),
            session,
            interactive_timeout: config.request_timeout,
        })
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiEnvelope> {
        self.request(Method::GET, path, query, None, TimeoutClass::Interactive).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<ApiEnvelope> {
        self.request(Method::POST, path, &[], Some(body), TimeoutClass::Interactive).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<ApiEnvelope> {
        self.request(Method::PUT, path, &[], Some(body), TimeoutClass::Interactive).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiEnvelope> {
        self.request(Method::DELETE, path, &[], None, TimeoutClass::Interactive).await
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        timeout: TimeoutClass
    ) -> Result<ApiEnvelope> {
        let mut url = format!("{}{}", self.base_url, path);
        let query_string = build_query(query);
        if !query_string.is_empty() {
            url.push('?');
            url.push_str(&query_string);
        }

        tracing::debug!("{} {}", method, url);

        let budget = match timeout {
            TimeoutClass::Interactive => self.interactive_timeout,
            other => other.duration(),
        };
        let mut builder = self.http
            .request(method.clone(), &url)
            .timeout(budget)
            .header("Accept", "application/json");

        // Anonymous calls simply omit the header; the server answers 401.
        if let Some(token) = self.session.token().await {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::warn!("{} {} - timeout", method, url);
                AppError::Timeout
            } else {
                tracing::warn!("{} {} - Network Error: {}", method, url, e);
                AppError::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // An expired or revoked token invalidates the whole session.
            tracing::warn!("{} {} - 401, clearing session", method, url);
            self.session.clear().await;
            return Err(AppError::AuthRequired);
        }

        let is_json = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let raw = response.text().await.map_err(|e| AppError::Network(e.to_string()))?;
        let parsed: Value = if is_json {
            serde_json::from_str(&raw).map_err(|e| AppError::Serialization(e.to_string()))?
        } else {
            Value::String(raw)
        };

        if !status.is_success() {
            let message = server_message(&parsed).unwrap_or_else(|| {
                format!("HTTP {}: {}", status.as_u16(), status.canonical_reason().unwrap_or("Unknown"))
            });
            tracing::warn!("{} {} - Error: {}", method, url, message);
            return Err(AppError::Http {
                status: status.as_u16(),
                message,
            });
        }

        // Peel the backend's {success, data, error} wrapper when present.
        let data = match &parsed {
            Value::Object(obj) if obj.contains_key("success") => {
                let success = obj.get("success").and_then(Value::as_bool).unwrap_or(false);
                if !success {
                    let message = server_message(&parsed)
                        .unwrap_or_else(|| "Une erreur inconnue s'est produite".to_string());
                    tracing::warn!("{} {} - Error: {}", method, url, message);
                    return Err(AppError::Http {
                        status: status.as_u16(),
                        message,
                    });
                }
                obj.get("data").cloned().unwrap_or(Value::Null)
            }
            other => other.clone(),
        };

        tracing::debug!("{} {} - Success ({})", method, url, status.as_u16());
        Ok(ApiEnvelope {
            status: status.as_u16(),
            data,
        })
    }
}

/// Serialize query parameters in insertion order, URL-encoding both sides.
fn build_query(query: &[(&str, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Server-supplied error message, wherever the backend put it.
fn server_message(body: &Value) -> Option<String> {
    match body {
        Value::Object(obj) => obj
            .get("message")
            .or_else(|| obj.get("error"))
            .and_then(Value::as_str)
            .map(|s| s.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use crate::session::{Session, SessionUser};

    fn client_with(base_url: String, timeout: Duration, session: Arc<SessionStore>) -> ApiClient {
        let config = Config {
            agence_service_url: base_url,
            session_file: std::env::temp_dir().join("unused-session.json"),
            request_timeout: timeout,
        };
        ApiClient::new(&config, session).unwrap()
    }

    /// One-shot server answering every connection with a fixed byte string.
    async fn canned_server(response: &'static [u8]) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response).await;
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_stalled_response_surfaces_as_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                // Hold the connection open without ever answering.
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        });

        let session = Arc::new(SessionStore::ephemeral());
        let client = client_with(
            format!("http://{}", addr),
            Duration::from_millis(200),
            session,
        );
        match client.get("/api/v1/agence/getAgences", &[]).await {
            Err(AppError::Timeout) => {}
            other => panic!("expected Timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_401_clears_session_before_returning() {
        let base_url =
            canned_server(b"HTTP/1.1 401 Unauthorized\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await;

        let session = Arc::new(SessionStore::ephemeral());
        session
            .store(Session {
                token: "stale-jwt".to_string(),
                user: SessionUser {
                    id: "u-1".to_string(),
                    username: "admin".to_string(),
                    role: "ADMIN".to_string(),
                },
                issued_at: Utc::now(),
            })
            .await
            .unwrap();

        let client = client_with(base_url, Duration::from_secs(2), session.clone());
        match client.get("/api/v1/comptes", &[]).await {
            Err(AppError::AuthRequired) => {}
            other => panic!("expected AuthRequired, got {:?}", other),
        }
        // The stale token is gone before the caller ever sees the error.
        assert!(!session.is_authenticated().await);
    }

    #[test]
    fn test_query_preserves_insertion_order() {
        let q = build_query(&[
            ("page", "0".to_string()),
            ("size", "20".to_string()),
            ("sortBy", "submittedAt".to_string()),
            ("sortDirection", "desc".to_string()),
        ]);
        assert_eq!(q, "page=0&size=20&sortBy=submittedAt&sortDirection=desc");
    }

    #[test]
    fn test_query_url_encodes_values() {
        let q = build_query(&[("search", "Jean Dupont & fils".to_string())]);
        assert_eq!(q, "search=Jean%20Dupont%20%26%20fils");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn test_server_message_extraction() {
        assert_eq!(
            server_message(&json!({"message": "Document introuvable"})),
            Some("Document introuvable".to_string())
        );
        assert_eq!(
            server_message(&json!({"error": "Forbidden"})),
            Some("Forbidden".to_string())
        );
        assert_eq!(server_message(&json!({"data": 1})), None);
        assert_eq!(server_message(&Value::String(" ".to_string())), None);
    }

    #[test]
    fn test_envelope_decode() {
        let envelope = ApiEnvelope {
            status: 200,
            data: json!({"id": "d-1", "cni": "123"}),
        };
        #[derive(serde::Deserialize)]
        struct Doc {
            id: String,
        }
        let doc: Doc = envelope.decode().unwrap();
        assert_eq!(doc.id, "d-1");
    }
}
