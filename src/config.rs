use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Request timeout classes, mirroring the gateway's interactive defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutClass {
    Interactive,
    Upload,
    Download,
    LongRunning,
}

impl TimeoutClass {
    pub fn duration(&self) -> Duration {
        match self {
            TimeoutClass::Interactive => Duration::from_secs(10),
            TimeoutClass::Upload => Duration::from_secs(30),
            TimeoutClass::Download => Duration::from_secs(60),
            TimeoutClass::LongRunning => Duration::from_secs(120),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the agence backend, e.g. `http://localhost:8092`.
    pub agence_service_url: String,
    /// Where the session token and current user are persisted between runs.
    pub session_file: PathBuf,
    /// Interactive timeout, overridable via REQUEST_TIMEOUT_SECS.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let agence_service_url = env::var("AGENCE_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8092".to_string());
        let agence_service_url = agence_service_url.trim_end_matches('/').to_string();

        let session_file = match env::var("SESSION_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let mut base = env::var("HOME").map(PathBuf::from).unwrap_or_default();
                base.push(".agence-console");
                base.push("session.json");
                base
            }
        };

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse()?),
            Err(_) => TimeoutClass::Interactive.duration(),
        };

        Ok(Config {
            agence_service_url,
            session_file,
            request_timeout,
        })
    }
}

/// Canonical endpoint table. There is exactly one of these; every service
/// builds its paths here so URL construction never drifts between callers.
pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/api/v1/agence/auth/login";
    pub const AUTH_LOGOUT: &str = "/api/v1/agence/auth/logout";

    pub const DOCUMENTS_PENDING: &str = "/api/v1/agence/admin/documents/pending";
    pub const DOCUMENTS_STATISTICS: &str = "/api/v1/agence/admin/documents/statistics";
    pub const DOCUMENTS_BULK_APPROVE: &str = "/api/v1/agence/admin/documents/bulk-approve";
    pub const DOCUMENTS_BULK_REJECT: &str = "/api/v1/agence/admin/documents/bulk-reject";

    pub fn document_review(document_id: &str) -> String {
        format!("/api/v1/agence/admin/documents/{}/review", document_id)
    }

    pub fn document_approve(document_id: &str) -> String {
        format!("/api/v1/agence/admin/documents/{}/approve", document_id)
    }

    pub fn document_reject(document_id: &str) -> String {
        format!("/api/v1/agence/admin/documents/{}/reject", document_id)
    }

    pub const AGENCES_LIST: &str = "/api/v1/agence/getAgences";
    pub const AGENCES_CREATE: &str = "/api/v1/agence/add";

    pub fn agence(agence_id: &str) -> String {
        format!("/api/v1/agence/admin/agencies/{}", agence_id)
    }

    pub const COMPTES: &str = "/api/v1/comptes";

    pub fn compte(compte_id: &str) -> String {
        format!("/api/v1/comptes/{}", compte_id)
    }

    pub fn compte_block(compte_id: &str) -> String {
        format!("/api/v1/comptes/{}/block", compte_id)
    }

    pub fn compte_unblock(compte_id: &str) -> String {
        format!("/api/v1/comptes/{}/unblock", compte_id)
    }

    pub fn compte_close(compte_id: &str) -> String {
        format!("/api/v1/comptes/{}/close", compte_id)
    }

    pub const CARTES_CREATE: &str = "/api/v1/cartes/create";
}
