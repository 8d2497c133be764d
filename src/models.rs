use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CarteType, CompteStatus, CompteType, DocumentStatus, SortDirection};
use crate::session::SessionUser;

// ─── Authentication ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

// ─── Documents ───────────────────────────────────────────────────────

/// One row of the pending-documents list. Light on purpose: images and
/// scores only travel with the dedicated review payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDocument {
    pub id: String,
    #[serde(default)]
    pub cni: Option<String>,
    #[serde(default)]
    pub nom_client: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default = "default_document_status")]
    pub status: DocumentStatus,
}

fn default_document_status() -> DocumentStatus {
    DocumentStatus::Pending
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPage {
    #[serde(default)]
    pub content: Vec<PendingDocument>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

/// Full review payload for one document. Fetched fresh per review session
/// and discarded when the detail view closes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReview {
    pub id: String,
    #[serde(default)]
    pub cni: Option<String>,
    #[serde(default = "default_document_status")]
    pub status: DocumentStatus,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,

    // Extracted identity fields
    #[serde(default)]
    pub nom_extrait: Option<String>,
    #[serde(default)]
    pub prenom_extrait: Option<String>,
    #[serde(default)]
    pub date_naissance_extraite: Option<NaiveDate>,
    #[serde(default)]
    pub lieu_naissance_extrait: Option<String>,

    // Opaque server-supplied image payloads; absence is not a failure.
    #[serde(default)]
    pub recto_image_base64: Option<String>,
    #[serde(default)]
    pub verso_image_base64: Option<String>,
    #[serde(default)]
    pub selfie_image_base64: Option<String>,

    // Verification scores in [0, 100]
    #[serde(default)]
    pub quality_score: f64,
    #[serde(default)]
    pub selfie_quality_score: f64,
    #[serde(default)]
    pub selfie_similarity_score: f64,
    #[serde(default)]
    pub liveness_detected: bool,

    #[serde(default)]
    pub anomalies_detectees: Vec<String>,
    #[serde(default)]
    pub selfie_anomalies: Vec<String>,
    #[serde(default)]
    pub facial_verification_recommendation: Option<String>,
}

/// Filters and paging for the pending list. Fixed default sort: submission
/// time, newest first.
#[derive(Debug, Clone)]
pub struct PendingQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub search: Option<String>,
    pub status: Option<DocumentStatus>,
    pub document_type: Option<String>,
    pub priority: Option<String>,
}

impl Default for PendingQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort_by: "submittedAt".to_string(),
            sort_direction: SortDirection::Desc,
            search: None,
            status: Some(DocumentStatus::Pending),
            document_type: None,
            priority: None,
        }
    }
}

impl PendingQuery {
    /// Query parameters in the order the backend documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDirection", self.sort_direction.to_string()),
        ];
        if let Some(search) = &self.search {
            if !search.is_empty() {
                params.push(("search", search.clone()));
            }
        }
        if let Some(status) = &self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(doc_type) = &self.document_type {
            params.push(("type", doc_type.clone()));
        }
        if let Some(priority) = &self.priority {
            params.push(("priority", priority.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub comment: String,
    pub conditions: Vec<String>,
    pub approved_at: DateTime<Utc>,
}

impl ApprovalRequest {
    /// Comment is optional at the UI level; the wire always carries one.
    pub fn new(comment: Option<String>, conditions: Vec<String>) -> Self {
        Self {
            comment: comment
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "Document approuvé".to_string()),
            conditions,
            approved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionRequest {
    pub reason: String,
    pub comment: String,
    pub rejected_at: DateTime<Utc>,
}

impl RejectionRequest {
    pub fn new(reason: String, comment: Option<String>) -> Self {
        Self {
            reason,
            comment: comment.unwrap_or_default(),
            rejected_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStatistics {
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default)]
    pub approved_count: u64,
    #[serde(default)]
    pub rejected_count: u64,
    #[serde(default)]
    pub average_processing_hours: f64,
}

// ─── Agences ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agence {
    pub id_agence: String,
    pub code_agence: String,
    pub nom: String,
    #[serde(default)]
    pub adresse: Option<String>,
    pub ville: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub capital: f64,
    #[serde(default)]
    pub solde_disponible: f64,
    #[serde(default)]
    pub limite_daily_transactions: f64,
    #[serde(default)]
    pub limite_monthly_transactions: f64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Create/update payload for an agency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgenceRequest {
    pub code_agence: String,
    pub nom: String,
    pub adresse: String,
    pub ville: String,
    pub email: String,
    pub telephone: String,
    pub capital: f64,
    pub solde_disponible: f64,
    pub limite_daily_transactions: f64,
    pub limite_monthly_transactions: f64,
}

// ─── Comptes ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compte {
    pub id: String,
    pub numero_compte: u64,
    pub id_client: String,
    pub id_agence: String,
    #[serde(default)]
    pub solde: f64,
    #[serde(rename = "type")]
    pub compte_type: CompteType,
    pub status: CompteStatus,
    /// Orthogonal to `status`: a blocked account keeps its nominal status
    /// but renders as blocked.
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub limite_daily_withdrawal: f64,
    #[serde(default)]
    pub limite_daily_transfer: f64,
    #[serde(default)]
    pub limite_monthly_operations: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub blocked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_transaction_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub daily_transaction_count: u64,
}

impl Compte {
    /// Display state: the blocked flag overrides the nominal status badge.
    pub fn effective_status(&self) -> CompteStatus {
        if self.blocked {
            CompteStatus::Blocked
        } else {
            self.status
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompteRequest {
    pub numero_compte: u64,
    pub id_client: String,
    pub id_agence: String,
    pub solde: f64,
    #[serde(rename = "type")]
    pub compte_type: CompteType,
    pub status: CompteStatus,
    pub limite_daily_withdrawal: f64,
    pub limite_daily_transfer: f64,
    pub limite_monthly_operations: f64,
}

/// Filters for the compte list; everything optional, flags omitted when
/// set to "ALL" at the console level.
#[derive(Debug, Clone, Default)]
pub struct CompteQuery {
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
    pub status: Option<CompteStatus>,
    pub compte_type: Option<CompteType>,
}

impl CompteQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", if self.size == 0 { "50".to_string() } else { self.size.to_string() }),
        ];
        if let Some(status) = &self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(compte_type) = &self.compte_type {
            params.push(("type", compte_type.to_string()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                params.push(("search", search.clone()));
            }
        }
        params
    }
}

// ─── Cartes ──────────────────────────────────────────────────────────

/// Card creation payload. Write-only: cards are never listed or fetched
/// back through this console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarteRequest {
    pub compte_id: String,
    #[serde(rename = "type")]
    pub carte_type: CarteType,
    pub nom_porteur: String,
    pub code_pin: String,
    pub limite_daily_purchase: f64,
    pub limite_daily_withdrawal: f64,
    pub limite_monthly: f64,
    pub contactless: bool,
    pub international_payments: bool,
    pub online_payments: bool,
}
