use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::{AppError, Result};
use crate::models::{
    ApprovalRequest, DocumentReview, DocumentStatistics, PendingPage, PendingQuery,
    RejectionRequest,
};
use crate::session::SessionStore;

/// Seam between the review workflow and the backend. The workflow only
/// depends on this trait, so its state machine is testable against a
/// scripted fake.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    async fn pending(&self, query: &PendingQuery) -> Result<PendingPage>;
    async fn review(&self, document_id: &str) -> Result<DocumentReview>;
    async fn approve(&self, document_id: &str, request: &ApprovalRequest) -> Result<()>;
    async fn reject(&self, document_id: &str, request: &RejectionRequest) -> Result<()>;
}

pub struct DocumentService {
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl DocumentService {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    /// Approval statistics over a period (daily, weekly, monthly).
    pub async fn statistics(
        &self,
        period: &str,
        start_date: Option<&str>,
        end_date: Option<&str>
    ) -> Result<DocumentStatistics> {
        self.session.require_token().await?;

        let mut params = vec![("period", period.to_string())];
        if let Some(start) = start_date {
            params.push(("startDate", start.to_string()));
        }
        if let Some(end) = end_date {
            params.push(("endDate", end.to_string()));
        }

        self.client.get(endpoints::DOCUMENTS_STATISTICS, &params).await?.decode()
    }

    /// Approve a batch in one call. An empty id list never leaves the
    /// process.
    pub async fn bulk_approve(&self, document_ids: &[String], comment: Option<&str>) -> Result<()> {
        self.session.require_token().await?;
        if document_ids.is_empty() {
            return Err(AppError::Validation(
                "Document IDs are required for bulk approval".to_string(),
            ));
        }

        let body = serde_json::json!({
            "documentIds": document_ids,
            "comment": comment.unwrap_or("Approbation en lot"),
            "approvedAt": chrono::Utc::now(),
        });
        self.client.post(endpoints::DOCUMENTS_BULK_APPROVE, body).await?;
        tracing::info!(count = document_ids.len(), "bulk approval completed");
        Ok(())
    }

    pub async fn bulk_reject(
        &self,
        document_ids: &[String],
        reason: &str,
        comment: Option<&str>
    ) -> Result<()> {
        self.session.require_token().await?;
        if document_ids.is_empty() {
            return Err(AppError::Validation(
                "Document IDs are required for bulk rejection".to_string(),
            ));
        }
        if reason.trim().is_empty() {
            return Err(AppError::Validation(
                "Rejection reason is required for bulk rejection".to_string(),
            ));
        }

        let body = serde_json::json!({
            "documentIds": document_ids,
            "reason": reason,
            "comment": comment.unwrap_or(""),
            "rejectedAt": chrono::Utc::now(),
        });
        self.client.post(endpoints::DOCUMENTS_BULK_REJECT, body).await?;
        tracing::info!(count = document_ids.len(), "bulk rejection completed");
        Ok(())
    }
}

#[async_trait]
impl DocumentApi for DocumentService {
    /// Filtered, sorted page of pending documents. An empty page is a valid
    /// result, not an error.
    async fn pending(&self, query: &PendingQuery) -> Result<PendingPage> {
        self.session.require_token().await?;
        let params = query.to_params();
        self.client.get(endpoints::DOCUMENTS_PENDING, &params).await?.decode()
    }

    /// The heavy per-document payload: images, scores, extracted fields.
    /// Deliberately a separate call from the list.
    async fn review(&self, document_id: &str) -> Result<DocumentReview> {
        self.session.require_token().await?;
        self.client.get(&endpoints::document_review(document_id), &[]).await?.decode()
    }

    async fn approve(&self, document_id: &str, request: &ApprovalRequest) -> Result<()> {
        self.session.require_token().await?;
        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.post(&endpoints::document_approve(document_id), body).await?;
        tracing::info!(document_id, "document approved");
        Ok(())
    }

    async fn reject(&self, document_id: &str, request: &RejectionRequest) -> Result<()> {
        self.session.require_token().await?;
        // Fail fast: a rejection without a reason never reaches the network.
        if request.reason.trim().is_empty() {
            return Err(AppError::Validation("Rejection reason is required".to_string()));
        }
        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.post(&endpoints::document_reject(document_id), body).await?;
        tracing::info!(document_id, "document rejected");
        Ok(())
    }
}
