use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::{ApprovalRequest, DocumentReview, PendingDocument, PendingQuery, RejectionRequest};
use crate::services::DocumentApi;

/// Where a review session currently stands.
///
/// `Listing -> DetailLoading -> DetailReady -> ActionInFlight`, then back to
/// a refreshed `Listing` on success or to `DetailReady` with an inline error
/// on failure.
#[derive(Debug, Clone)]
pub enum ReviewStage {
    Listing,
    DetailLoading {
        document_id: String,
    },
    DetailReady {
        review: DocumentReview,
        error: Option<String>,
    },
    ActionInFlight {
        document_id: String,
    },
}

/// Outcome of an approve/reject attempt. `Ignored` means a decision was
/// already in flight for the selected document and this attempt was dropped
/// without touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
    Ignored,
}

struct WorkflowState {
    query: PendingQuery,
    documents: Vec<PendingDocument>,
    stage: ReviewStage,
}

/// Orchestrates one operator's document-review session: list, inspect,
/// decide, refresh. The server stays authoritative: a successful decision
/// never patches the local list, it re-fetches it.
pub struct ReviewWorkflow<A: DocumentApi> {
    api: Arc<A>,
    state: Mutex<WorkflowState>,
}

impl<A: DocumentApi> ReviewWorkflow<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_query(api, PendingQuery::default())
    }

    pub fn with_query(api: Arc<A>, query: PendingQuery) -> Self {
        Self {
            api,
            state: Mutex::new(WorkflowState {
                query,
                documents: Vec::new(),
                stage: ReviewStage::Listing,
            }),
        }
    }

    pub async fn stage(&self) -> ReviewStage {
        self.state.lock().await.stage.clone()
    }

    pub async fn documents(&self) -> Vec<PendingDocument> {
        self.state.lock().await.documents.clone()
    }

    pub async fn set_query(&self, query: PendingQuery) {
        self.state.lock().await.query = query;
    }

    /// Fetch the current page. An empty result is a valid display state.
    pub async fn refresh(&self) -> Result<usize> {
        let query = self.state.lock().await.query.clone();
        let page = self.api.pending(&query).await?;

        let mut state = self.state.lock().await;
        state.documents = page.content;
        state.stage = ReviewStage::Listing;
        Ok(state.documents.len())
    }

    /// Open the detail view for one document. The heavy review payload is a
    /// dedicated fetch, never part of the list response.
    pub async fn select(&self, document_id: &str) -> Result<DocumentReview> {
        {
            let mut state = self.state.lock().await;
            if matches!(state.stage, ReviewStage::ActionInFlight { .. }) {
                return Err(AppError::Validation("Une décision est déjà en cours".to_string()));
            }
            state.stage = ReviewStage::DetailLoading {
                document_id: document_id.to_string(),
            };
        }

        match self.api.review(document_id).await {
            Ok(review) => {
                let mut state = self.state.lock().await;
                // The operator may have closed the view while the fetch was
                // running; in that case the result is simply discarded.
                if let ReviewStage::DetailLoading { document_id: pending } = &state.stage {
                    if pending == document_id {
                        state.stage = ReviewStage::DetailReady {
                            review: review.clone(),
                            error: None,
                        };
                    }
                }
                Ok(review)
            }
            Err(e) => {
                let mut state = self.state.lock().await;
                if let ReviewStage::DetailLoading { document_id: pending } = &state.stage {
                    if pending == document_id {
                        state.stage = ReviewStage::Listing;
                    }
                }
                Err(e)
            }
        }
    }

    pub async fn approve(&self, comment: Option<String>) -> Result<Decision> {
        let request = ApprovalRequest::new(comment, Vec::new());
        self.decide(Decision::Approved, move |api: Arc<A>, id: String| async move {
            api.approve(&id, &request).await
        }).await
    }

    pub async fn reject(&self, reason: &str, comment: Option<String>) -> Result<Decision> {
        // Fail fast before the lock is even taken: an empty reason never
        // produces a network call.
        if reason.trim().is_empty() {
            return Err(AppError::Validation("Rejection reason is required".to_string()));
        }

        let request = RejectionRequest::new(reason.to_string(), comment);
        self.decide(Decision::Rejected, move |api: Arc<A>, id: String| async move {
            api.reject(&id, &request).await
        }).await
    }

    /// Close the detail view. Any in-flight fetch or decision keeps running
    /// at the transport level; only its effect on this state is discarded.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.stage = ReviewStage::Listing;
    }

    async fn decide<F, Fut>(&self, kind: Decision, call: F) -> Result<Decision>
    where
        F: FnOnce(Arc<A>, String) -> Fut,
        Fut: std::future::Future<Output = Result<()>>,
    {
        // Take the lock synchronously: at most one decision per document can
        // ever be outstanding.
        let (document_id, review) = {
            let mut state = self.state.lock().await;
            match std::mem::replace(&mut state.stage, ReviewStage::Listing) {
                ReviewStage::ActionInFlight { document_id } => {
                    state.stage = ReviewStage::ActionInFlight { document_id };
                    return Ok(Decision::Ignored);
                }
                ReviewStage::DetailReady { review, .. } => {
                    let document_id = review.id.clone();
                    state.stage = ReviewStage::ActionInFlight {
                        document_id: document_id.clone(),
                    };
                    (document_id, review)
                }
                other => {
                    state.stage = other;
                    return Err(AppError::Validation("Aucun document sélectionné".to_string()));
                }
            }
        };

        match call(self.api.clone(), document_id.clone()).await {
            Ok(()) => {
                let closed_meanwhile = {
                    let mut state = self.state.lock().await;
                    match &state.stage {
                        ReviewStage::ActionInFlight { document_id: pending }
                            if *pending == document_id =>
                        {
                            state.stage = ReviewStage::Listing;
                            false
                        }
                        // close() landed during the call; leave the state
                        // alone and skip the refresh.
                        _ => true,
                    }
                };

                if !closed_meanwhile {
                    // The server recorded the decision; a failed list
                    // re-fetch must not make it look undone. The stale list
                    // stands until the next refresh.
                    if let Err(e) = self.refresh().await {
                        tracing::warn!(
                            document_id = %document_id,
                            "list refresh after decision failed: {}",
                            e
                        );
                    }
                }
                tracing::info!(document_id = %document_id, decision = ?kind, "decision applied");
                Ok(kind)
            }
            Err(e) => {
                // Lock released, detail retained: the operator can retry
                // without re-fetching, with the error shown inline.
                let mut state = self.state.lock().await;
                if let ReviewStage::ActionInFlight { document_id: pending } = &state.stage {
                    if *pending == document_id {
                        state.stage = ReviewStage::DetailReady {
                            review,
                            error: Some(e.user_message()),
                        };
                    }
                }
                tracing::warn!(document_id = %document_id, "decision failed: {}", e);
                Err(e)
            }
        }
    }
}
