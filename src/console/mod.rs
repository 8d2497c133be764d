pub mod agences;
pub mod comptes;
pub mod documents;

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::{AgenceService, AuthService, CompteService, DocumentService};
use crate::session::SessionStore;
use crate::workflow::ReviewWorkflow;

/// Shared state for all console handlers. Built once at startup and
/// cloned by Arc into whichever command runs.
pub struct ConsoleState {
    pub session: Arc<SessionStore>,
    pub auth: AuthService,
    pub documents: Arc<DocumentService>,
    pub workflow: ReviewWorkflow<DocumentService>,
    pub agences: AgenceService,
    pub comptes: CompteService,
}

impl ConsoleState {
    pub fn new(config: &Config) -> Result<Self> {
        let session = Arc::new(SessionStore::load(&config.session_file));
        let client = Arc::new(ApiClient::new(config, session.clone())?);

        let documents = Arc::new(DocumentService::new(client.clone(), session.clone()));

        Ok(Self {
            auth: AuthService::new(client.clone(), session.clone()),
            workflow: ReviewWorkflow::new(documents.clone()),
            documents,
            agences: AgenceService::new(client.clone(), session.clone()),
            comptes: CompteService::new(client, session.clone()),
            session,
        })
    }
}
