use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::{AppError, Result};
use crate::models::{Agence, AgenceRequest};
use crate::session::SessionStore;

pub struct AgenceService {
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AgenceService {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    pub async fn list(&self) -> Result<Vec<Agence>> {
        self.session.require_token().await?;
        self.client.get(endpoints::AGENCES_LIST, &[]).await?.decode()
    }

    pub async fn details(&self, agence_id: &str) -> Result<Agence> {
        self.session.require_token().await?;
        self.client.get(&endpoints::agence(agence_id), &[]).await?.decode()
    }

    pub async fn create(&self, request: &AgenceRequest) -> Result<()> {
        self.session.require_token().await?;
        validate(request)?;

        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.post(endpoints::AGENCES_CREATE, body).await?;
        tracing::info!(code = %request.code_agence, "agence created");
        Ok(())
    }

    pub async fn update(&self, agence_id: &str, request: &AgenceRequest) -> Result<()> {
        self.session.require_token().await?;
        validate(request)?;

        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.put(&endpoints::agence(agence_id), body).await?;
        tracing::info!(agence_id, "agence updated");
        Ok(())
    }

    pub async fn delete(&self, agence_id: &str) -> Result<()> {
        self.session.require_token().await?;
        self.client.delete(&endpoints::agence(agence_id)).await?;
        tracing::info!(agence_id, "agence deleted");
        Ok(())
    }
}

/// Shallow payload validation, raised before any network call.
fn validate(request: &AgenceRequest) -> Result<()> {
    if request.code_agence.trim().is_empty()
        || request.nom.trim().is_empty()
        || request.ville.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Le code, le nom et la ville de l'agence sont requis".to_string(),
        ));
    }
    if request.code_agence.len() > 10 {
        return Err(AppError::Validation(
            "Le code agence ne peut pas dépasser 10 caractères".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AgenceRequest {
        AgenceRequest {
            code_agence: "AG001".to_string(),
            nom: "Agence Centre".to_string(),
            adresse: "12 avenue Kennedy".to_string(),
            ville: "Douala".to_string(),
            email: "centre@banque.cm".to_string(),
            telephone: "+237650000000".to_string(),
            capital: 1_000_000.0,
            solde_disponible: 0.0,
            limite_daily_transactions: 50_000_000.0,
            limite_monthly_transactions: 500_000_000.0,
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(validate(&sample_request()).is_ok());
    }

    #[test]
    fn test_validate_requires_code_nom_ville() {
        for field in ["code", "nom", "ville"] {
            let mut request = sample_request();
            match field {
                "code" => request.code_agence = String::new(),
                "nom" => request.nom = "  ".to_string(),
                _ => request.ville = String::new(),
            }
            assert!(validate(&request).is_err(), "missing {} should fail", field);
        }
    }

    #[test]
    fn test_validate_caps_code_length() {
        let mut request = sample_request();
        request.code_agence = "AGENCE_00001".to_string(); // 12 chars
        match validate(&request) {
            Err(AppError::Validation(msg)) => assert!(msg.contains("10")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
