use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::error::{AppError, Result};
use crate::models::{CarteRequest, Compte, CompteQuery, CompteRequest};
use crate::session::SessionStore;

pub struct CompteService {
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl CompteService {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    pub async fn list(&self, query: &CompteQuery) -> Result<Vec<Compte>> {
        self.session.require_token().await?;
        let params = query.to_params();
        let envelope = self.client.get(endpoints::COMPTES, &params).await?;

        // The backend pages this endpoint; older deployments return a bare
        // array. Accept both.
        match envelope.data.get("content") {
            Some(content) => serde_json::from_value(content.clone())
                .map_err(|e| AppError::Serialization(e.to_string())),
            None => envelope.decode(),
        }
    }

    pub async fn details(&self, compte_id: &str) -> Result<Compte> {
        self.session.require_token().await?;
        self.client.get(&endpoints::compte(compte_id), &[]).await?.decode()
    }

    pub async fn create(&self, request: &CompteRequest) -> Result<()> {
        self.session.require_token().await?;
        validate(request)?;

        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.post(endpoints::COMPTES, body).await?;
        tracing::info!(numero = request.numero_compte, "compte created");
        Ok(())
    }

    pub async fn update(&self, compte_id: &str, request: &CompteRequest) -> Result<()> {
        self.session.require_token().await?;
        validate(request)?;

        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.put(&endpoints::compte(compte_id), body).await?;
        tracing::info!(compte_id, "compte updated");
        Ok(())
    }

    pub async fn block(&self, compte_id: &str, reason: Option<&str>) -> Result<()> {
        self.session.require_token().await?;
        let body = serde_json::json!({
            "reason": reason.unwrap_or("Bloqué par l'administrateur"),
        });
        self.client.put(&endpoints::compte_block(compte_id), body).await?;
        tracing::info!(compte_id, "compte blocked");
        Ok(())
    }

    pub async fn unblock(&self, compte_id: &str) -> Result<()> {
        self.session.require_token().await?;
        self.client.put(&endpoints::compte_unblock(compte_id), serde_json::json!({})).await?;
        tracing::info!(compte_id, "compte unblocked");
        Ok(())
    }

    /// The console's "delete". Server-side this is a status transition to
    /// CLOSED, not a record removal; the client only renders the result.
    pub async fn close(&self, compte_id: &str) -> Result<()> {
        self.session.require_token().await?;
        self.client.put(&endpoints::compte_close(compte_id), serde_json::json!({})).await?;
        tracing::info!(compte_id, "compte closed");
        Ok(())
    }

    pub async fn create_carte(&self, request: &CarteRequest) -> Result<()> {
        self.session.require_token().await?;
        validate_carte(request)?;

        let body = serde_json::to_value(request)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.client.post(endpoints::CARTES_CREATE, body).await?;
        tracing::info!(compte_id = %request.compte_id, "carte created");
        Ok(())
    }
}

fn validate(request: &CompteRequest) -> Result<()> {
    if request.numero_compte == 0 {
        return Err(AppError::Validation("Le numéro de compte est requis".to_string()));
    }
    if request.id_client.trim().is_empty() || request.id_agence.trim().is_empty() {
        return Err(AppError::Validation(
            "L'identifiant client et l'identifiant agence sont requis".to_string(),
        ));
    }
    Ok(())
}

fn validate_carte(request: &CarteRequest) -> Result<()> {
    if request.nom_porteur.trim().is_empty() {
        return Err(AppError::Validation("Le nom du porteur est requis".to_string()));
    }
    if request.code_pin.len() != 4 || !request.code_pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Le code PIN doit contenir exactement 4 chiffres".to_string(),
        ));
    }
    if request.compte_id.trim().is_empty() {
        return Err(AppError::Validation("Le compte associé est requis".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{CarteType, CompteStatus, CompteType};

    fn sample_compte_request() -> CompteRequest {
        CompteRequest {
            numero_compte: 1234567890,
            id_client: "CLIENT_001".to_string(),
            id_agence: "AGENCE_001".to_string(),
            solde: 0.0,
            compte_type: CompteType::Standard,
            status: CompteStatus::Pending,
            limite_daily_withdrawal: 1_000_000.0,
            limite_daily_transfer: 2_000_000.0,
            limite_monthly_operations: 10_000_000.0,
        }
    }

    fn sample_carte_request() -> CarteRequest {
        CarteRequest {
            compte_id: "c-1".to_string(),
            carte_type: CarteType::Standard,
            nom_porteur: "JEAN DUPONT".to_string(),
            code_pin: "0912".to_string(),
            limite_daily_purchase: 500_000.0,
            limite_daily_withdrawal: 200_000.0,
            limite_monthly: 2_000_000.0,
            contactless: true,
            international_payments: false,
            online_payments: true,
        }
    }

    #[test]
    fn test_compte_validation() {
        assert!(validate(&sample_compte_request()).is_ok());

        let mut request = sample_compte_request();
        request.numero_compte = 0;
        assert!(validate(&request).is_err());

        let mut request = sample_compte_request();
        request.id_client = String::new();
        assert!(validate(&request).is_err());
    }

    #[test]
    fn test_carte_pin_must_be_four_digits() {
        assert!(validate_carte(&sample_carte_request()).is_ok());

        for bad_pin in ["123", "12345", "12a4", "    ", "１２３４"] {
            let mut request = sample_carte_request();
            request.code_pin = bad_pin.to_string();
            assert!(validate_carte(&request).is_err(), "pin {:?} should fail", bad_pin);
        }
    }

    #[test]
    fn test_carte_requires_porteur() {
        let mut request = sample_carte_request();
        request.nom_porteur = " ".to_string();
        assert!(validate_carte(&request).is_err());
    }
}
