use crate::enums::{CompteStatus, CompteType};
use crate::models::{Agence, Compte};

/// Free-text match over the loaded agency page. The list endpoint has no
/// server-side search, so narrowing always happens here.
pub fn filter_agences<'a>(agences: &'a [Agence], text: &str) -> Vec<&'a Agence> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return agences.iter().collect();
    }
    agences
        .iter()
        .filter(|a| {
            a.code_agence.to_lowercase().contains(&needle)
                || a.nom.to_lowercase().contains(&needle)
                || a.ville.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Narrows the loaded compte page. Status is matched against the effective
/// display state, so filtering on BLOCKED finds flagged accounts whatever
/// their nominal status.
pub fn filter_comptes<'a>(
    comptes: &'a [Compte],
    text: Option<&str>,
    status: Option<CompteStatus>,
    compte_type: Option<CompteType>,
) -> Vec<&'a Compte> {
    let needle = text.map(|t| t.trim().to_lowercase()).unwrap_or_default();
    comptes
        .iter()
        .filter(|c| {
            if let Some(status) = status {
                if c.effective_status() != status {
                    return false;
                }
            }
            if let Some(compte_type) = compte_type {
                if c.compte_type != compte_type {
                    return false;
                }
            }
            needle.is_empty()
                || c.id_client.to_lowercase().contains(&needle)
                || c.numero_compte.to_string().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comptes() -> Vec<Compte> {
        [
            json!({
                "id": "c-1",
                "numeroCompte": 1111222233u64,
                "idClient": "CLIENT_ALPHA",
                "idAgence": "AGENCE_001",
                "type": "STANDARD",
                "status": "ACTIVE"
            }),
            json!({
                "id": "c-2",
                "numeroCompte": 4444555566u64,
                "idClient": "CLIENT_BETA",
                "idAgence": "AGENCE_001",
                "type": "PREMIUM",
                "status": "ACTIVE",
                "blocked": true
            }),
            json!({
                "id": "c-3",
                "numeroCompte": 7777888899u64,
                "idClient": "CLIENT_GAMMA",
                "idAgence": "AGENCE_002",
                "type": "STANDARD",
                "status": "PENDING"
            }),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect()
    }

    #[test]
    fn test_blocked_filter_uses_effective_status() {
        let page = comptes();
        let blocked = filter_comptes(&page, None, Some(CompteStatus::Blocked), None);
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].id, "c-2");

        // The flagged account is excluded from ACTIVE even though its
        // nominal status says otherwise.
        let active = filter_comptes(&page, None, Some(CompteStatus::Active), None);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "c-1");
    }

    #[test]
    fn test_text_filter_matches_client_and_numero() {
        let page = comptes();
        let by_client = filter_comptes(&page, Some("gamma"), None, None);
        assert_eq!(by_client.len(), 1);
        assert_eq!(by_client[0].id, "c-3");

        let by_numero = filter_comptes(&page, Some("4444"), None, None);
        assert_eq!(by_numero.len(), 1);
        assert_eq!(by_numero[0].id, "c-2");

        assert_eq!(filter_comptes(&page, Some("  "), None, None).len(), 3);
    }

    #[test]
    fn test_combined_filters() {
        let page = comptes();
        let result = filter_comptes(&page, Some("client"), None, Some(CompteType::Standard));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_agence_text_filter() {
        let agences: Vec<Agence> = [
            json!({"idAgence": "a-1", "codeAgence": "AG001", "nom": "Agence Centre", "ville": "Douala"}),
            json!({"idAgence": "a-2", "codeAgence": "AG002", "nom": "Agence Nord", "ville": "Yaoundé"}),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();

        let hits = filter_agences(&agences, "yaou");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code_agence, "AG002");
        assert_eq!(filter_agences(&agences, "").len(), 2);
    }
}
