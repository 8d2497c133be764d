use crate::enums::CompteStatus;
use crate::models::{Agence, Compte};

/// Aggregates over the comptes currently loaded in the view. These are
/// page-scoped by construction: they summarize the rows on screen, not the
/// whole book of accounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompteStatistics {
    pub total_comptes: usize,
    pub active_comptes: usize,
    pub pending_comptes: usize,
    pub blocked_comptes: usize,
    pub total_solde: f64,
    pub average_solde: f64,
}

impl CompteStatistics {
    /// Active and pending are counted from the nominal status; blocked is
    /// counted from the orthogonal flag. The same account can therefore
    /// appear in both the active and blocked tallies.
    pub fn from_page(comptes: &[Compte]) -> Self {
        let total_comptes = comptes.len();
        let active_comptes = comptes
            .iter()
            .filter(|c| c.status == CompteStatus::Active)
            .count();
        let pending_comptes = comptes
            .iter()
            .filter(|c| c.status == CompteStatus::Pending)
            .count();
        let blocked_comptes = comptes.iter().filter(|c| c.blocked).count();
        let total_solde: f64 = comptes.iter().map(|c| c.solde).sum();
        let average_solde = if total_comptes == 0 {
            0.0
        } else {
            total_solde / total_comptes as f64
        };

        Self {
            total_comptes,
            active_comptes,
            pending_comptes,
            blocked_comptes,
            total_solde,
            average_solde,
        }
    }
}

/// Aggregates over the agencies currently loaded in the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgenceStatistics {
    pub total_agences: usize,
    pub total_capital: f64,
    pub total_solde_disponible: f64,
    pub villes: usize,
}

impl AgenceStatistics {
    pub fn from_page(agences: &[Agence]) -> Self {
        let mut villes: Vec<&str> = agences.iter().map(|a| a.ville.as_str()).collect();
        villes.sort_unstable();
        villes.dedup();

        Self {
            total_agences: agences.len(),
            total_capital: agences.iter().map(|a| a.capital).sum(),
            total_solde_disponible: agences.iter().map(|a| a.solde_disponible).sum(),
            villes: villes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compte(solde: f64, status: &str, blocked: bool) -> Compte {
        serde_json::from_value(json!({
            "id": format!("c-{solde}"),
            "numeroCompte": 1000000000u64,
            "idClient": "CLIENT_001",
            "idAgence": "AGENCE_001",
            "solde": solde,
            "type": "STANDARD",
            "status": status,
            "blocked": blocked
        }))
        .unwrap()
    }

    #[test]
    fn test_page_statistics_blocked_counts_twice() {
        let page = vec![
            compte(1000.0, "ACTIVE", false),
            compte(3000.0, "PENDING", false),
            compte(0.0, "ACTIVE", true),
        ];

        let stats = CompteStatistics::from_page(&page);
        assert_eq!(stats.total_comptes, 3);
        // Blocked-but-ACTIVE still counts as active; blocked is a flag,
        // not a status.
        assert_eq!(stats.active_comptes, 2);
        assert_eq!(stats.pending_comptes, 1);
        assert_eq!(stats.blocked_comptes, 1);
        assert_eq!(stats.total_solde, 4000.0);
        assert!((stats.average_solde - 4000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_page_statistics() {
        let stats = CompteStatistics::from_page(&[]);
        assert_eq!(stats.total_comptes, 0);
        assert_eq!(stats.average_solde, 0.0);
    }

    #[test]
    fn test_agence_statistics_dedupes_villes() {
        let agences: Vec<Agence> = vec![
            json!({"idAgence": "a-1", "codeAgence": "AG001", "nom": "Centre", "ville": "Douala", "capital": 100.0, "soldeDisponible": 40.0}),
            json!({"idAgence": "a-2", "codeAgence": "AG002", "nom": "Nord", "ville": "Douala", "capital": 200.0, "soldeDisponible": 60.0}),
            json!({"idAgence": "a-3", "codeAgence": "AG003", "nom": "Sud", "ville": "Yaoundé", "capital": 300.0, "soldeDisponible": 100.0}),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();

        let stats = AgenceStatistics::from_page(&agences);
        assert_eq!(stats.total_agences, 3);
        assert_eq!(stats.total_capital, 600.0);
        assert_eq!(stats.total_solde_disponible, 200.0);
        assert_eq!(stats.villes, 2);
    }
}
