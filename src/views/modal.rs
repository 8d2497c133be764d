use crate::models::{Agence, Compte};

/// Modal state of the agence management view. A tagged union instead of the
/// historical free-string tag: an unknown modal kind cannot be represented.
#[derive(Debug, Clone, Default)]
pub enum AgenceModal {
    #[default]
    Closed,
    Add,
    Edit(Agence),
    View(Agence),
    ConfirmDelete(Agence),
}

impl AgenceModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, AgenceModal::Closed)
    }

    pub fn title_fr(&self) -> &'static str {
        match self {
            AgenceModal::Closed => "",
            AgenceModal::Add => "Nouvelle Agence",
            AgenceModal::Edit(_) => "Modifier Agence",
            AgenceModal::View(_) => "Détails de l'Agence",
            AgenceModal::ConfirmDelete(_) => "Supprimer Agence",
        }
    }

    /// Header line the console prints when this modal opens.
    pub fn banner(&self) -> String {
        match self {
            AgenceModal::Closed => String::new(),
            AgenceModal::Add => self.title_fr().to_string(),
            AgenceModal::Edit(a) | AgenceModal::View(a) | AgenceModal::ConfirmDelete(a) => {
                format!("{}: {} ({})", self.title_fr(), a.nom, a.code_agence)
            }
        }
    }
}

/// Modal state of the compte management view. Card creation hangs off an
/// existing compte, so it carries the selected account with it.
#[derive(Debug, Clone, Default)]
pub enum CompteModal {
    #[default]
    Closed,
    Add,
    Edit(Compte),
    View(Compte),
    ConfirmClose(Compte),
    CreateCarte(Compte),
}

impl CompteModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, CompteModal::Closed)
    }

    pub fn title_fr(&self) -> &'static str {
        match self {
            CompteModal::Closed => "",
            CompteModal::Add => "Nouveau Compte",
            CompteModal::Edit(_) => "Modifier Compte",
            CompteModal::View(_) => "Détails du Compte",
            CompteModal::ConfirmClose(_) => "Fermer Compte",
            CompteModal::CreateCarte(_) => "Créer une Carte",
        }
    }

    /// The compte the modal is acting on, when there is one.
    pub fn selected(&self) -> Option<&Compte> {
        match self {
            CompteModal::Closed | CompteModal::Add => None,
            CompteModal::Edit(c)
            | CompteModal::View(c)
            | CompteModal::ConfirmClose(c)
            | CompteModal::CreateCarte(c) => Some(c),
        }
    }

    /// Header line the console prints when this modal opens.
    pub fn banner(&self) -> String {
        match self.selected() {
            Some(c) => format!(
                "{}: compte {} ({})",
                self.title_fr(),
                c.numero_compte,
                c.id_client
            ),
            None => self.title_fr().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_compte() -> Compte {
        serde_json::from_value(json!({
            "id": "c-1",
            "numeroCompte": 1234567890u64,
            "idClient": "CLIENT_001",
            "idAgence": "AGENCE_001",
            "type": "STANDARD",
            "status": "ACTIVE"
        }))
        .unwrap()
    }

    #[test]
    fn test_modal_selection() {
        assert!(CompteModal::Closed.selected().is_none());
        assert!(CompteModal::Add.selected().is_none());

        let modal = CompteModal::CreateCarte(sample_compte());
        assert!(modal.is_open());
        assert_eq!(modal.selected().unwrap().id, "c-1");
        assert_eq!(modal.title_fr(), "Créer une Carte");
    }

    #[test]
    fn test_compte_banner_names_the_target() {
        let modal = CompteModal::ConfirmClose(sample_compte());
        assert_eq!(modal.banner(), "Fermer Compte: compte 1234567890 (CLIENT_001)");
        assert_eq!(CompteModal::Add.banner(), "Nouveau Compte");
    }

    #[test]
    fn test_agence_banner_names_the_target() {
        let agence: Agence = serde_json::from_value(json!({
            "idAgence": "a-1",
            "codeAgence": "AG001",
            "nom": "Agence Centre",
            "ville": "Douala"
        }))
        .unwrap();

        let modal = AgenceModal::ConfirmDelete(agence);
        assert_eq!(modal.banner(), "Supprimer Agence: Agence Centre (AG001)");
        assert_eq!(AgenceModal::Closed.banner(), "");
    }
}
