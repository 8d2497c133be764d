use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ─── Document status ─────────────────────────────────────────────────

/// Lifecycle states of an identity-verification document. The client only
/// ever moves a document out of review via approve/reject; everything else
/// is server-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Pending,
    Received,
    UnderReview,
    Approved,
    Rejected,
    Expired,
}

impl DocumentStatus {
    /// Canonical string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "PENDING",
            DocumentStatus::Received => "RECEIVED",
            DocumentStatus::UnderReview => "UNDER_REVIEW",
            DocumentStatus::Approved => "APPROVED",
            DocumentStatus::Rejected => "REJECTED",
            DocumentStatus::Expired => "EXPIRED",
        }
    }

    /// Console badge label.
    pub fn label_fr(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "En attente",
            DocumentStatus::Received => "Reçu",
            DocumentStatus::UnderReview => "En cours d'examen",
            DocumentStatus::Approved => "Approuvé",
            DocumentStatus::Rejected => "Rejeté",
            DocumentStatus::Expired => "Expiré",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(DocumentStatus::Pending),
            "RECEIVED" => Ok(DocumentStatus::Received),
            "UNDER_REVIEW" => Ok(DocumentStatus::UnderReview),
            "APPROVED" => Ok(DocumentStatus::Approved),
            "REJECTED" => Ok(DocumentStatus::Rejected),
            "EXPIRED" => Ok(DocumentStatus::Expired),
            _ => Err(AppError::Validation(format!("Unknown document status: {}", s))),
        }
    }
}

// ─── Compte status and type ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompteStatus {
    Pending,
    Active,
    Suspended,
    Blocked,
    Closed,
}

impl CompteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompteStatus::Pending => "PENDING",
            CompteStatus::Active => "ACTIVE",
            CompteStatus::Suspended => "SUSPENDED",
            CompteStatus::Blocked => "BLOCKED",
            CompteStatus::Closed => "CLOSED",
        }
    }

    pub fn label_fr(&self) -> &'static str {
        match self {
            CompteStatus::Pending => "En attente",
            CompteStatus::Active => "Actif",
            CompteStatus::Suspended => "Suspendu",
            CompteStatus::Blocked => "Bloqué",
            CompteStatus::Closed => "Fermé",
        }
    }
}

impl fmt::Display for CompteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompteStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(CompteStatus::Pending),
            "ACTIVE" => Ok(CompteStatus::Active),
            "SUSPENDED" => Ok(CompteStatus::Suspended),
            "BLOCKED" => Ok(CompteStatus::Blocked),
            "CLOSED" => Ok(CompteStatus::Closed),
            _ => Err(AppError::Validation(format!("Unknown compte status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompteType {
    Standard,
    Premium,
    Business,
    Saving,
}

impl CompteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompteType::Standard => "STANDARD",
            CompteType::Premium => "PREMIUM",
            CompteType::Business => "BUSINESS",
            CompteType::Saving => "SAVING",
        }
    }

    pub fn label_fr(&self) -> &'static str {
        match self {
            CompteType::Standard => "Standard",
            CompteType::Premium => "Premium",
            CompteType::Business => "Entreprise",
            CompteType::Saving => "Épargne",
        }
    }
}

impl fmt::Display for CompteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompteType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Ok(CompteType::Standard),
            "PREMIUM" => Ok(CompteType::Premium),
            "BUSINESS" => Ok(CompteType::Business),
            "SAVING" => Ok(CompteType::Saving),
            _ => Err(AppError::Validation(format!("Unknown compte type: {}", s))),
        }
    }
}

// ─── Carte type ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarteType {
    Standard,
    Gold,
    Platinum,
    Prepaid,
}

impl CarteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarteType::Standard => "STANDARD",
            CarteType::Gold => "GOLD",
            CarteType::Platinum => "PLATINUM",
            CarteType::Prepaid => "PREPAID",
        }
    }
}

impl fmt::Display for CarteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CarteType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Ok(CarteType::Standard),
            "GOLD" => Ok(CarteType::Gold),
            "PLATINUM" => Ok(CarteType::Platinum),
            "PREPAID" => Ok(CarteType::Prepaid),
            _ => Err(AppError::Validation(format!("Unknown carte type: {}", s))),
        }
    }
}

// ─── Sort direction ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_status_round_trip() {
        for s in ["PENDING", "RECEIVED", "UNDER_REVIEW", "APPROVED", "REJECTED", "EXPIRED"] {
            let parsed: DocumentStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert!("SOMETHING_ELSE".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn test_compte_status_case_insensitive_parse() {
        assert_eq!("active".parse::<CompteStatus>().unwrap(), CompteStatus::Active);
        assert_eq!("Closed".parse::<CompteStatus>().unwrap(), CompteStatus::Closed);
    }

    #[test]
    fn test_serde_wire_format() {
        assert_eq!(serde_json::to_string(&DocumentStatus::UnderReview).unwrap(), "\"UNDER_REVIEW\"");
        assert_eq!(serde_json::to_string(&CompteType::Saving).unwrap(), "\"SAVING\"");
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"desc\"");
    }
}
