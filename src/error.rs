use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")] Validation(String),

    #[error("Network Error: {0}")] Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Non-2xx response. `message` is the server-supplied message when the
    /// body carried one, otherwise the generic `HTTP <status>: <reason>`.
    #[error("{message}")] Http {
        status: u16,
        message: String,
    },

    #[error("Authentication required. Please login first.")]
    AuthRequired,

    #[error("Session error: {0}")] Session(String),

    #[error("Configuration error: {0}")] Config(String),

    #[error("Serialization error: {0}")] Serialization(String),

    #[error("Internal error: {0}")] Internal(String),
}

impl AppError {
    /// User-facing message, localized for the admin console.
    ///
    /// Known transport and server failures map to fixed French strings;
    /// anything else passes through verbatim so server-supplied messages
    /// are never hidden.
    pub fn user_message(&self) -> String {
        let raw = self.to_string();

        const ERROR_MAP: &[(&str, &str)] = &[
            ("Network Error", "Erreur de réseau. Vérifiez votre connexion."),
            ("Request timeout", "La requête a expiré. Veuillez réessayer."),
            ("Authentication required", "Vous devez vous connecter pour continuer."),
            ("Forbidden", "Accès non autorisé à cette ressource."),
            ("Not Found", "Ressource non trouvée."),
            ("Internal Server Error", "Erreur du serveur. Veuillez réessayer plus tard."),
        ];

        for (key, localized) in ERROR_MAP {
            if raw.contains(key) {
                return (*localized).to_string();
            }
        }

        raw
    }

    /// True for errors raised before any network call was made.
    pub fn is_local(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::AuthRequired | AppError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_localized() {
        let err = AppError::Timeout;
        assert_eq!(err.user_message(), "La requête a expiré. Veuillez réessayer.");
    }

    #[test]
    fn test_network_localized() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Erreur de réseau. Vérifiez votre connexion.");
    }

    #[test]
    fn test_http_status_text_localized() {
        let err = AppError::Http {
            status: 404,
            message: "HTTP 404: Not Found".to_string(),
        };
        assert_eq!(err.user_message(), "Ressource non trouvée.");

        let err = AppError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.user_message(), "Accès non autorisé à cette ressource.");

        let err = AppError::Http {
            status: 500,
            message: "HTTP 500: Internal Server Error".to_string(),
        };
        assert_eq!(err.user_message(), "Erreur du serveur. Veuillez réessayer plus tard.");
    }

    #[test]
    fn test_auth_required_localized() {
        let err = AppError::AuthRequired;
        assert_eq!(err.user_message(), "Vous devez vous connecter pour continuer.");
        assert!(err.is_local());
    }

    #[test]
    fn test_unmapped_message_passes_through() {
        let err = AppError::Http {
            status: 409,
            message: "Code agence déjà utilisé".to_string(),
        };
        assert_eq!(err.user_message(), "Code agence déjà utilisé");
    }

    #[test]
    fn test_validation_is_local() {
        assert!(AppError::Validation("missing field".to_string()).is_local());
        assert!(!AppError::Timeout.is_local());
    }
}
