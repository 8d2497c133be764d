pub mod auth_service;
pub mod document_service;
pub mod agence_service;
pub mod compte_service;

pub use auth_service::AuthService;
pub use document_service::{DocumentApi, DocumentService};
pub use agence_service::AgenceService;
pub use compte_service::CompteService;
