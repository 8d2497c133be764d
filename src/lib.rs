pub mod client;
pub mod config;
pub mod console;
pub mod enums;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod views;
pub mod workflow;

pub use config::Config;
pub use enums::{CarteType, CompteStatus, CompteType, DocumentStatus, SortDirection};
pub use error::{AppError, Result};
