pub mod filter;
pub mod format;
pub mod modal;
pub mod stats;

pub use modal::{AgenceModal, CompteModal};
pub use stats::{AgenceStatistics, CompteStatistics};
