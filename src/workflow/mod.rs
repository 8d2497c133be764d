pub mod review;
pub mod scoring;

pub use review::{Decision, ReviewStage, ReviewWorkflow};
pub use scoring::{liveness_label, ScoreGrade};
