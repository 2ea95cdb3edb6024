mod summary;
pub mod views;

pub use summary::{AssessmentResult, AssessmentSummary};
