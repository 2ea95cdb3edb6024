//! The ECO interpersonal-needs inventory: question catalog, scoring key,
//! scoring engine, temperament classifier and the respondent session flow.

mod answers;
mod catalog;
pub mod domain;
mod identity;
pub mod report;
mod router;
mod rules;
mod scoring;
mod session;
mod temperament;

#[cfg(test)]
mod tests;

pub use answers::{AnswerParseError, AnswerSet};
pub use catalog::QuestionCatalog;
pub use domain::{AnswerOption, Area, Dimension, Direction, Question, QuestionId, Scale, Temperament};
pub use identity::{age_on, Identity, IdentityError, MAX_AGE_YEARS};
pub use report::{AssessmentResult, AssessmentSummary};
pub use router::{
    assessment_router, catalog_view, AssessmentRequest, CatalogView, ScoreRequest, ScoreResponse,
    TemperamentResponse,
};
pub use rules::{DimensionRules, ScoringRuleTable};
pub use scoring::{compute_scores, ScoreSet, ScoringEngine};
pub use session::{AnsweringState, AssessmentSession, Progress, SessionError, SessionState};
pub use temperament::{classify, Band};
