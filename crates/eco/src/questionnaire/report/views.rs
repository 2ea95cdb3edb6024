use super::super::domain::{Area, Dimension, Temperament};
use super::super::scoring::ScoreSet;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: u32,
    pub max_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaSummary {
    pub area: Area,
    pub area_label: &'static str,
    pub heading: String,
    pub wanted: ScoreEntry,
    pub expressed: ScoreEntry,
    pub temperament: Option<Temperament>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperament_label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityView {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResultView {
    pub identity: IdentityView,
    pub completed_at: DateTime<Utc>,
    pub scores: ScoreSet,
    pub areas: Vec<AreaSummary>,
}
