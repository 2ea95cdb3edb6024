use super::super::domain::{Area, Dimension};
use super::super::identity::Identity;
use super::super::rules::ScoringRuleTable;
use super::super::scoring::ScoreSet;
use super::super::temperament::classify;
use super::views::{AreaSummary, AssessmentResultView, IdentityView, ScoreEntry};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one completed questionnaire run. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    identity: Identity,
    scores: ScoreSet,
    completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    pub fn new(identity: Identity, scores: ScoreSet, completed_at: DateTime<Utc>) -> Self {
        Self {
            identity,
            scores,
            completed_at,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn summary(&self, rules: &ScoringRuleTable) -> AssessmentSummary {
        AssessmentSummary::from_scores(&self.scores, rules)
    }

    pub fn view(&self, rules: &ScoringRuleTable) -> AssessmentResultView {
        AssessmentResultView {
            identity: IdentityView {
                full_name: self.identity.full_name().to_string(),
                date_of_birth: self.identity.date_of_birth(),
                age: self.identity.age(),
            },
            completed_at: self.completed_at,
            scores: self.scores.clone(),
            areas: self.summary(rules).areas,
        }
    }
}

/// Scores grouped by interpersonal area, with temperament per wanted/expressed pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub areas: Vec<AreaSummary>,
}

impl AssessmentSummary {
    pub fn from_scores(scores: &ScoreSet, rules: &ScoringRuleTable) -> Self {
        let areas = Area::ordered()
            .into_iter()
            .map(|area| {
                let wanted = score_entry(area.wanted(), scores, rules);
                let expressed = score_entry(area.expressed(), scores, rules);
                let temperament = classify(i64::from(wanted.score), i64::from(expressed.score));
                let heading = match temperament {
                    Some(temperament) => format!("{} ({})", area.label(), temperament.label()),
                    None => area.label().to_string(),
                };

                AreaSummary {
                    area,
                    area_label: area.label(),
                    heading,
                    wanted,
                    expressed,
                    temperament,
                    temperament_label: temperament.map(|temperament| temperament.label()),
                }
            })
            .collect();

        Self { areas }
    }

    pub fn area(&self, area: Area) -> Option<&AreaSummary> {
        self.areas.iter().find(|summary| summary.area == area)
    }
}

fn score_entry(dimension: Dimension, scores: &ScoreSet, rules: &ScoringRuleTable) -> ScoreEntry {
    ScoreEntry {
        dimension,
        label: dimension.label(),
        score: scores.get(dimension),
        max_score: rules.max_score(dimension),
    }
}
