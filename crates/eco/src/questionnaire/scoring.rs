use super::answers::AnswerSet;
use super::domain::{Area, Dimension};
use super::rules::ScoringRuleTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Score per dimension. Produced by [`ScoringEngine::compute_scores`] with every dimension present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet {
    scores: BTreeMap<Dimension, u32>,
}

impl ScoreSet {
    /// Score for a dimension; dimensions never scored read as 0.
    pub fn get(&self, dimension: Dimension) -> u32 {
        self.scores.get(&dimension).copied().unwrap_or(0)
    }

    /// `(wanted, expressed)` pair for an area.
    pub fn pair(&self, area: Area) -> (u32, u32) {
        (self.get(area.wanted()), self.get(area.expressed()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        self.scores.iter().map(|(dimension, score)| (*dimension, *score))
    }

    pub fn total(&self) -> u32 {
        self.scores.values().sum()
    }
}

/// Stateless evaluator applying a scoring key to answer sets.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    rules: &'a ScoringRuleTable,
}

impl ScoringEngine<'static> {
    pub fn standard() -> Self {
        Self::new(ScoringRuleTable::standard())
    }
}

impl<'a> ScoringEngine<'a> {
    pub fn new(rules: &'a ScoringRuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a ScoringRuleTable {
        self.rules
    }

    /// Count, per dimension, the answered questions whose value is in that question's accepted set.
    ///
    /// Total over every input: unanswered questions, unknown ids and off-scale values add nothing.
    pub fn compute_scores(&self, answers: &AnswerSet) -> ScoreSet {
        let scores = Dimension::ordered()
            .into_iter()
            .map(|dimension| {
                let score = self
                    .rules
                    .rules_for(dimension)
                    .map(|rules| {
                        rules
                            .question_ids()
                            .filter(|id| {
                                answers
                                    .get(*id)
                                    .is_some_and(|value| rules.accepts(*id, value))
                            })
                            .count() as u32
                    })
                    .unwrap_or(0);
                (dimension, score)
            })
            .collect();

        let scores = ScoreSet { scores };
        debug!(answered = answers.len(), total = scores.total(), "scored answer set");
        scores
    }
}

/// Score an answer set with the standard scoring key.
pub fn compute_scores(answers: &AnswerSet) -> ScoreSet {
    ScoringEngine::standard().compute_scores(answers)
}
