use super::catalog::QuestionCatalog;
use super::domain::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Chosen answer value per question. May be partial while a questionnaire is in progress.
///
/// Values are stored as given; anything outside the six-point scale simply never
/// matches a scoring rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, i32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced.
    pub fn insert(&mut self, question_id: QuestionId, value: i32) -> Option<i32> {
        self.answers.insert(question_id, value)
    }

    pub fn get(&self, question_id: QuestionId) -> Option<i32> {
        self.answers.get(&question_id).copied()
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i32)> + '_ {
        self.answers.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Catalog questions that have no answer yet, in presentation order.
    pub fn missing(&self, catalog: &QuestionCatalog) -> Vec<QuestionId> {
        catalog.ids().filter(|id| !self.contains(*id)).collect()
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        catalog.ids().all(|id| self.contains(id))
    }

    pub fn answered_in(&self, catalog: &QuestionCatalog) -> usize {
        catalog.ids().filter(|id| self.contains(*id)).count()
    }
}

impl FromIterator<(QuestionId, i32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, i32)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(u16, i32); N]> for AnswerSet {
    fn from(pairs: [(u16, i32); N]) -> Self {
        pairs
            .into_iter()
            .map(|(id, value)| (QuestionId(id), value))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerParseError {
    #[error("expected `question=value`, found `{0}`")]
    MissingSeparator(String),
    #[error("invalid question id `{0}`")]
    InvalidQuestion(String),
    #[error("invalid answer value `{0}`")]
    InvalidValue(String),
}

/// Parses compact `id=value` pairs separated by commas or whitespace, e.g. `1=4, 3=5`.
impl FromStr for AnswerSet {
    type Err = AnswerParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut answers = AnswerSet::new();
        for pair in raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|pair| !pair.is_empty())
        {
            let (id, value) = pair
                .split_once('=')
                .ok_or_else(|| AnswerParseError::MissingSeparator(pair.to_string()))?;
            let id = id
                .trim()
                .parse::<u16>()
                .map_err(|_| AnswerParseError::InvalidQuestion(id.to_string()))?;
            let value = value
                .trim()
                .parse::<i32>()
                .map_err(|_| AnswerParseError::InvalidValue(value.to_string()))?;
            answers.insert(QuestionId(id), value);
        }
        Ok(answers)
    }
}
