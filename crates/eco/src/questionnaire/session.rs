use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{Question, QuestionId};
use super::identity::{Identity, IdentityError};
use super::report::AssessmentResult;
use super::scoring::ScoringEngine;
use chrono::{DateTime, NaiveDate, Utc};
use std::mem;
use tracing::info;

/// Where a single respondent currently is in the questionnaire flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    CollectingIdentity,
    Answering(AnsweringState),
    Completed(AssessmentResult),
}

impl SessionState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CollectingIdentity => "collecting identity",
            Self::Answering(_) => "answering",
            Self::Completed(_) => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweringState {
    pub identity: Identity,
    pub answers: AnswerSet,
    /// Catalog index of the question on screen.
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    /// One-based position of the current question.
    pub position: usize,
}

/// Drives one respondent from identity capture to a scored result.
#[derive(Debug)]
pub struct AssessmentSession {
    catalog: &'static QuestionCatalog,
    engine: ScoringEngine<'static>,
    state: SessionState,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            catalog: QuestionCatalog::standard(),
            engine: ScoringEngine::standard(),
            state: SessionState::CollectingIdentity,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.catalog
    }

    pub fn engine(&self) -> ScoringEngine<'static> {
        self.engine
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            SessionState::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn submit_identity(
        &mut self,
        full_name: &str,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> Result<&Identity, SessionError> {
        if !matches!(self.state, SessionState::CollectingIdentity) {
            return Err(self.refuse("submit identity"));
        }

        let identity = Identity::new(full_name, date_of_birth, today)?;
        info!(age = identity.age(), "identity captured, questionnaire started");
        self.state = SessionState::Answering(AnsweringState {
            identity,
            answers: AnswerSet::new(),
            cursor: 0,
        });

        self.answering()
            .map(|answering| &answering.identity)
            .ok_or_else(|| self.refuse("submit identity"))
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match &self.state {
            SessionState::Answering(answering) => self.catalog.get(answering.cursor),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<Progress> {
        match &self.state {
            SessionState::Answering(answering) => Some(Progress {
                answered: answering.answers.answered_in(self.catalog),
                total: self.catalog.len(),
                position: answering.cursor + 1,
            }),
            _ => None,
        }
    }

    /// Record an answer for any catalog question; re-answering overwrites.
    pub fn answer(&mut self, question_id: QuestionId, value: i32) -> Result<(), SessionError> {
        let catalog = self.catalog;
        let answering = self.answering_mut("answer")?;

        let question = catalog
            .question(question_id)
            .ok_or(SessionError::UnknownQuestion(question_id))?;
        if question.scale.option(value).is_none() {
            return Err(SessionError::InvalidAnswer { question_id, value });
        }

        answering.answers.insert(question_id, value);
        Ok(())
    }

    /// Answer the question under the cursor.
    pub fn answer_current(&mut self, value: i32) -> Result<QuestionId, SessionError> {
        let question = self
            .current_question()
            .ok_or_else(|| self.refuse("answer"))?;
        self.answer(question.id, value)?;
        Ok(question.id)
    }

    /// Advance to the next question. The current one must be answered first.
    pub fn next(&mut self) -> Result<&'static Question, SessionError> {
        let catalog = self.catalog;
        let answering = self.answering_mut("move to the next question")?;

        let current = catalog
            .get(answering.cursor)
            .ok_or(SessionError::AtLastQuestion)?;
        if !answering.answers.contains(current.id) {
            return Err(SessionError::Unanswered(current.id));
        }

        let next = catalog
            .get(answering.cursor + 1)
            .ok_or(SessionError::AtLastQuestion)?;
        answering.cursor += 1;
        Ok(next)
    }

    pub fn previous(&mut self) -> Result<&'static Question, SessionError> {
        let catalog = self.catalog;
        let answering = self.answering_mut("move to the previous question")?;

        if answering.cursor == 0 {
            return Err(SessionError::AtFirstQuestion);
        }
        answering.cursor -= 1;
        catalog
            .get(answering.cursor)
            .ok_or(SessionError::AtFirstQuestion)
    }

    /// Score the answers and move to the completed state. Every catalog question must be answered.
    pub fn finish(&mut self, completed_at: DateTime<Utc>) -> Result<&AssessmentResult, SessionError> {
        let answering = match mem::replace(&mut self.state, SessionState::CollectingIdentity) {
            SessionState::Answering(answering) => answering,
            other => {
                self.state = other;
                return Err(self.refuse("finish"));
            }
        };

        let missing = answering.answers.missing(self.catalog);
        if !missing.is_empty() {
            self.state = SessionState::Answering(answering);
            return Err(SessionError::Incomplete { missing });
        }

        let scores = self.engine.compute_scores(&answering.answers);
        info!(total = scores.total(), "questionnaire completed");
        self.state = SessionState::Completed(AssessmentResult::new(
            answering.identity,
            scores,
            completed_at,
        ));

        self.result().ok_or_else(|| self.refuse("finish"))
    }

    /// Discard identity, answers and result and return to identity capture.
    pub fn restart(&mut self) {
        if !matches!(self.state, SessionState::CollectingIdentity) {
            info!(from = self.state.label(), "session restarted");
        }
        self.state = SessionState::CollectingIdentity;
    }

    fn answering(&self) -> Option<&AnsweringState> {
        match &self.state {
            SessionState::Answering(answering) => Some(answering),
            _ => None,
        }
    }

    fn answering_mut(&mut self, event: &'static str) -> Result<&mut AnsweringState, SessionError> {
        match &mut self.state {
            SessionState::Answering(answering) => Ok(answering),
            other => Err(SessionError::InvalidTransition {
                event,
                state: other.label(),
            }),
        }
    }

    fn refuse(&self, event: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            event,
            state: self.state.label(),
        }
    }
}

/// Error raised when a session event is not allowed or carries invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },
    #[error("question {0} is not part of the questionnaire")]
    UnknownQuestion(QuestionId),
    #[error("answer {value} is not an option for question {question_id}")]
    InvalidAnswer { question_id: QuestionId, value: i32 },
    #[error("question {0} must be answered before moving on")]
    Unanswered(QuestionId),
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("already at the last question")]
    AtLastQuestion,
    #[error("{} question(s) still unanswered", .missing.len())]
    Incomplete { missing: Vec<QuestionId> },
}
