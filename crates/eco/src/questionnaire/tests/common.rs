use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::questionnaire::{AnswerSet, AssessmentSession, QuestionCatalog, QuestionId};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 5, 20).expect("valid date")
}

pub(super) fn completed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 15, 0, 0)
        .single()
        .expect("valid instant")
}

/// Every catalog question answered with the same value.
pub(super) fn uniform_answers(value: i32) -> AnswerSet {
    QuestionCatalog::standard()
        .ids()
        .map(|id| (id, value))
        .collect()
}

pub(super) fn answering_session() -> AssessmentSession {
    let mut session = AssessmentSession::new();
    session
        .submit_identity("Maria Oliveira", date_of_birth(), today())
        .expect("identity accepted");
    session
}

pub(super) fn fill(session: &mut AssessmentSession, answers: &AnswerSet) {
    for (question_id, value) in answers.iter() {
        session.answer(question_id, value).expect("answer accepted");
    }
}

pub(super) fn ids(raw: &[u16]) -> Vec<QuestionId> {
    raw.iter().copied().map(QuestionId).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
