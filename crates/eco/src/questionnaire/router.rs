use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{AnswerOption, Dimension, Question, Scale, Temperament};
use super::report::views::{AreaSummary, AssessmentResultView};
use super::report::AssessmentSummary;
use super::rules::ScoringRuleTable;
use super::scoring::{ScoreSet, ScoringEngine};
use super::session::AssessmentSession;
use super::temperament::classify;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct OptionSetView {
    pub scale: Scale,
    pub label: &'static str,
    pub options: &'static [AnswerOption],
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub questions: &'static [Question],
    pub option_sets: Vec<OptionSetView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleView {
    pub question_id: u16,
    pub accepted_values: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionRulesView {
    pub dimension: Dimension,
    pub label: &'static str,
    pub max_score: u32,
    pub rules: Vec<RuleView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub answered: usize,
    pub total_questions: usize,
    pub complete: bool,
    pub scores: ScoreSet,
    pub areas: Vec<AreaSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemperamentQuery {
    pub wanted: i64,
    pub expressed: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperamentResponse {
    pub wanted: i64,
    pub expressed: i64,
    pub temperament: Option<Temperament>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

/// Stateless endpoints over the catalog, scoring key and classifier.
pub fn assessment_router() -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(catalog_handler))
        .route("/api/v1/questionnaire/rules", get(rules_handler))
        .route("/api/v1/assessments", post(assessment_handler))
        .route("/api/v1/assessments/score", post(score_handler))
        .route("/api/v1/temperament", get(temperament_handler))
}

pub(crate) async fn catalog_handler() -> Json<CatalogView> {
    Json(catalog_view(QuestionCatalog::standard()))
}

pub fn catalog_view(catalog: &'static QuestionCatalog) -> CatalogView {
    CatalogView {
        questions: catalog.questions(),
        option_sets: Scale::ordered()
            .into_iter()
            .map(|scale| OptionSetView {
                scale,
                label: scale.label(),
                options: scale.options(),
            })
            .collect(),
    }
}

pub(crate) async fn rules_handler() -> Json<Vec<DimensionRulesView>> {
    let table = ScoringRuleTable::standard();
    let views = table
        .groups()
        .map(|(dimension, rules)| DimensionRulesView {
            dimension,
            label: dimension.label(),
            max_score: rules.max_score(),
            rules: rules
                .iter()
                .map(|(question_id, values)| RuleView {
                    question_id: question_id.0,
                    accepted_values: values.iter().copied().collect(),
                })
                .collect(),
        })
        .collect();
    Json(views)
}

pub(crate) async fn score_handler(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::standard();
    let scores = engine.compute_scores(&request.answers);
    let summary = AssessmentSummary::from_scores(&scores, engine.rules());

    Json(ScoreResponse {
        answered: request.answers.answered_in(catalog),
        total_questions: catalog.len(),
        complete: request.answers.is_complete(catalog),
        scores,
        areas: summary.areas,
    })
}

pub(crate) async fn assessment_handler(
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResultView>, AppError> {
    let view = score_assessment(request, Utc::now())?;
    info!(total = view.scores.total(), "assessment scored over http");
    Ok(Json(view))
}

/// Run one request through a fresh session. `now` stamps the result and,
/// when the request carries no `today`, supplies the UTC date used for the age.
pub(crate) fn score_assessment(
    request: AssessmentRequest,
    now: DateTime<Utc>,
) -> Result<AssessmentResultView, AppError> {
    let AssessmentRequest {
        full_name,
        date_of_birth,
        today,
        answers,
    } = request;
    let today = today.unwrap_or_else(|| now.date_naive());

    let mut session = AssessmentSession::new();
    let rules = session.engine().rules();
    session.submit_identity(&full_name, date_of_birth, today)?;
    for (question_id, value) in answers.iter() {
        session.answer(question_id, value)?;
    }
    let result = session.finish(now)?;
    Ok(result.view(rules))
}

pub(crate) async fn temperament_handler(
    Query(query): Query<TemperamentQuery>,
) -> Json<TemperamentResponse> {
    let temperament = classify(query.wanted, query.expressed);
    Json(TemperamentResponse {
        wanted: query.wanted,
        expressed: query.expressed,
        temperament,
        label: temperament.map(Temperament::label),
    })
}
