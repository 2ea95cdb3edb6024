mod prompt;
mod render;

use crate::infra::parse_date;
use chrono::{Local, NaiveDate, Utc};
use clap::Args;
use eco::error::AppError;
use eco::questionnaire::{
    AnswerSet, AssessmentSummary, QuestionCatalog, ScoringEngine, ScoringRuleTable,
};
use serde_json::Value;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use prompt::{take_questionnaire, Prefill};

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Respondent's full name; prompted for when omitted
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Date of birth (YYYY-MM-DD, DD-MM-YYYY, DD/MM/YYYY, "May 20, 1990" or "20 May 1990")
    #[arg(long, value_parser = parse_date)]
    pub(crate) date_of_birth: Option<NaiveDate>,
    /// Date used to compute the age (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct ScoreArgs {
    /// JSON file holding `{"answers": {"1": 4, ...}}` or a bare `{"1": 4, ...}` map
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Inline answers such as "1=4, 3=5, 16=6"
    #[arg(long)]
    pub(crate) answers_inline: Option<String>,
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let TakeArgs {
        name,
        date_of_birth,
        today,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let prefill = Prefill {
        name,
        date_of_birth,
    };
    let result = take_questionnaire(&mut input, &mut output, prefill, today, Utc::now)?;
    render::result(&mut output, &result, ScoringRuleTable::standard())?;
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = match (args.answers, args.answers_inline) {
        (Some(path), _) => load_answer_file(&path)?,
        (None, Some(inline)) => inline.parse::<AnswerSet>()?,
        (None, None) => AnswerSet::new(),
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    write_score_report(&mut output, &answers)?;
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    render::catalog(&mut output, QuestionCatalog::standard())?;
    Ok(())
}

fn write_score_report<W: Write>(output: &mut W, answers: &AnswerSet) -> io::Result<()> {
    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::standard();
    let scores = engine.compute_scores(answers);
    let summary = AssessmentSummary::from_scores(&scores, engine.rules());

    render::answered_count(output, answers.answered_in(catalog), catalog.len())?;
    render::summary(output, &summary)
}

fn load_answer_file(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_answer_document(&raw)
}

/// Accepts the HTTP request shape (`{"answers": {...}}`) as well as a bare answer map.
fn parse_answer_document(raw: &str) -> Result<AnswerSet, AppError> {
    let mut document: Value = serde_json::from_str(raw)?;
    let answers = match document.get_mut("answers").map(Value::take) {
        Some(answers) => answers,
        None => document,
    };
    Ok(serde_json::from_value(answers)?)
}
