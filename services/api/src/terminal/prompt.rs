use super::render;
use crate::infra::parse_date;
use chrono::{DateTime, NaiveDate, Utc};
use eco::error::AppError;
use eco::questionnaire::{AssessmentResult, AssessmentSession, Scale, SessionError};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Identity details supplied on the command line; anything missing is asked for.
#[derive(Debug, Clone, Default)]
pub(crate) struct Prefill {
    pub(crate) name: Option<String>,
    pub(crate) date_of_birth: Option<NaiveDate>,
}

enum Choice {
    Answer(i32),
    Back,
}

/// Run one respondent through identity capture and all questions.
pub(crate) fn take_questionnaire<R, W>(
    input: &mut R,
    output: &mut W,
    prefill: Prefill,
    today: NaiveDate,
    clock: impl Fn() -> DateTime<Utc>,
) -> Result<AssessmentResult, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = AssessmentSession::new();
    capture_identity(&mut session, input, output, prefill, today)?;

    while let Some(question) = session.current_question() {
        if let Some(progress) = session.progress() {
            render::question(output, question, progress)?;
        }

        match prompt_choice(input, output, question.scale)? {
            Choice::Back => {
                if let Err(err) = session.previous() {
                    writeln!(output, "{err}.")?;
                }
            }
            Choice::Answer(value) => {
                session.answer_current(value)?;
                match session.next() {
                    Ok(_) => {}
                    Err(SessionError::AtLastQuestion) => break,
                    Err(err) => return Err(err.into()),
                }
            }
        }
        writeln!(output)?;
    }

    let result = session.finish(clock())?;
    Ok(result.clone())
}

fn capture_identity<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: &mut R,
    output: &mut W,
    prefill: Prefill,
    today: NaiveDate,
) -> Result<(), AppError> {
    let Prefill {
        mut name,
        mut date_of_birth,
    } = prefill;

    loop {
        let full_name = match name.take() {
            Some(name) => name,
            None => prompt_name(input, output)?,
        };
        let dob = match date_of_birth.take() {
            Some(dob) => dob,
            None => prompt_date_of_birth(input, output)?,
        };

        match session.submit_identity(&full_name, dob, today) {
            Ok(identity) => {
                render::identity(output, identity, today)?;
                return Ok(());
            }
            Err(SessionError::Identity(err)) => {
                debug!(error = %err, "identity rejected, asking again");
                writeln!(output, "{err}. Please try again.")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    loop {
        let line = read_line(input, output, "Full name: ")?;
        if !line.is_empty() {
            return Ok(line);
        }
        writeln!(output, "The name cannot be empty. Please try again.")?;
    }
}

fn prompt_date_of_birth<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<NaiveDate> {
    loop {
        let line = read_line(input, output, "Date of birth (YYYY-MM-DD): ")?;
        match parse_date(&line) {
            Ok(date) => return Ok(date),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    scale: Scale,
) -> io::Result<Choice> {
    loop {
        let line = read_line(input, output, "Answer (1-6, b to go back): ")?;
        if line.eq_ignore_ascii_case("b") {
            return Ok(Choice::Back);
        }
        match line.parse::<i32>() {
            Ok(value) if scale.option(value).is_some() => return Ok(Choice::Answer(value)),
            _ => writeln!(output, "Invalid answer. Enter a number between 1 and 6.")?,
        }
    }
}

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the questionnaire was finished",
        ));
    }
    Ok(line.trim().to_string())
}
