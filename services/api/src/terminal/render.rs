use chrono::NaiveDate;
use eco::questionnaire::report::views::AreaSummary;
use eco::questionnaire::{
    AssessmentResult, AssessmentSummary, Identity, Progress, Question, QuestionCatalog, Scale,
    ScoringRuleTable,
};
use std::io::{self, Write};

pub(crate) fn identity<W: Write>(out: &mut W, identity: &Identity, today: NaiveDate) -> io::Result<()> {
    writeln!(out, "\n--- Respondent ---")?;
    writeln!(out, "Full name: {}", identity.full_name())?;
    writeln!(
        out,
        "Date of birth: {}",
        identity.date_of_birth().format("%d %B %Y")
    )?;
    writeln!(out, "Today: {}", today.format("%d %B %Y"))?;
    writeln!(out, "Age: {} years\n", identity.age())
}

pub(crate) fn question<W: Write>(out: &mut W, question: &Question, progress: Progress) -> io::Result<()> {
    writeln!(
        out,
        "Question {} of {} ({} answered)",
        progress.position, progress.total, progress.answered
    )?;
    writeln!(out, "{}. {}", question.id, question.text)?;
    for option in question.scale.options() {
        writeln!(out, "  {} - {}", option.value, option.label)?;
    }
    Ok(())
}

pub(crate) fn result<W: Write>(
    out: &mut W,
    result: &AssessmentResult,
    rules: &ScoringRuleTable,
) -> io::Result<()> {
    writeln!(out, "\n--- Results ---")?;
    writeln!(out, "Full name: {}", result.identity().full_name())?;
    writeln!(out, "Age: {} years", result.identity().age())?;
    writeln!(
        out,
        "Completed at: {}",
        result.completed_at().format("%Y-%m-%d %H:%M UTC")
    )?;
    summary(out, &result.summary(rules))
}

pub(crate) fn summary<W: Write>(out: &mut W, summary: &AssessmentSummary) -> io::Result<()> {
    for area in &summary.areas {
        writeln!(out)?;
        area_block(out, area)?;
    }
    Ok(())
}

fn area_block<W: Write>(out: &mut W, area: &AreaSummary) -> io::Result<()> {
    writeln!(out, "{}", area.heading)?;
    for entry in [&area.wanted, &area.expressed] {
        writeln!(out, "  {}: {}/{}", entry.label, entry.score, entry.max_score)?;
    }
    Ok(())
}

pub(crate) fn answered_count<W: Write>(out: &mut W, answered: usize, total: usize) -> io::Result<()> {
    if answered == total {
        writeln!(out, "Answered all {total} questions")
    } else {
        writeln!(
            out,
            "Answered {answered} of {total} questions; unanswered items score nothing"
        )
    }
}

pub(crate) fn catalog<W: Write>(out: &mut W, catalog: &QuestionCatalog) -> io::Result<()> {
    for scale in Scale::ordered() {
        writeln!(out, "{} scale", scale.label())?;
        for option in scale.options() {
            writeln!(out, "  {} - {}", option.value, option.label)?;
        }
    }
    writeln!(out)?;
    for question in catalog.questions() {
        writeln!(
            out,
            "{:>2}. [{}] {}",
            question.id,
            question.scale.label(),
            question.text
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use eco::questionnaire::{compute_scores, AnswerSet};

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn result_lists_each_area_with_scores_out_of_max() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");
        let dob = NaiveDate::from_ymd_opt(1990, 5, 20).expect("valid date");
        let identity = Identity::new("Maria Oliveira", dob, today).expect("identity valid");
        let answers = AnswerSet::from([
            (1, 6),
            (3, 6),
            (5, 6),
            (7, 6),
            (9, 6),
            (11, 6),
            (13, 6),
            (15, 6),
            (16, 6),
        ]);
        let completed_at = Utc
            .with_ymd_and_hms(2025, 10, 1, 15, 0, 0)
            .single()
            .expect("valid instant");
        let result = AssessmentResult::new(identity, compute_scores(&answers), completed_at);

        let text = rendered(|out| super::result(out, &result, ScoringRuleTable::standard()));
        assert!(text.contains("Full name: Maria Oliveira"));
        assert!(text.contains("Completed at: 2025-10-01 15:00 UTC"));
        assert!(text.contains("Inclusion (Choleric)\n  Wanted Inclusion: 0/9\n  Expressed Inclusion: 9/9"));
        assert!(text.contains("Control (Melancholic)"));
    }

    #[test]
    fn question_shows_the_matching_option_set() {
        let catalog = QuestionCatalog::standard();
        let q17 = catalog.get(16).expect("question 17");
        let progress = Progress {
            answered: 16,
            total: 54,
            position: 17,
        };

        let text = rendered(|out| question(out, q17, progress));
        assert!(text.starts_with("Question 17 of 54 (16 answered)\n17. "));
        assert!(text.contains("  6 - A maioria"));
        assert!(!text.contains("Sempre"));
    }

    #[test]
    fn catalog_prints_both_scales_and_all_questions() {
        let text = rendered(|out| catalog(out, QuestionCatalog::standard()));
        assert!(text.contains("  1 - Nunca"));
        assert!(text.contains("  1 - Nenhuma"));
        assert_eq!(text.lines().filter(|line| line.contains("] ")).count(), 54);
    }

    #[test]
    fn catalog_right_aligns_question_numbers() {
        let text = rendered(|out| catalog(out, QuestionCatalog::standard()));
        assert!(text
            .lines()
            .any(|line| line == " 1. [Frequency] Eu tento estar com as pessoas"));
        assert!(text.lines().any(|line| line.starts_with("54. [")));
    }

    #[test]
    fn answered_count_flags_partial_sets() {
        assert_eq!(
            rendered(|out| answered_count(out, 54, 54)),
            "Answered all 54 questions\n"
        );
        assert!(rendered(|out| answered_count(out, 9, 54)).starts_with("Answered 9 of 54"));
    }
}
