//! The `glowquiz recommend` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use glowquiz_core::answers::AnswerSet;
use glowquiz_core::model::{QuestionId, QuizDefinition};
use glowquiz_core::report::QuizReport;
use glowquiz_core::selection::{Selection, SelectionOutcome};
use glowquiz_report::html::generate_html;

use crate::config::load_config_from;

pub fn execute(
    quiz_path: Option<PathBuf>,
    answer_args: Vec<String>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    // recommend never writes files; a configured "all" prints the table.
    let format = format.unwrap_or_else(|| match config.default_format.as_str() {
        "all" => "text".to_string(),
        other => other.to_string(),
    });
    super::check_format(&format, &["json", "html"])?;

    let quiz = super::resolve_quiz(quiz_path.as_deref(), &config)?;
    let answers = parse_answers(&quiz, &answer_args)?;
    let recommendations = quiz.rules.evaluate(&answers);

    match format.as_str() {
        "json" => {
            let report = QuizReport::new(&quiz, &answers, &recommendations);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "html" => {
            let report = QuizReport::new(&quiz, &answers, &recommendations);
            println!("{}", generate_html(&report));
        }
        _ => super::print_recommendations(&recommendations),
    }

    Ok(())
}

/// Build an answer set from `ID=VALUE[,VALUE...]` arguments.
///
/// Values go through the same option widgets the interactive quiz uses, so
/// unknown options and over-limit selections are refused.
fn parse_answers(quiz: &QuizDefinition, args: &[String]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();

    for arg in args {
        let (id, values) = arg
            .split_once('=')
            .with_context(|| format!("invalid answer '{arg}', expected ID=VALUE[,VALUE...]"))?;
        let id: QuestionId = id
            .trim()
            .parse()
            .with_context(|| format!("invalid question id in '{arg}'"))?;
        let question = quiz
            .question(id)
            .with_context(|| format!("quiz '{}' has no question {id}", quiz.id))?;

        let values: Vec<&str> = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect();
        if !question.is_multi() && values.len() > 1 {
            anyhow::bail!("question {id} takes a single answer, got {}", values.len());
        }

        let mut selection = Selection::for_question(question, None);
        for value in values {
            if let SelectionOutcome::Rejected { max_select } = selection.set_checked(value, true)? {
                anyhow::bail!("question {id} accepts at most {max_select} answers");
            }
        }

        match selection.capture() {
            Some(answer) => answers.record(id, answer),
            None => tracing::warn!(question = id, "no values given, leaving unanswered"),
        }
    }

    Ok(answers)
}
