//! The `glowquiz take` command.
//!
//! Reads one command per line from stdin and forwards it to a quiz session:
//! `start`, an option number or value to toggle it, `next`, `prev`,
//! `submit`, `retake`, `help`, `quit`.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Result;

use glowquiz_core::model::ProductRecommendation;
use glowquiz_core::report::QuizReport;
use glowquiz_core::selection::SelectionOutcome;
use glowquiz_core::session::{QuestionView, QuizPhase, QuizRenderer, QuizSession};

use crate::config::load_config_from;

/// Prints questions and result tables to stdout.
struct TerminalRenderer;

impl QuizRenderer for TerminalRenderer {
    fn render_question(&mut self, view: &QuestionView<'_>) {
        let nav = view.navigation;
        println!();
        println!(
            "Question {}/{} ({:.0}%)",
            nav.index + 1,
            nav.question_count,
            nav.progress_percent()
        );
        println!("{}", view.question.prompt);

        let multi = view.question.is_multi();
        for (i, option) in view.question.options.iter().enumerate() {
            let checked = view.selection.is_checked(&option.value);
            let mark = match (multi, checked) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(*)",
                (false, false) => "( )",
            };
            println!("  {mark} {}. {}", i + 1, option.text);
        }
        if multi {
            println!("  Choose up to {} options", view.question.max_select());
        }

        let mut controls = Vec::new();
        if nav.previous_enabled() {
            controls.push("prev");
        }
        if nav.next_visible() {
            controls.push("next");
        }
        if nav.submit_visible() {
            controls.push("submit");
        }
        println!("[{}]", controls.join(" | "));
    }

    fn render_results(&mut self, recommendations: &[ProductRecommendation]) {
        println!("\nYour recommendations:");
        super::print_recommendations(recommendations);
        println!("[retake | quit]");
    }

    fn reset(&mut self) {
        println!("\nAnswers cleared. Type 'start' to begin again.");
    }
}

pub fn execute(
    quiz_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or_else(|| config.default_format.clone());
    super::check_format(&format, &["json", "html", "all"])?;
    let output = output.unwrap_or_else(|| config.output_dir.clone());

    let quiz = super::resolve_quiz(quiz_path.as_deref(), &config)?;
    let stdin = std::io::stdin();
    run(QuizSession::new(quiz), stdin.lock(), &output, &format)
}

fn run(mut session: QuizSession, input: impl BufRead, output: &Path, format: &str) -> Result<()> {
    let mut renderer = TerminalRenderer;

    println!("{}", session.definition().title);
    if !session.definition().description.is_empty() {
        println!("{}", session.definition().description);
    }
    println!("Type 'start' to begin, 'help' for commands.");

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command {
            "start" => {
                if !session.start(&mut renderer) {
                    println!("The quiz is already running.");
                }
            }
            "next" | "n" => {
                if !session.next(&mut renderer) {
                    println!("{}", unavailable(&session, "next"));
                }
            }
            "prev" | "previous" | "p" => {
                if !session.previous(&mut renderer) {
                    println!("{}", unavailable(&session, "prev"));
                }
            }
            "submit" | "s" => {
                if session.submit(&mut renderer) {
                    let report =
                        QuizReport::new(session.definition(), session.answers(), session.results());
                    for path in super::save_outputs(&report, output, format)? {
                        println!("Saved: {}", path.display());
                    }
                } else {
                    println!("{}", unavailable(&session, "submit"));
                }
            }
            "retake" | "r" => {
                if !session.retake(&mut renderer) {
                    println!("Nothing to retake yet.");
                }
            }
            "help" | "h" | "?" => print_help(),
            "quit" | "q" | "exit" => break,
            choice => toggle(&mut session, choice),
        }
    }

    Ok(())
}

fn toggle(session: &mut QuizSession, choice: &str) {
    // Option numbers are 1-based; anything else is treated as a value token.
    let value = match (choice.parse::<usize>(), session.current_question()) {
        (Ok(n), Some(q)) if n >= 1 && n <= q.options.len() => q.options[n - 1].value.clone(),
        _ => choice.to_string(),
    };

    match session.toggle(&value) {
        Ok(SelectionOutcome::Rejected { max_select }) => {
            println!("You can choose at most {max_select} options.");
        }
        Ok(_) => {
            if let Some(selection) = session.selection() {
                let checked = selection.checked_values();
                if checked.is_empty() {
                    println!("Selected: (none)");
                } else {
                    println!("Selected: {}", checked.join(", "));
                }
            }
        }
        Err(e) => println!("{e}. Type 'help' for commands."),
    }
}

fn unavailable(session: &QuizSession, command: &str) -> String {
    match (session.phase(), session.navigation()) {
        (QuizPhase::NotStarted, _) => "Type 'start' to begin.".to_string(),
        (QuizPhase::Completed, _) => "The quiz is finished. Type 'retake' to start over.".to_string(),
        (QuizPhase::InProgress { .. }, Some(nav)) => match command {
            "prev" if !nav.previous_enabled() => "Already at the first question.".to_string(),
            "next" if !nav.next_visible() => "This is the last question. Type 'submit'.".to_string(),
            "submit" if !nav.submit_visible() => "Answer the remaining questions first.".to_string(),
            _ => format!("'{command}' is not available right now."),
        },
        (QuizPhase::InProgress { .. }, None) => format!("'{command}' is not available right now."),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  start          begin the quiz");
    println!("  <number>       toggle that option (or type the option value)");
    println!("  next, n        save this answer and go to the next question");
    println!("  prev, p        save this answer and go back");
    println!("  submit, s      see your recommendations (last question)");
    println!("  retake, r      clear all answers and start over");
    println!("  quit, q        leave");
}
