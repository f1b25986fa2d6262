//! The `glowquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quiz = glowquiz_core::parser::parse_quiz(&quiz_path)?;

    println!(
        "Quiz: {} ({} questions, {} rules)",
        quiz.title,
        quiz.question_count(),
        quiz.rules.rules.len()
    );

    let warnings = glowquiz_core::parser::validate_quiz(&quiz);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [q{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
