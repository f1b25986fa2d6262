pub mod init;
pub mod recommend;
pub mod take;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use glowquiz_core::model::{ProductRecommendation, QuizDefinition};
use glowquiz_core::parser;
use glowquiz_core::report::QuizReport;
use glowquiz_report::html::write_html_report;

use crate::config::GlowquizConfig;

/// Load the quiz named on the command line, then the one in config, then the built-in one.
pub fn resolve_quiz(quiz: Option<&Path>, config: &GlowquizConfig) -> Result<QuizDefinition> {
    let path = quiz.or(config.quiz.as_deref());
    let definition = parser::load_quiz(path)?;

    for w in parser::validate_quiz(&definition) {
        match w.question_id {
            Some(id) => tracing::warn!(question = id, "{}", w.message),
            None => tracing::warn!("{}", w.message),
        }
    }

    Ok(definition)
}

/// Parse a format name, accepting the ones `allowed` lists plus "text".
pub fn check_format(format: &str, allowed: &[&str]) -> Result<()> {
    anyhow::ensure!(
        format == "text" || allowed.contains(&format),
        "unknown format '{}' (expected text, {})",
        format,
        allowed.join(", ")
    );
    Ok(())
}

pub fn print_recommendations(recommendations: &[ProductRecommendation]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Product", "Price", "Why"]);

    for (i, product) in recommendations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&product.name),
            Cell::new(&product.price),
            Cell::new(&product.description),
        ]);
    }

    println!("{table}");
}

/// Save a report in the requested formats. Returns the written paths.
pub fn save_outputs(report: &QuizReport, output: &Path, format: &str) -> Result<Vec<PathBuf>> {
    let formats: Vec<&str> = match format {
        "all" => vec!["json", "html"],
        "text" => vec![],
        other => vec![other],
    };
    if formats.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
    let mut written = Vec::new();

    for fmt in formats {
        match fmt {
            "json" => {
                let path = output.join(format!("results-{timestamp}.json"));
                report.save_json(&path)?;
                written.push(path);
            }
            "html" => {
                let path = output.join(format!("results-{timestamp}.html"));
                write_html_report(report, &path)?;
                written.push(path);
            }
            other => anyhow::bail!("unknown format: {other}"),
        }
    }

    Ok(written)
}
