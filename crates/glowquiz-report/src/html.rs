//! HTML markup for quiz questions and results.
//!
//! Question and result fragments match the widget markup the quiz page
//! styles; `generate_html` wraps a finished report into a self-contained
//! page with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use glowquiz_core::model::{ProductRecommendation, QuestionKind};
use glowquiz_core::report::QuizReport;
use glowquiz_core::session::QuestionView;

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Markup for one question: prompt, one widget per option, and for
/// multi-choice questions a caption with the selection limit.
pub fn render_question(view: &QuestionView<'_>) -> String {
    let question = view.question;
    let input_type = match question.kind {
        QuestionKind::Single => "radio",
        QuestionKind::Multi { .. } => "checkbox",
    };

    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"question\" data-question=\"{}\">\n",
        question.id
    ));
    html.push_str(&format!("<h3>{}</h3>\n", html_escape(&question.prompt)));
    html.push_str("<div class=\"options\">\n");

    for option in &question.options {
        let checked = if view.selection.is_checked(&option.value) {
            " checked"
        } else {
            ""
        };
        let max = match question.kind {
            QuestionKind::Multi { max_select } => format!(" data-max=\"{max_select}\""),
            QuestionKind::Single => String::new(),
        };
        html.push_str(&format!(
            "<label class=\"option\"><input type=\"{}\" name=\"question-{}\" value=\"{}\"{}{}><span>{}</span></label>\n",
            input_type,
            question.id,
            html_escape(&option.value),
            checked,
            max,
            html_escape(&option.text),
        ));
    }

    if let QuestionKind::Multi { max_select } = question.kind {
        html.push_str(&format!(
            "<p class=\"checkbox-hint\">Choose up to {max_select} options</p>\n"
        ));
    }

    html.push_str("</div>\n</div>\n");

    let nav = view.navigation;
    html.push_str("<div class=\"quiz-nav\">\n");
    html.push_str(&format!(
        "<div class=\"progress\" style=\"width: {:.0}%\"></div>\n",
        nav.progress_percent()
    ));
    html.push_str(&format!(
        "<button id=\"prev-question\"{}>Previous</button>\n",
        if nav.previous_enabled() { "" } else { " disabled" }
    ));
    if nav.next_visible() {
        html.push_str("<button id=\"next-question\">Next</button>\n");
    } else {
        html.push_str("<button id=\"submit-quiz\">See my results</button>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Markup for the result cards, one per recommendation, in order.
pub fn render_results(recommendations: &[ProductRecommendation]) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"results-container\">\n");
    for product in recommendations {
        html.push_str("<div class=\"product-recommendation\">\n");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            html_escape(&product.image),
            html_escape(&product.name)
        ));
        html.push_str("<div class=\"product-info\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", html_escape(&product.name)));
        html.push_str(&format!("<p>{}</p>\n", html_escape(&product.description)));
        html.push_str(&format!(
            "<div class=\"product-price\">{}</div>\n",
            html_escape(&product.price)
        ));
        html.push_str("</div>\n</div>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Generate a standalone results page from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} - your results</title>\n",
        html_escape(&report.quiz.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.quiz.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} of {} questions answered | {}</p>\n",
        report.answers.len(),
        report.quiz.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"recommendations\">\n");
    html.push_str("<h2>Recommended for you</h2>\n");
    html.push_str(&render_results(&report.recommendations));
    html.push_str("</section>\n");

    if !report.answers.is_empty() {
        html.push_str("<section class=\"answers\">\n");
        html.push_str("<details>\n<summary>Your answers</summary>\n<dl>\n");
        for answer in &report.answers {
            html.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>\n",
                html_escape(&answer.prompt),
                html_escape(&answer.labels.join(", "))
            ));
        }
        html.push_str("</dl>\n</details>\n</section>\n");
    }

    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML results page to a file.
pub fn write_html_report(report: &QuizReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff8f6; --fg: #2d1b1e; --card: #ffffff; --accent: #d6457a; --border: #f3d9e0; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #1c1214; --fg: #fbeef1; --card: #2a1b1f; --accent: #f07aa3; --border: #3d262c; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1 { color: var(--accent); }
.meta { color: #8a6d74; }
.results-container { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.product-recommendation { background: var(--card); border: 1px solid var(--border); border-radius: 12px; overflow: hidden; }
.product-recommendation img { width: 100%; height: 220px; object-fit: cover; }
.product-info { padding: 1rem; }
.product-info h3 { margin: 0 0 0.5rem; font-size: 1.05rem; }
.product-price { font-weight: bold; color: var(--accent); }
details { margin: 2rem 0; }
summary { cursor: pointer; font-weight: bold; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
dt { font-weight: bold; margin-top: 0.75rem; }
dd { margin-left: 1rem; }
"#;
