//! TOML quiz file parser.
//!
//! Loads quiz definitions from TOML files, validates them, and writes them
//! back out (used by `glowquiz init` to export the built-in quiz).

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::{
    KindKeyword, ProductRecommendation, Question, QuestionId, QuestionKind, QuizDefinition,
    QuizOption,
};
use crate::rules::{FallbackRule, Predicate, RecommendationRule, RuleSet};

/// Intermediate TOML structure for quiz files.
#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    rules: Vec<TomlRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<FallbackRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuestion {
    id: QuestionId,
    prompt: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_select: Option<usize>,
    #[serde(default)]
    options: Vec<QuizOption>,
}

fn default_kind() -> String {
    "single".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlRule {
    question: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    equals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contains: Option<String>,
    product: ProductRecommendation,
}

/// Parse a single TOML file into a `QuizDefinition`.
pub fn parse_quiz(path: &Path) -> Result<QuizDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `QuizDefinition` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizDefinition> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let keyword: KindKeyword = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            let kind = match keyword {
                KindKeyword::Single => {
                    if q.max_select.is_some() {
                        tracing::warn!(question = q.id, "max_select ignored on single-choice question");
                    }
                    QuestionKind::Single
                }
                KindKeyword::Multi => {
                    let Some(max_select) = q.max_select else {
                        anyhow::bail!("question {}: multi-choice question needs max_select", q.id);
                    };
                    QuestionKind::Multi { max_select }
                }
            };

            Ok(Question {
                id: q.id,
                prompt: q.prompt,
                kind,
                options: q.options,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let rules = parsed
        .rules
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let when = match (r.equals, r.contains) {
                (Some(value), None) => Predicate::Equals {
                    question: r.question,
                    value,
                },
                (None, Some(value)) => Predicate::Contains {
                    question: r.question,
                    value,
                },
                _ => anyhow::bail!(
                    "rule #{} ({}): exactly one of `equals` or `contains` is required",
                    i + 1,
                    r.product.name
                ),
            };
            Ok(RecommendationRule {
                when,
                product: r.product,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuizDefinition {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        questions,
        rules: RuleSet {
            rules,
            fallback: parsed.fallback,
        },
    })
}

/// Load the quiz at `path`, or the built-in skincare quiz when `None`.
pub fn load_quiz(path: Option<&Path>) -> Result<QuizDefinition> {
    match path {
        Some(p) => parse_quiz(p),
        None => Ok(catalog::skincare()),
    }
}

/// Serialize a quiz definition in the file format `parse_quiz` reads.
pub fn to_toml(quiz: &QuizDefinition) -> Result<String> {
    let file = TomlQuizFile {
        quiz: TomlQuizHeader {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
        },
        questions: quiz
            .questions
            .iter()
            .map(|q| TomlQuestion {
                id: q.id,
                prompt: q.prompt.clone(),
                kind: q.kind.to_string(),
                max_select: match q.kind {
                    QuestionKind::Single => None,
                    QuestionKind::Multi { max_select } => Some(max_select),
                },
                options: q.options.clone(),
            })
            .collect(),
        rules: quiz
            .rules
            .rules
            .iter()
            .map(|r| {
                let (equals, contains) = match &r.when {
                    Predicate::Equals { value, .. } => (Some(value.clone()), None),
                    Predicate::Contains { value, .. } => (None, Some(value.clone())),
                };
                TomlRule {
                    question: r.when.question(),
                    equals,
                    contains,
                    product: r.product.clone(),
                }
            })
            .collect(),
        fallback: quiz.rules.fallback.clone(),
    };

    toml::to_string_pretty(&file).context("failed to serialize quiz to TOML")
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<QuestionId>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz definition for common issues.
pub fn validate_quiz(quiz: &QuizDefinition) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz has no questions".into(),
        });
    }

    // Check for duplicate question IDs
    let mut seen_ids = HashSet::new();
    for q in &quiz.questions {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &quiz.questions {
        let warn = |message: String| ValidationWarning {
            question_id: Some(q.id),
            message,
        };

        if q.prompt.trim().is_empty() {
            warnings.push(warn("prompt is empty".into()));
        }
        if q.options.is_empty() {
            warnings.push(warn("question has no options".into()));
        }

        let mut seen_values = HashSet::new();
        for o in &q.options {
            if !seen_values.insert(o.value.as_str()) {
                warnings.push(warn(format!("duplicate option value: {}", o.value)));
            }
        }

        if let QuestionKind::Multi { max_select } = q.kind {
            if max_select == 0 {
                warnings.push(warn("max_select is 0, nothing can be selected".into()));
            } else if max_select > q.options.len() && !q.options.is_empty() {
                warnings.push(warn(format!(
                    "max_select {} exceeds option count {}",
                    max_select,
                    q.options.len()
                )));
            }
        }
    }

    for rule in &quiz.rules.rules {
        let qid = rule.when.question();
        let Some(q) = quiz.question(qid) else {
            warnings.push(ValidationWarning {
                question_id: Some(qid),
                message: format!("rule for '{}' references unknown question", rule.product.name),
            });
            continue;
        };

        if q.option(rule.when.value()).is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(qid),
                message: format!(
                    "rule for '{}' tests '{}', which is not an option",
                    rule.product.name,
                    rule.when.value()
                ),
            });
        }

        match (&rule.when, q.is_multi()) {
            (Predicate::Equals { .. }, true) => warnings.push(ValidationWarning {
                question_id: Some(qid),
                message: format!(
                    "rule for '{}' uses `equals` on a multi-choice question and never matches",
                    rule.product.name
                ),
            }),
            (Predicate::Contains { .. }, false) => warnings.push(ValidationWarning {
                question_id: Some(qid),
                message: format!(
                    "rule for '{}' uses `contains` on a single-choice question; prefer `equals`",
                    rule.product.name
                ),
            }),
            _ => {}
        }
    }

    if quiz.rules.fallback.is_none() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "no fallback rule; a sparse quiz can produce no recommendations".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[quiz]
id = "mini"
title = "Mini Quiz"
description = "Two questions"

[[questions]]
id = 1
prompt = "Skin type?"
type = "radio"
options = [
    { value = "dry", text = "Dry" },
    { value = "oily", text = "Oily" },
]

[[questions]]
id = 2
prompt = "Concerns?"
type = "checkbox"
max_select = 2
options = [
    { value = "acne", text = "Acne" },
    { value = "aging", text = "Aging" },
    { value = "redness", text = "Redness" },
]

[[rules]]
question = 1
equals = "oily"
[rules.product]
name = "Oil Control Serum"
price = "Rp 100.000"

[[rules]]
question = 2
contains = "acne"
[rules.product]
name = "Acne Patch"

[fallback]
[fallback.product]
name = "Blush"
"#;

    #[test]
    fn parse_valid_toml() {
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("mini.toml")).unwrap();
        assert_eq!(quiz.id, "mini");
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].kind, QuestionKind::Single);
        assert_eq!(quiz.questions[1].kind, QuestionKind::Multi { max_select: 2 });
        assert_eq!(quiz.rules.rules.len(), 2);
        assert_eq!(
            quiz.rules.rules[1].when,
            Predicate::Contains {
                question: 2,
                value: "acne".into()
            }
        );
        let fallback = quiz.rules.fallback.as_ref().unwrap();
        assert_eq!(fallback.min_results, 3);
        assert_eq!(fallback.product.name, "Blush");
        assert!(validate_quiz(&quiz).is_empty());
    }

    #[test]
    fn multi_without_max_select_fails() {
        let toml = r#"
[quiz]
id = "bad"
title = "Bad"

[[questions]]
id = 1
prompt = "Pick some"
type = "multi"
options = [{ value = "a", text = "A" }]
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("max_select"));
    }

    #[test]
    fn unknown_type_fails() {
        let toml = r#"
[quiz]
id = "bad"
title = "Bad"

[[questions]]
id = 1
prompt = "Slide"
type = "slider"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown question type"));
    }

    #[test]
    fn rule_needs_exactly_one_predicate() {
        let toml = r#"
[quiz]
id = "bad"
title = "Bad"

[[rules]]
question = 1
equals = "a"
contains = "b"
[rules.product]
name = "Thing"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_quiz_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_reports_problems() {
        let toml = r#"
[quiz]
id = "warn"
title = "Warnings"

[[questions]]
id = 1
prompt = ""
options = [{ value = "a", text = "A" }, { value = "a", text = "A again" }]

[[questions]]
id = 1
prompt = "Many"
type = "multi"
max_select = 5
options = [{ value = "x", text = "X" }]

[[rules]]
question = 9
equals = "a"
[rules.product]
name = "Ghost"

[[rules]]
question = 1
equals = "zzz"
[rules.product]
name = "Missing"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("warn.toml")).unwrap();
        let messages: Vec<String> = validate_quiz(&quiz).into_iter().map(|w| w.message).collect();
        let has = |s: &str| messages.iter().any(|m| m.contains(s));
        assert!(has("duplicate question ID"));
        assert!(has("prompt is empty"));
        assert!(has("duplicate option value"));
        assert!(has("exceeds option count"));
        assert!(has("unknown question"));
        assert!(has("not an option"));
        assert!(has("no fallback"));
    }

    #[test]
    fn validate_predicate_kind_mismatch() {
        let toml = r#"
[quiz]
id = "mismatch"
title = "Mismatch"

[[questions]]
id = 1
prompt = "Concerns"
type = "multi"
max_select = 2
options = [{ value = "acne", text = "Acne" }, { value = "aging", text = "Aging" }]

[[rules]]
question = 1
equals = "acne"
[rules.product]
name = "Patch"

[fallback]
min_results = 1
[fallback.product]
name = "Blush"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("mismatch.toml")).unwrap();
        let warnings = validate_quiz(&quiz);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("never matches"));
    }

    #[test]
    fn builtin_quiz_survives_toml_export() {
        let builtin = catalog::skincare();
        let text = to_toml(&builtin).unwrap();
        let parsed = parse_quiz_str(&text, &PathBuf::from("skincare.toml")).unwrap();

        assert_eq!(parsed.id, builtin.id);
        assert_eq!(parsed.question_count(), builtin.question_count());
        assert_eq!(parsed.rules, builtin.rules);
        for (a, b) in parsed.questions.iter().zip(&builtin.questions) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.options, b.options);
        }
    }

    #[test]
    fn load_quiz_defaults_to_builtin() {
        let quiz = load_quiz(None).unwrap();
        assert_eq!(quiz.id, "skincare");
    }

    #[test]
    fn load_quiz_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let quiz = load_quiz(Some(&path)).unwrap();
        assert_eq!(quiz.title, "Mini Quiz");
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_quiz(Some(Path::new("does-not-exist.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read quiz file"));
    }
}
