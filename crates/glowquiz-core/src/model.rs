//! Core data model types for glowquiz.
//!
//! Questions, their options, and the product records the rule evaluator
//! emits. All of these are defined once when a quiz is loaded and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rules::RuleSet;

/// Numeric identifier of a question, used as the answer key.
pub type QuestionId = u32;

/// One selectable choice within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Token stored in the answer set when this option is chosen.
    pub value: String,
    /// Label shown next to the widget.
    pub text: String,
}

impl QuizOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Whether a question takes one answer or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exclusive choice, rendered as radio buttons.
    Single,
    /// Up to `max_select` choices, rendered as checkboxes.
    Multi { max_select: usize },
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Single => write!(f, "single"),
            QuestionKind::Multi { .. } => write!(f, "multi"),
        }
    }
}

/// The kind keyword as written in quiz files, before `max_select` is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindKeyword {
    Single,
    Multi,
}

impl FromStr for KindKeyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "radio" => Ok(KindKeyword::Single),
            "multi" | "checkbox" => Ok(KindKeyword::Multi),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// A quiz question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Prompt text shown above the options.
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Options in display order.
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Maximum number of options that may be checked at once.
    pub fn max_select(&self) -> usize {
        match self.kind {
            QuestionKind::Single => 1,
            QuestionKind::Multi { max_select } => max_select,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.kind, QuestionKind::Multi { .. })
    }

    /// Position of the option carrying `value`, if any.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// A product card shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display string, e.g. "Rp 180.000".
    #[serde(default)]
    pub price: String,
    /// Image URL or path.
    #[serde(default)]
    pub image: String,
}

/// A complete quiz: its questions and the rules that score them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    pub rules: RuleSet,
}

impl QuizDefinition {
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
