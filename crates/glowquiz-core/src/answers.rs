//! Captured answers, keyed by question id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// The answer captured for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Value token of the chosen option.
    Single(String),
    /// Value tokens of the checked options, in display order.
    Multi(Vec<String>),
}

impl Answer {
    /// All value tokens in this answer.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::Single(v) => vec![v.as_str()],
            Answer::Multi(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    /// Set membership. A single answer counts as a one-element set.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Answer::Single(v) => v == value,
            Answer::Multi(vs) => vs.iter().any(|v| v == value),
        }
    }

    /// Equality against a single-choice answer. Never true for multi answers.
    pub fn equals(&self, value: &str) -> bool {
        matches!(self, Answer::Single(v) if v == value)
    }
}

/// Mapping from question id to captured answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: QuestionId) -> Option<&Answer> {
        self.answers.get(&question)
    }

    /// Store an answer, replacing any earlier one for the same question.
    pub fn record(&mut self, question: QuestionId, answer: Answer) {
        self.answers.insert(question, answer);
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_and_equals() {
        let single = Answer::Single("oily".into());
        assert!(single.equals("oily"));
        assert!(single.contains("oily"));
        assert!(!single.equals("dry"));

        let multi = Answer::Multi(vec!["acne".into(), "aging".into()]);
        assert!(multi.contains("aging"));
        assert!(!multi.contains("redness"));
        assert!(!multi.equals("acne"));
    }

    #[test]
    fn record_replaces_previous() {
        let mut answers = AnswerSet::new();
        answers.record(1, Answer::Single("dry".into()));
        answers.record(1, Answer::Single("oily".into()));
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(1), Some(&Answer::Single("oily".into())));

        answers.clear();
        assert!(answers.is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let answers: AnswerSet = [
            (1, Answer::Single("oily".into())),
            (2, Answer::Multi(vec!["acne".into()])),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":"oily","2":["acne"]}"#);
    }
}
