//! Checked state of the option widgets for the question on screen.
//!
//! A [`Selection`] is what a renderer draws and what answer capture reads.
//! The max-selection limit is enforced here, at the moment an option is
//! toggled, so the visible state can never exceed it.

use crate::answers::Answer;
use crate::error::QuizError;
use crate::model::{Question, QuestionId, QuestionKind};

/// Result of toggling one option widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The option is now checked.
    Checked,
    /// The option is now unchecked.
    Unchecked,
    /// Checking would have exceeded `max_select`; the widget was reverted.
    Rejected { max_select: usize },
}

/// Widget state for one question, in option display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    question: QuestionId,
    kind: QuestionKind,
    values: Vec<String>,
    checked: Vec<bool>,
}

impl Selection {
    /// Fresh widgets for `question`, pre-marked from a previously captured answer.
    pub fn for_question(question: &Question, prior: Option<&Answer>) -> Self {
        let mut selection = Self {
            question: question.id,
            kind: question.kind,
            values: question.options.iter().map(|o| o.value.clone()).collect(),
            checked: vec![false; question.options.len()],
        };

        if let Some(answer) = prior {
            let limit = question.max_select();
            for value in answer.values().into_iter().take(limit) {
                match selection.index_of(value) {
                    Some(i) => selection.checked[i] = true,
                    None => tracing::warn!(
                        question = question.id,
                        value,
                        "stored answer is not an option, not pre-marking"
                    ),
                }
            }
        }

        selection
    }

    pub fn question(&self) -> QuestionId {
        self.question
    }

    /// Flip one option. Radio widgets cannot be unchecked by toggling.
    pub fn toggle(&mut self, value: &str) -> Result<SelectionOutcome, QuizError> {
        let i = self.require(value)?;
        let target = match self.kind {
            QuestionKind::Single => true,
            QuestionKind::Multi { .. } => !self.checked[i],
        };
        self.set_checked(value, target)
    }

    /// Set one option's checked state the way a click on it would.
    pub fn set_checked(&mut self, value: &str, checked: bool) -> Result<SelectionOutcome, QuizError> {
        let i = self.require(value)?;

        match self.kind {
            QuestionKind::Single => {
                if checked {
                    self.checked.iter_mut().for_each(|c| *c = false);
                    self.checked[i] = true;
                    Ok(SelectionOutcome::Checked)
                } else if self.checked[i] {
                    // Radios stay checked until another option in the group is picked.
                    Ok(SelectionOutcome::Checked)
                } else {
                    Ok(SelectionOutcome::Unchecked)
                }
            }
            QuestionKind::Multi { max_select } => {
                if !checked {
                    self.checked[i] = false;
                    return Ok(SelectionOutcome::Unchecked);
                }
                if self.checked[i] {
                    return Ok(SelectionOutcome::Checked);
                }
                if self.checked_count() >= max_select {
                    tracing::debug!(
                        question = self.question,
                        value,
                        max_select,
                        "selection limit reached, reverting"
                    );
                    return Ok(SelectionOutcome::Rejected { max_select });
                }
                self.checked[i] = true;
                Ok(SelectionOutcome::Checked)
            }
        }
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.index_of(value).is_some_and(|i| self.checked[i])
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Checked value tokens in display order.
    pub fn checked_values(&self) -> Vec<&str> {
        self.values
            .iter()
            .zip(&self.checked)
            .filter(|(_, c)| **c)
            .map(|(v, _)| v.as_str())
            .collect()
    }

    /// Read the widgets into an answer. `None` when nothing is checked.
    pub fn capture(&self) -> Option<Answer> {
        let values = self.checked_values();
        if values.is_empty() {
            return None;
        }
        match self.kind {
            QuestionKind::Single => Some(Answer::Single(values[0].to_string())),
            QuestionKind::Multi { .. } => Some(Answer::Multi(
                values.into_iter().map(str::to_string).collect(),
            )),
        }
    }

    /// Uncheck every widget.
    pub fn clear(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = false);
    }

    fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    fn require(&self, value: &str) -> Result<usize, QuizError> {
        self.index_of(value).ok_or_else(|| QuizError::UnknownOption {
            question: self.question,
            value: value.to_string(),
        })
    }
}
