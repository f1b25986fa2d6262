//! Quiz session state machine.
//!
//! A [`QuizSession`] owns the answers and the current position for one run
//! through a quiz. The host UI forwards its start / next / previous /
//! submit / retake triggers and option clicks; the session captures answers,
//! moves between questions, and calls back into a [`QuizRenderer`] to draw.
//!
//! None of the transitions can fail. A trigger that does not apply in the
//! current phase (previous on the first question, next on the last one,
//! submit before the end) returns `false` and changes nothing.

use crate::answers::AnswerSet;
use crate::error::QuizError;
use crate::model::{ProductRecommendation, Question, QuizDefinition};
use crate::selection::{Selection, SelectionOutcome};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress { index: usize },
    Completed,
}

/// Position within the question list plus the control flags derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub index: usize,
    pub question_count: usize,
}

impl NavigationState {
    pub fn previous_enabled(&self) -> bool {
        self.index > 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.question_count
    }

    /// The next and submit controls are never shown together.
    pub fn next_visible(&self) -> bool {
        !self.is_last()
    }

    pub fn submit_visible(&self) -> bool {
        self.is_last()
    }

    /// Progress bar fill, 0-100.
    pub fn progress_percent(&self) -> f64 {
        if self.question_count == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.question_count as f64 * 100.0
    }
}

/// Everything a renderer needs to draw the current question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub selection: &'a Selection,
    pub navigation: NavigationState,
}

/// Rendering surface driven by a session.
pub trait QuizRenderer {
    /// Draw a question with its widgets pre-marked from `view.selection`.
    fn render_question(&mut self, view: &QuestionView<'_>);

    /// Draw the result cards, in order.
    fn render_results(&mut self, recommendations: &[ProductRecommendation]);

    /// Return to the start screen with all widgets unselected.
    fn reset(&mut self) {}
}

/// Renderer that draws nothing, for headless use.
pub struct NoopRenderer;

impl QuizRenderer for NoopRenderer {
    fn render_question(&mut self, _: &QuestionView<'_>) {}
    fn render_results(&mut self, _: &[ProductRecommendation]) {}
}

/// One run through a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    definition: QuizDefinition,
    phase: QuizPhase,
    answers: AnswerSet,
    selection: Option<Selection>,
    results: Vec<ProductRecommendation>,
}

impl QuizSession {
    pub fn new(definition: QuizDefinition) -> Self {
        Self {
            definition,
            phase: QuizPhase::NotStarted,
            answers: AnswerSet::new(),
            selection: None,
            results: Vec::new(),
        }
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Widgets of the question on screen.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Recommendations from the last submission. Empty until completed.
    pub fn results(&self) -> &[ProductRecommendation] {
        &self.results
    }

    pub fn navigation(&self) -> Option<NavigationState> {
        match self.phase {
            QuizPhase::InProgress { index } => Some(NavigationState {
                index,
                question_count: self.definition.question_count(),
            }),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.navigation()
            .and_then(|nav| self.definition.questions.get(nav.index))
    }

    /// Leave the start screen and show the first question.
    pub fn start(&mut self, renderer: &mut dyn QuizRenderer) -> bool {
        if self.phase != QuizPhase::NotStarted {
            return false;
        }
        if self.definition.questions.is_empty() {
            tracing::warn!(quiz = %self.definition.id, "quiz has no questions, not starting");
            return false;
        }
        tracing::debug!(quiz = %self.definition.id, "quiz started");
        self.show(0, renderer);
        true
    }

    /// Click on an option widget of the current question.
    pub fn toggle(&mut self, value: &str) -> Result<SelectionOutcome, QuizError> {
        self.selection
            .as_mut()
            .ok_or(QuizError::NotInProgress)?
            .toggle(value)
    }

    /// Set an option widget's checked state directly.
    pub fn set_checked(&mut self, value: &str, checked: bool) -> Result<SelectionOutcome, QuizError> {
        self.selection
            .as_mut()
            .ok_or(QuizError::NotInProgress)?
            .set_checked(value, checked)
    }

    /// Capture the current answer and advance one question.
    pub fn next(&mut self, renderer: &mut dyn QuizRenderer) -> bool {
        let Some(nav) = self.navigation() else {
            return false;
        };
        if !nav.next_visible() {
            return false;
        }
        self.capture();
        self.show(nav.index + 1, renderer);
        true
    }

    /// Capture the current answer and go back one question.
    pub fn previous(&mut self, renderer: &mut dyn QuizRenderer) -> bool {
        let Some(nav) = self.navigation() else {
            return false;
        };
        if !nav.previous_enabled() {
            return false;
        }
        self.capture();
        self.show(nav.index - 1, renderer);
        true
    }

    /// Capture the last answer, evaluate the rules, and show the results.
    pub fn submit(&mut self, renderer: &mut dyn QuizRenderer) -> bool {
        let Some(nav) = self.navigation() else {
            return false;
        };
        if !nav.submit_visible() {
            return false;
        }
        self.capture();
        self.results = self.definition.rules.evaluate(&self.answers);
        self.selection = None;
        self.phase = QuizPhase::Completed;
        tracing::info!(
            quiz = %self.definition.id,
            answered = self.answers.len(),
            recommendations = self.results.len(),
            "quiz completed"
        );
        renderer.render_results(&self.results);
        true
    }

    /// Discard all answers and return to the start screen.
    pub fn retake(&mut self, renderer: &mut dyn QuizRenderer) -> bool {
        if self.phase == QuizPhase::NotStarted {
            return false;
        }
        self.answers.clear();
        self.results.clear();
        self.selection = None;
        self.phase = QuizPhase::NotStarted;
        tracing::debug!(quiz = %self.definition.id, "quiz reset");
        renderer.reset();
        true
    }

    fn capture(&mut self) {
        let Some(selection) = &self.selection else {
            return;
        };
        match selection.capture() {
            Some(answer) => self.answers.record(selection.question(), answer),
            None => tracing::debug!(
                question = selection.question(),
                "nothing selected, keeping previous answer"
            ),
        }
    }

    fn show(&mut self, index: usize, renderer: &mut dyn QuizRenderer) {
        let question = &self.definition.questions[index];
        let selection = Selection::for_question(question, self.answers.get(question.id));
        self.phase = QuizPhase::InProgress { index };

        let view = QuestionView {
            question,
            selection: &selection,
            navigation: NavigationState {
                index,
                question_count: self.definition.question_count(),
            },
        };
        renderer.render_question(&view);
        self.selection = Some(selection);
    }
}
