//! A [`QuizRenderer`] that keeps the markup a page would display.

use glowquiz_core::model::ProductRecommendation;
use glowquiz_core::session::{QuestionView, QuizRenderer};

use crate::html;

/// Which screen of the quiz page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Questions,
    Results,
}

/// Holds the question and results containers as HTML strings.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    screen: Screen,
    question_markup: String,
    results_markup: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            screen: Screen::Start,
            question_markup: String::new(),
            results_markup: String::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Contents of the question container.
    pub fn question_markup(&self) -> &str {
        &self.question_markup
    }

    /// Contents of the results container.
    pub fn results_markup(&self) -> &str {
        &self.results_markup
    }
}

impl QuizRenderer for HtmlRenderer {
    fn render_question(&mut self, view: &QuestionView<'_>) {
        self.screen = Screen::Questions;
        self.question_markup = html::render_question(view);
    }

    fn render_results(&mut self, recommendations: &[ProductRecommendation]) {
        self.screen = Screen::Results;
        self.results_markup = html::render_results(recommendations);
    }

    fn reset(&mut self) {
        self.screen = Screen::Start;
        self.question_markup.clear();
        self.results_markup.clear();
    }
}
