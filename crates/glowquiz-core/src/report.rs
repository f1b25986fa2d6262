//! Quiz result report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answers::AnswerSet;
use crate::model::{ProductRecommendation, QuestionId, QuizDefinition};

/// The outcome of one completed quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the quiz was submitted.
    pub created_at: DateTime<Utc>,
    pub quiz: QuizSummary,
    /// Answered questions, in quiz order.
    pub answers: Vec<AnsweredQuestion>,
    /// Recommendations in evaluator order.
    pub recommendations: Vec<ProductRecommendation>,
}

/// Summary of a quiz (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question_id: QuestionId,
    pub prompt: String,
    /// Value tokens.
    pub values: Vec<String>,
    /// Display text of the chosen options.
    pub labels: Vec<String>,
}

impl QuizReport {
    pub fn new(
        quiz: &QuizDefinition,
        answers: &AnswerSet,
        recommendations: &[ProductRecommendation],
    ) -> Self {
        let answers = quiz
            .questions
            .iter()
            .filter_map(|q| {
                let answer = answers.get(q.id)?;
                let values: Vec<String> = answer.values().into_iter().map(String::from).collect();
                let labels = values
                    .iter()
                    .map(|v| q.option(v).map_or_else(|| v.clone(), |o| o.text.clone()))
                    .collect();
                Some(AnsweredQuestion {
                    question_id: q.id,
                    prompt: q.prompt.clone(),
                    values,
                    labels,
                })
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz: QuizSummary {
                id: quiz.id.clone(),
                title: quiz.title.clone(),
                question_count: quiz.question_count(),
            },
            answers,
            recommendations: recommendations.to_vec(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
