//! Recommendation rules.
//!
//! A flat, ordered list of predicate/product pairs. Every rule whose
//! predicate matches the answers contributes its product, in rule order,
//! and a fallback rule tops the list up when too few rules fired.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::model::{ProductRecommendation, QuestionId};

/// Output length below which the fallback product is appended.
pub const DEFAULT_MIN_RESULTS: usize = 3;

/// A test against one question's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    /// Single-choice answer equals `value`.
    Equals { question: QuestionId, value: String },
    /// Answer set contains `value`.
    Contains { question: QuestionId, value: String },
}

impl Predicate {
    pub fn question(&self) -> QuestionId {
        match self {
            Predicate::Equals { question, .. } | Predicate::Contains { question, .. } => *question,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Predicate::Equals { value, .. } | Predicate::Contains { value, .. } => value,
        }
    }

    /// Unanswered questions never match.
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        let Some(answer) = answers.get(self.question()) else {
            return false;
        };
        match self {
            Predicate::Equals { value, .. } => answer.equals(value),
            Predicate::Contains { value, .. } => answer.contains(value),
        }
    }
}

/// A predicate paired with the product it recommends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub when: Predicate,
    pub product: ProductRecommendation,
}

impl RecommendationRule {
    pub fn equals(
        question: QuestionId,
        value: impl Into<String>,
        product: ProductRecommendation,
    ) -> Self {
        Self {
            when: Predicate::Equals {
                question,
                value: value.into(),
            },
            product,
        }
    }

    pub fn contains(
        question: QuestionId,
        value: impl Into<String>,
        product: ProductRecommendation,
    ) -> Self {
        Self {
            when: Predicate::Contains {
                question,
                value: value.into(),
            },
            product,
        }
    }
}

/// Product appended when fewer than `min_results` rules fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    #[serde(default = "default_min_results")]
    pub min_results: usize,
    pub product: ProductRecommendation,
}

fn default_min_results() -> usize {
    DEFAULT_MIN_RESULTS
}

/// The ordered rules of a quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<RecommendationRule>,
    #[serde(default)]
    pub fallback: Option<FallbackRule>,
}

impl RuleSet {
    /// Evaluate every rule against `answers`.
    ///
    /// Output order is rule order; duplicates are kept.
    pub fn evaluate(&self, answers: &AnswerSet) -> Vec<ProductRecommendation> {
        let mut recommendations: Vec<ProductRecommendation> = self
            .rules
            .iter()
            .filter(|rule| rule.when.matches(answers))
            .inspect(|rule| {
                tracing::debug!(
                    question = rule.when.question(),
                    value = rule.when.value(),
                    product = %rule.product.name,
                    "rule matched"
                )
            })
            .map(|rule| rule.product.clone())
            .collect();

        if let Some(fallback) = &self.fallback {
            if recommendations.len() < fallback.min_results {
                tracing::debug!(
                    matched = recommendations.len(),
                    min_results = fallback.min_results,
                    product = %fallback.product.name,
                    "appending fallback"
                );
                recommendations.push(fallback.product.clone());
            }
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;

    fn product(name: &str) -> ProductRecommendation {
        ProductRecommendation {
            name: name.into(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
        }
    }

    fn rules() -> RuleSet {
        RuleSet {
            rules: vec![
                RecommendationRule::equals(1, "oily", product("serum")),
                RecommendationRule::contains(2, "acne", product("patch")),
                RecommendationRule::contains(2, "aging", product("concentrate")),
                RecommendationRule::equals(3, "red", product("lipstick")),
            ],
            fallback: Some(FallbackRule {
                min_results: 3,
                product: product("blush"),
            }),
        }
    }

    fn names(recs: &[ProductRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_answers_yield_fallback_only() {
        let recs = rules().evaluate(&AnswerSet::new());
        assert_eq!(names(&recs), vec!["blush"]);
    }

    #[test]
    fn matches_keep_rule_order() {
        let answers: AnswerSet = [
            (2, Answer::Multi(vec!["aging".into(), "acne".into()])),
            (1, Answer::Single("oily".into())),
        ]
        .into_iter()
        .collect();
        let recs = rules().evaluate(&answers);
        assert_eq!(names(&recs), vec!["serum", "patch", "concentrate"]);
    }

    #[test]
    fn fallback_skipped_at_threshold() {
        let answers: AnswerSet = [
            (1, Answer::Single("oily".into())),
            (2, Answer::Multi(vec!["acne".into(), "aging".into()])),
            (3, Answer::Single("red".into())),
        ]
        .into_iter()
        .collect();
        let recs = rules().evaluate(&answers);
        assert_eq!(recs.len(), 4);
        assert!(!names(&recs).contains(&"blush"));
    }

    #[test]
    fn equals_does_not_match_multi() {
        let answers: AnswerSet = [(1, Answer::Multi(vec!["oily".into()]))].into_iter().collect();
        let pred = Predicate::Equals {
            question: 1,
            value: "oily".into(),
        };
        assert!(!pred.matches(&answers));
    }

    #[test]
    fn contains_matches_single_as_singleton() {
        let answers: AnswerSet = [(2, Answer::Single("acne".into()))].into_iter().collect();
        let pred = Predicate::Contains {
            question: 2,
            value: "acne".into(),
        };
        assert!(pred.matches(&answers));
    }

    #[test]
    fn duplicates_are_kept() {
        let set = RuleSet {
            rules: vec![
                RecommendationRule::equals(1, "oily", product("serum")),
                RecommendationRule::contains(1, "oily", product("serum")),
            ],
            fallback: None,
        };
        let answers: AnswerSet = [(1, Answer::Single("oily".into()))].into_iter().collect();
        assert_eq!(names(&set.evaluate(&answers)), vec!["serum", "serum"]);
    }

    #[test]
    fn no_fallback_can_be_empty() {
        let set = RuleSet::default();
        assert!(set.evaluate(&AnswerSet::new()).is_empty());
    }
}
