//! glowquiz-core — Quiz engine, answer capture, and recommendation rules.
//!
//! This crate holds the pure state of a quiz run: the question model, the
//! option widgets a user toggles, the navigation state machine, and the rule
//! evaluator that turns collected answers into product recommendations.
//! Rendering lives behind the [`session::QuizRenderer`] trait.

pub mod answers;
pub mod catalog;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod rules;
pub mod selection;
pub mod session;
