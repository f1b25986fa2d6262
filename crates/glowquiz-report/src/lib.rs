//! glowquiz-report — HTML rendering of quiz questions and results.

pub mod html;
pub mod renderer;
