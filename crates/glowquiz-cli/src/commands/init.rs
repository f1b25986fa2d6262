//! The `glowquiz init` command.

use std::path::Path;

use anyhow::Result;

use glowquiz_core::{catalog, parser};

pub fn execute() -> Result<()> {
    if Path::new("glowquiz.toml").exists() {
        println!("glowquiz.toml already exists, skipping.");
    } else {
        std::fs::write("glowquiz.toml", SAMPLE_CONFIG)?;
        println!("Created glowquiz.toml");
    }

    std::fs::create_dir_all("quizzes")?;
    let quiz_path = Path::new("quizzes/skincare.toml");
    if quiz_path.exists() {
        println!("quizzes/skincare.toml already exists, skipping.");
    } else {
        let body = parser::to_toml(&catalog::skincare())?;
        std::fs::write(quiz_path, format!("{QUIZ_HEADER}{body}"))?;
        println!("Created quizzes/skincare.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizzes/skincare.toml to change questions or rules");
    println!("  2. Run: glowquiz validate --quiz quizzes/skincare.toml");
    println!("  3. Run: glowquiz take");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# glowquiz configuration

quiz = "quizzes/skincare.toml"
output_dir = "./glowquiz-results"
# text, json, html, or all
default_format = "text"
"#;

const QUIZ_HEADER: &str = "# glowquiz quiz definition\n#\n# Rules fire in the order listed. `equals` tests a single-choice answer,\n# `contains` tests membership in a multi-choice answer.\n\n";
