//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn glowquiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("glowquiz").unwrap();
    cmd.current_dir(dir.path()).env_remove("GLOWQUIZ_QUIZ");
    cmd
}

#[test]
fn recommend_oily_only() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["recommend", "--answer", "1=oily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Ordinary Niacinamide 10% + Zinc 1%"))
        .stdout(predicate::str::contains("peripera - Pure Blushed Sunshine Cheek"));
}

#[test]
fn recommend_without_answers_gives_fallback() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["recommend", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recommendations\""))
        .stdout(predicate::str::contains("peripera - Pure Blushed Sunshine Cheek"));
}

#[test]
fn recommend_rejects_too_many_concerns() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["recommend", "-a", "2=acne,aging,dullness,redness"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3"));
}

#[test]
fn recommend_html_output() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["recommend", "-a", "2=acne,aging", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("COSRX Acne Pimple Master Patch"));
}

#[test]
fn recommend_unknown_format() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["recommend", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn recommend_with_configured_all_format_prints_table() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("glowquiz.toml"), "default_format = \"all\"\n").unwrap();

    glowquiz(&dir)
        .args(["recommend", "-a", "1=oily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Ordinary Niacinamide 10% + Zinc 1%"));

    assert!(!dir.path().join("glowquiz-results").exists());
}

#[test]
fn recommend_rejects_all_on_command_line() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["recommend", "--format", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'all'"));
}

#[test]
fn take_scripted_session() {
    let dir = TempDir::new().unwrap();
    let script = "next\nstart\nprev\n3\nnext\n1\n2\n3\n4\nnext\nprev\nnext\nnext\nnext\nnext\nnext\nnext\nnext\nnext\nnext\nsubmit\n";

    glowquiz(&dir)
        .arg("take")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'start' to begin."))
        .stdout(predicate::str::contains("Already at the first question."))
        .stdout(predicate::str::contains("You can choose at most 3 options."))
        .stdout(predicate::str::contains("[x] 1. Acne and breakouts"))
        .stdout(predicate::str::contains("This is the last question. Type 'submit'."))
        .stdout(predicate::str::contains("The Ordinary Niacinamide 10% + Zinc 1%"))
        .stdout(predicate::str::contains("COSRX Acne Pimple Master Patch"));
}

#[test]
fn take_retake_clears_answers() {
    let dir = TempDir::new().unwrap();
    let mut script = String::from("start\n2\n");
    script.push_str(&"next\n".repeat(9));
    script.push_str("submit\nretake\nstart\n");
    script.push_str(&"next\n".repeat(9));
    script.push_str("submit\nquit\n");

    let assert = glowquiz(&dir).arg("take").write_stdin(script).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("Answers cleared."));
    assert_eq!(stdout.matches("COSRX Advanced Snail 92 All In One Cream").count(), 1);
    assert_eq!(stdout.matches("Your recommendations:").count(), 2);
}

#[test]
fn take_saves_json_results() {
    let dir = TempDir::new().unwrap();
    let mut script = String::from("start\n");
    script.push_str(&"next\n".repeat(9));
    script.push_str("submit\n");

    glowquiz(&dir)
        .args(["take", "--format", "json", "--output", "out"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    let files: Vec<_> = std::fs::read_dir(dir.path().join("out")).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn info_logging_by_default_and_rust_log_replaces_it() {
    let dir = TempDir::new().unwrap();
    let mut script = String::from("start\n");
    script.push_str(&"next\n".repeat(9));
    script.push_str("submit\n");

    glowquiz(&dir)
        .arg("take")
        .env_remove("RUST_LOG")
        .write_stdin(script.clone())
        .assert()
        .success()
        .stderr(predicate::str::contains("quiz completed"));

    glowquiz(&dir)
        .arg("take")
        .env("RUST_LOG", "glowquiz=warn")
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("quiz completed").not());
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    glowquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created glowquiz.toml"))
        .stdout(predicate::str::contains("Created quizzes/skincare.toml"));

    assert!(dir.path().join("glowquiz.toml").exists());
    assert!(dir.path().join("quizzes/skincare.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    glowquiz(&dir).arg("init").assert().success();

    glowquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_exported_quiz() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir).arg("init").assert().success();

    glowquiz(&dir)
        .args(["validate", "--quiz", "quizzes/skincare.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 questions"))
        .stdout(predicate::str::contains("Quiz is valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tiny.toml"),
        r#"
[quiz]
id = "tiny"
title = "Tiny"

[[questions]]
id = 1
prompt = "Skin?"
options = [{ value = "dry", text = "Dry" }]

[[rules]]
question = 1
equals = "oily"
[rules.product]
name = "Serum"
"#,
    )
    .unwrap();

    glowquiz(&dir)
        .args(["validate", "--quiz", "tiny.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not an option"))
        .stdout(predicate::str::contains("no fallback"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    glowquiz(&dir)
        .args(["validate", "--quiz", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn config_selects_quiz_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mini.toml"),
        r#"
[quiz]
id = "mini"
title = "Mini Quiz"

[[questions]]
id = 1
prompt = "Skin?"
type = "single"
options = [{ value = "dry", text = "Dry" }]

[[rules]]
question = 1
equals = "dry"
[rules.product]
name = "Rich Cream"

[fallback]
min_results = 1
[fallback.product]
name = "Sample Kit"
"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("glowquiz.toml"), "quiz = \"mini.toml\"\n").unwrap();

    glowquiz(&dir)
        .args(["recommend", "-a", "1=dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rich Cream"))
        .stdout(predicate::str::contains("Sample Kit").not());
}
