//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizforge").unwrap()
}

#[test]
fn validate_namespaces_quiz() {
    quizforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../quizzes/clojure-namespaces.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 questions"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_macros_quiz() {
    quizforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../quizzes/clojure-macros.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 questions"));
}

#[test]
fn validate_directory() {
    quizforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../quizzes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Namespaces"))
        .stdout(predicate::str::contains("Macros"))
        .stdout(predicate::str::contains("clojure.spec"));
}

#[test]
fn validate_chapter_markdown() {
    quizforge()
        .arg("validate")
        .arg("--quiz")
        .arg("../../chapters/clojure-collections.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collections (2 questions)"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_nonexistent_file() {
    quizforge()
        .arg("validate")
        .arg("--quiz")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_reports_authoring_warnings() {
    let dir = TempDir::new().unwrap();
    let quiz = dir.path().join("thin.toml");
    std::fs::write(
        &quiz,
        r#"
[quiz]
chapter = "thin"
title = "Thin"

[[questions]]
prompt = "Only one way"

[[questions.choices]]
text = "The way"
correct = true
"#,
    )
    .unwrap();

    quizforge()
        .arg("validate")
        .arg("--quiz")
        .arg(&quiz)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn render_text_withholds_answers() {
    quizforge()
        .arg("render")
        .arg("--quiz")
        .arg("../../quizzes/clojure-namespaces.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Namespaces (5 questions)"))
        .stdout(predicate::str::contains(
            "Which form declares the namespace",
        ))
        .stdout(predicate::str::contains("1) (ns my.app)"))
        // Explanations stay hidden until scoring
        .stdout(predicate::str::contains("dynamic var").not())
        .stdout(predicate::str::contains("correct").not());
}

#[test]
fn render_json_format() {
    quizforge()
        .arg("render")
        .arg("--quiz")
        .arg("../../quizzes/clojure-spec.toml")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chapter_id\": \"clojure-spec\""))
        .stdout(predicate::str::contains("\"questions\""))
        .stdout(predicate::str::contains("explanation").not());
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizforge.toml"))
        .stdout(predicate::str::contains("Created quizzes/example.toml"));

    assert!(dir.path().join("quizforge.toml").exists());
    assert!(dir.path().join("quizzes/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_passes_validation() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizforge()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--quiz")
        .arg("quizzes/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn help_output() {
    quizforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter quiz toolkit"));
}

#[test]
fn version_output() {
    quizforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizforge"));
}
