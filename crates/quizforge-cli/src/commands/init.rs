//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizforge.toml
    if std::path::Path::new("quizforge.toml").exists() {
        println!("quizforge.toml already exists, skipping.");
    } else {
        std::fs::write("quizforge.toml", SAMPLE_CONFIG)?;
        println!("Created quizforge.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizzes/example.toml with your own questions");
    println!("  2. Run: quizforge validate --quiz quizzes/example.toml");
    println!("  3. Run: quizforge take --quiz quizzes/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

[content]
quizzes = "./quizzes"

[output]
results = "./quizforge-results"
format = "text"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
chapter = "example"
title = "Example Quiz"

[[questions]]
prompt = "quizforge scores an answer as correct only when it matches the answer key exactly."
explanation = "There is no partial credit; any other selection is simply wrong."

[[questions.choices]]
text = "True"
correct = true

[[questions.choices]]
text = "False"

[[questions]]
prompt = "What happens to questions you skip?"
explanation = "Skipped questions count as incorrect but never abort scoring."

[[questions.choices]]
text = "They count as incorrect"
correct = true

[[questions.choices]]
text = "They are removed from the total"

[[questions.choices]]
text = "Scoring fails with an error"
"#;
