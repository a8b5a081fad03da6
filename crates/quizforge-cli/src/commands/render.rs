//! The `quizforge render` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(quiz: PathBuf, format: String) -> Result<()> {
    let bank = quizforge_core::parser::load_quiz_file(&quiz)?;
    let rendered = bank.render();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
        _ => {
            println!("{} ({} questions)", rendered.title, rendered.questions.len());
            for question in &rendered.questions {
                println!("\n{}. {}", question.number, question.prompt);
                for (i, choice) in question.choices.iter().enumerate() {
                    println!("  {}) {}", i + 1, choice);
                }
            }
        }
    }

    Ok(())
}
