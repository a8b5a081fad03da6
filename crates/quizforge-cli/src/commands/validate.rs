//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let banks = if quiz_path.is_dir() {
        quizforge_core::parser::load_quiz_directory(&quiz_path)?
    } else {
        vec![quizforge_core::parser::load_quiz_file(&quiz_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Quiz: {} ({} questions)", bank.title(), bank.len());

        let warnings = quizforge_core::parser::validate_quiz(bank);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [q{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
