//! The `quizforge take` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::report::SessionReport;
use quizforge_session::{run_session, ConsolePrompter};

use crate::config::load_config_from;

use super::{output, resolve_quiz};

pub fn execute(
    quiz: PathBuf,
    output_dir: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = resolve_quiz(&quiz, &config)?;
    anyhow::ensure!(
        !bank.is_empty(),
        "quiz '{}' has no questions",
        bank.chapter_id()
    );

    println!("{} ({} questions)", bank.title(), bank.len());

    let mut prompter = ConsolePrompter::stdio();
    let outcome = run_session(&bank, &mut prompter)?;
    if !outcome.completed {
        println!("\nSession ended early; scoring answers so far.");
    }

    let report = SessionReport::new(&bank, &outcome.attempt);

    println!();
    output::print_review(&report);
    output::print_summary(&report);

    let output_dir = output_dir.unwrap_or_else(|| config.output.results.clone());
    let format = format.unwrap_or_else(|| config.output.format.clone());
    output::save_outputs(&report, &output_dir, &format)
}
