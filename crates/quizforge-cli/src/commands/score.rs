//! The `quizforge score` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::report::SessionReport;
use quizforge_core::scoring::Attempt;

use crate::config::load_config_from;

use super::{output, resolve_quiz};

pub fn execute(
    quiz: PathBuf,
    attempt_path: PathBuf,
    output_dir: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = resolve_quiz(&quiz, &config)?;
    let attempt = Attempt::load_json(&attempt_path)?;

    let report = SessionReport::new(&bank, &attempt);

    println!("{} ({} questions)", bank.title(), bank.len());
    println!();
    output::print_review(&report);
    output::print_summary(&report);

    let output_dir = output_dir.unwrap_or_else(|| config.output.results.clone());
    let format = format.unwrap_or_else(|| config.output.format.clone());
    output::save_outputs(&report, &output_dir, &format)
}
