//! The `quizforge compare` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::report::SessionReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    fail_on_slip: bool,
    format: String,
) -> Result<()> {
    let baseline = SessionReport::load_json(&baseline_path)?;
    let current = SessionReport::load_json(&current_path)?;

    let progress = current.compare(&baseline)?;

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", quizforge_report::markdown::progress_to_markdown(&progress));
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            // text format
            println!(
                "Progress on {}: {} fixed, {} slipped, {} unchanged ({:.1}% -> {:.1}%, {:+.1}%)",
                progress.chapter_id,
                progress.fixed.len(),
                progress.slipped.len(),
                progress.unchanged,
                progress.baseline_percent,
                progress.current_percent,
                progress.percent_delta(),
            );

            if !progress.slipped.is_empty() {
                println!("\nSlipped:");
                for delta in &progress.slipped {
                    println!("  {}. {}", delta.number, delta.prompt);
                }
            }

            if !progress.fixed.is_empty() {
                println!("\nFixed:");
                for delta in &progress.fixed {
                    println!("  {}. {}", delta.number, delta.prompt);
                }
            }

            if progress.added > 0 {
                println!("\n{} new question(s)", progress.added);
            }
            if progress.removed > 0 {
                println!("{} removed question(s)", progress.removed);
            }
        }
    }

    if fail_on_slip && progress.has_slipped() {
        std::process::exit(1);
    }

    Ok(())
}
