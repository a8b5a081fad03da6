//! The `quizforge stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizforge_core::report::load_reports_directory;
use quizforge_core::statistics::compute_study_stats;

use crate::config::load_config_from;

pub fn execute(results: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let results = results.unwrap_or_else(|| config.output.results.clone());

    let reports = load_reports_directory(&results)?;
    if reports.is_empty() {
        println!("No session reports in {}", results.display());
        return Ok(());
    }

    let stats = compute_study_stats(&reports);
    println!(
        "{} session(s) across {} chapter(s)",
        stats.sessions,
        stats.chapters.len()
    );

    let mut table = Table::new();
    table.set_header(vec!["Chapter", "Attempts", "Best", "Latest", "Last taken"]);
    for chapter in &stats.chapters {
        table.add_row(vec![
            Cell::new(&chapter.title),
            Cell::new(chapter.attempts),
            Cell::new(format!("{:.1}%", chapter.best_percent)),
            Cell::new(format!("{:.1}%", chapter.latest_percent)),
            Cell::new(chapter.latest_taken_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("\n{table}");

    if !stats.hardest.is_empty() {
        println!("\nHardest questions:");
        let mut table = Table::new();
        table.set_header(vec!["Chapter", "#", "Question", "Missed"]);
        for question in stats.hardest.iter().take(10) {
            table.add_row(vec![
                Cell::new(&question.chapter_id),
                Cell::new(question.number),
                Cell::new(&question.prompt),
                Cell::new(format!(
                    "{}/{}",
                    question.times_missed, question.times_asked
                )),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
