//! Markdown rendering for study notes.

use anyhow::Result;
use std::path::Path;

use quizforge_core::report::{ProgressReport, ReviewEntry, SessionReport};

fn choice_texts(entry: &ReviewEntry, indices: &[usize]) -> String {
    if indices.is_empty() {
        return "-".to_string();
    }
    indices
        .iter()
        .filter_map(|&i| entry.choices.get(i))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a session report as Markdown.
pub fn session_to_markdown(report: &SessionReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} — study report\n\n", report.quiz.title));
    md.push_str(&format!(
        "Taken {} | {}/{} correct ({:.1}%) | {} unanswered\n\n",
        report.taken_at.format("%Y-%m-%d %H:%M UTC"),
        report.score.correct,
        report.score.total,
        report.score.percent(),
        report.score.unanswered,
    ));

    md.push_str("| # | Question | Your answer | Correct answer | Result |\n");
    md.push_str("|---|----------|-------------|----------------|--------|\n");
    for entry in &report.review {
        let result = if entry.correct {
            "ok"
        } else if entry.answered() {
            "missed"
        } else {
            "skipped"
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            entry.number,
            entry.prompt,
            choice_texts(entry, &entry.selected),
            choice_texts(entry, &entry.correct_choices),
            result,
        ));
    }

    let explained: Vec<&ReviewEntry> = report
        .review
        .iter()
        .filter(|e| !e.explanation.is_empty())
        .collect();
    if !explained.is_empty() {
        md.push_str("\n## Explanations\n\n");
        for entry in explained {
            md.push_str(&format!(
                "**{}. {}**\n{}\n\n",
                entry.number, entry.prompt, entry.explanation
            ));
        }
    }

    md
}

/// Write a session report as a Markdown file, creating parent directories as
/// needed.
pub fn write_markdown_report(report: &SessionReport, path: &Path) -> Result<()> {
    let md = session_to_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)?;
    Ok(())
}

/// Render a progress comparison as Markdown with a chapter heading.
pub fn progress_to_markdown(progress: &ProgressReport) -> String {
    format!(
        "# Progress — {}\n\n{}",
        progress.chapter_id,
        progress.to_markdown()
    )
}
