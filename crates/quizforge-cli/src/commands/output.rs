//! Review printing and report saving shared by `take` and `score`.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizforge_core::report::{ReviewEntry, SessionReport};
use quizforge_report::html::write_html_report;
use quizforge_report::markdown::write_markdown_report;

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

/// Per-question review with explanations, shown after scoring.
pub fn print_review(report: &SessionReport) {
    for entry in &report.review {
        let marker = if entry.correct {
            "OK  "
        } else if entry.answered() {
            "MISS"
        } else {
            "SKIP"
        };
        println!("{marker} {}. {}", entry.number, entry.prompt);
        if !entry.correct {
            println!(
                "     correct answer: {}",
                choice_texts(entry, &entry.correct_choices)
            );
        }
        if !entry.explanation.is_empty() {
            println!("     {}", entry.explanation);
        }
    }
}

/// Summary table for one session.
pub fn print_summary(report: &SessionReport) {
    let mut table = Table::new();
    table.set_header(vec!["Chapter", "Score", "Correct", "Wrong", "Unanswered"]);
    table.add_row(vec![
        Cell::new(&report.quiz.title),
        Cell::new(format!("{:.1}%", report.score.percent())),
        Cell::new(report.score.correct),
        Cell::new(report.score.answered_wrong()),
        Cell::new(report.score.unanswered),
    ]);

    eprintln!("\n{table}");
}

/// Save the report in the requested formats under the output directory.
///
/// `text` saves nothing: the review and summary already went to the console.
pub fn save_outputs(report: &SessionReport, output: &Path, format: &str) -> Result<()> {
    if format == "text" {
        return Ok(());
    }

    std::fs::create_dir_all(output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html", "markdown"]
    } else {
        format.split(',').collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("session-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("session-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("session-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            "text" => {}
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
