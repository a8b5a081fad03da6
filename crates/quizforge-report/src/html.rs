//! HTML study-report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use quizforge_core::report::{ReviewEntry, SessionReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Choice texts for a set of indices, or `-` for an empty selection.
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

/// Generate an HTML page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>quizforge report — {}</title>\n",
        html_escape(&report.quiz.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>quizforge study report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Chapter: <strong>{}</strong> ({}) | {} questions | {}</p>\n",
        html_escape(&report.quiz.title),
        html_escape(&report.quiz.chapter_id),
        report.quiz.question_count,
        report.taken_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Score</h2>\n");
    html.push_str(&format!(
        "<p class=\"score\">{}/{} correct ({:.1}%), {} wrong, {} unanswered</p>\n",
        report.score.correct,
        report.score.total,
        report.score.percent(),
        report.score.answered_wrong(),
        report.score.unanswered,
    ));
    html.push_str(&score_bar(report.score.percent()));
    html.push_str("</section>\n");

    // Per-question results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Questions</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"results\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">#</th><th onclick=\"sortTable(1)\">Question</th><th onclick=\"sortTable(2)\">Your answer</th><th onclick=\"sortTable(3)\">Correct answer</th><th onclick=\"sortTable(4)\">Result</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for entry in &report.review {
        let row_class = if entry.correct { "pass" } else { "fail" };
        let result_text = if entry.correct {
            "OK"
        } else if entry.answered() {
            "MISS"
        } else {
            "SKIP"
        };

        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
            row_class,
            entry.number,
            html_escape(&entry.prompt),
            html_escape(&choice_texts(entry, &entry.selected)),
            html_escape(&choice_texts(entry, &entry.correct_choices)),
            row_class,
            result_text,
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Explanations
    let explained: Vec<&ReviewEntry> = report
        .review
        .iter()
        .filter(|e| !e.explanation.is_empty())
        .collect();
    if !explained.is_empty() {
        html.push_str("<section class=\"review\">\n");
        html.push_str("<h2>Explanations</h2>\n");
        for entry in explained {
            let card_class = if entry.correct { "pass" } else { "fail" };
            html.push_str(&format!(
                "<div class=\"card {}\">\n<h3>{}. {}</h3>\n<p>{}</p>\n</div>\n",
                card_class,
                entry.number,
                html_escape(&entry.prompt),
                html_escape(&entry.explanation),
            ));
        }
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file, creating parent directories as needed.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn score_bar(percent: f64) -> String {
    let bar_height = 30;
    let max_width = 400;
    let label_width = 80;

    let width = (percent / 100.0 * max_width as f64) as usize;
    let color = if percent >= 80.0 {
        "#22c55e"
    } else if percent >= 50.0 {
        "#eab308"
    } else {
        "#ef4444"
    };

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        bar_height + 20
    );
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">Score</text>\n",
        label_width - 10,
        10 + bar_height / 2,
    ));
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"10\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
        label_width, width, bar_height, color
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}%</text>\n",
        label_width + width + 8,
        10 + bar_height / 2,
        percent
    ));
    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.score { font-size: 1.25rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem 1rem; margin: 1rem 0; }
.card h3 { margin: 0.5rem 0; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('results');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_core::model::{Question, QuizBank};
    use quizforge_core::report::SessionReport;
    use quizforge_core::scoring::Attempt;

    fn make_report() -> SessionReport {
        let bank = QuizBank::new("clojure-macros", "Macros")
            .add_question(Question::true_false(
                "Macros receive unevaluated forms.",
                true,
                "Arguments arrive as data, not values.",
            ))
            .add_question(Question::true_false(
                "`defmacro` runs at runtime.",
                false,
                "Macro expansion happens before evaluation.",
            ));

        let mut attempt = Attempt::new();
        attempt.select(0, 0);
        attempt.select(1, 0);
        SessionReport::new(&bank, &attempt)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&make_report());

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Macros"));
        assert!(html.contains("Macros receive unevaluated forms."));
        assert!(html.contains("Macro expansion happens before evaluation."));
        assert!(html.contains("class=\"fail\""));
        assert!(html.contains("50.0%"));
    }

    #[test]
    fn html_report_marks_skipped_questions() {
        let bank = QuizBank::new("ch", "Chapter")
            .add_question(Question::true_false("Only question.", true, ""));
        let report = SessionReport::new(&bank, &Attempt::new());

        let html = generate_html(&report);
        assert!(html.contains("SKIP"));
    }

    #[test]
    fn html_report_escapes_markup_in_prompts() {
        let bank = QuizBank::new("ch", "Chapter").add_question(Question::true_false(
            "<script>alert('x')</script> is safe in prompts.",
            false,
            "Prompts are escaped before rendering.",
        ));
        let report = SessionReport::new(&bank, &Attempt::new());

        let html = generate_html(&report);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
