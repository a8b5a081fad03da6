//! Session report types with JSON persistence and progress comparison.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::QuizBank;
use crate::scoring::{Attempt, ScoreReport};

/// A complete record of one scored quiz session.
///
/// Self-contained: renderers and statistics work from the report alone,
/// without reloading the quiz it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub id: Uuid,
    /// When the attempt was scored.
    pub taken_at: DateTime<Utc>,
    /// Summary of the quiz (without full question definitions).
    pub quiz: QuizSummary,
    /// The score.
    pub score: ScoreReport,
    /// Per-question review rows, in quiz order.
    pub review: Vec<ReviewEntry>,
}

/// Summary of the quiz a session was taken against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub chapter_id: String,
    pub title: String,
    pub question_count: usize,
}

/// One question's outcome, with everything needed to review it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// 1-based question number.
    pub number: usize,
    pub prompt: String,
    pub choices: Vec<String>,
    /// Indices the learner selected (empty when unanswered).
    pub selected: Vec<usize>,
    /// Indices of the answer key.
    pub correct_choices: Vec<usize>,
    pub correct: bool,
    pub explanation: String,
}

impl ReviewEntry {
    /// Whether the learner selected anything at all.
    pub fn answered(&self) -> bool {
        !self.selected.is_empty()
    }
}

impl SessionReport {
    /// Score an attempt and capture the full review in one record.
    pub fn new(bank: &QuizBank, attempt: &Attempt) -> Self {
        let score = bank.score(attempt);

        let review = bank
            .questions()
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let selected: Vec<usize> = attempt
                    .selected(i)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default();
                ReviewEntry {
                    number: i + 1,
                    prompt: question.prompt().to_string(),
                    choices: question.choices().to_vec(),
                    selected,
                    correct_choices: question.correct_indices().iter().copied().collect(),
                    correct: score.details[i],
                    explanation: question.explanation().to_string(),
                }
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            quiz: QuizSummary {
                chapter_id: bank.chapter_id().to_string(),
                title: bank.title().to_string(),
                question_count: bank.len(),
            },
            score,
            review,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this session against an earlier one on the same chapter.
    ///
    /// Questions are matched by number, so comparisons assume the quiz kept
    /// its ordering between takes.
    pub fn compare(&self, baseline: &SessionReport) -> Result<ProgressReport> {
        if self.quiz.chapter_id != baseline.quiz.chapter_id {
            anyhow::bail!(
                "cannot compare sessions from different chapters: '{}' vs '{}'",
                self.quiz.chapter_id,
                baseline.quiz.chapter_id
            );
        }

        let by_number = |report: &SessionReport| -> BTreeMap<usize, (String, bool)> {
            report
                .review
                .iter()
                .map(|entry| (entry.number, (entry.prompt.clone(), entry.correct)))
                .collect()
        };

        let baseline_entries = by_number(baseline);
        let current_entries = by_number(self);

        let mut fixed = Vec::new();
        let mut slipped = Vec::new();
        let mut unchanged = 0usize;
        let mut added = 0usize;

        for (number, (prompt, correct)) in &current_entries {
            match baseline_entries.get(number) {
                Some((_, baseline_correct)) => {
                    if *correct && !baseline_correct {
                        fixed.push(QuestionDelta {
                            number: *number,
                            prompt: prompt.clone(),
                        });
                    } else if !correct && *baseline_correct {
                        slipped.push(QuestionDelta {
                            number: *number,
                            prompt: prompt.clone(),
                        });
                    } else {
                        unchanged += 1;
                    }
                }
                None => added += 1,
            }
        }

        let removed = baseline_entries
            .keys()
            .filter(|number| !current_entries.contains_key(number))
            .count();

        Ok(ProgressReport {
            chapter_id: self.quiz.chapter_id.clone(),
            baseline_percent: baseline.score.percent(),
            current_percent: self.score.percent(),
            fixed,
            slipped,
            unchanged,
            added,
            removed,
        })
    }
}

/// Load all session reports (`*.json`) from a directory, oldest first.
pub fn load_reports_directory(dir: &Path) -> Result<Vec<SessionReport>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut reports = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            match SessionReport::load_json(&path) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    reports.sort_by_key(|report| report.taken_at);
    Ok(reports)
}

/// Result of comparing two sessions on the same chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub chapter_id: String,
    pub baseline_percent: f64,
    pub current_percent: f64,
    /// Questions wrong last time, right now.
    pub fixed: Vec<QuestionDelta>,
    /// Questions right last time, wrong now.
    pub slipped: Vec<QuestionDelta>,
    /// Questions with the same outcome both times.
    pub unchanged: usize,
    /// Questions in the current session but not the baseline.
    pub added: usize,
    /// Questions in the baseline but not the current session.
    pub removed: usize,
}

/// A question whose outcome changed between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDelta {
    pub number: usize,
    pub prompt: String,
}

impl ProgressReport {
    /// Returns true if any question went from right to wrong.
    pub fn has_slipped(&self) -> bool {
        !self.slipped.is_empty()
    }

    /// Change in overall percent between baseline and current.
    pub fn percent_delta(&self) -> f64 {
        self.current_percent - self.baseline_percent
    }

    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} fixed, {} slipped, {} unchanged ({:.1}% → {:.1}%)\n\n",
            self.fixed.len(),
            self.slipped.len(),
            self.unchanged,
            self.baseline_percent,
            self.current_percent
        ));

        if !self.slipped.is_empty() {
            md.push_str("### Slipped\n\n");
            md.push_str("| # | Question |\n");
            md.push_str("|---|----------|\n");
            for delta in &self.slipped {
                md.push_str(&format!("| {} | {} |\n", delta.number, delta.prompt));
            }
            md.push('\n');
        }

        if !self.fixed.is_empty() {
            md.push_str("### Fixed\n\n");
            md.push_str("| # | Question |\n");
            md.push_str("|---|----------|\n");
            for delta in &self.fixed {
                md.push_str(&format!("| {} | {} |\n", delta.number, delta.prompt));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn make_bank() -> QuizBank {
        QuizBank::new("clojure-collections", "Collections")
            .add_question(Question::true_false(
                "Vectors support fast indexed access.",
                true,
                "Vectors are indexed collections.",
            ))
            .add_question(Question::true_false(
                "Lists support fast indexed access.",
                false,
                "Lists are sequential; use vectors for indexing.",
            ))
            .add_question(Question::true_false(
                "Maps are insertion-ordered.",
                false,
                "Use array maps or sorted maps when order matters.",
            ))
    }

    fn attempt_from(answers: &[(usize, usize)]) -> Attempt {
        let mut attempt = Attempt::new();
        for &(question, choice) in answers {
            attempt.select(question, choice);
        }
        attempt
    }

    #[test]
    fn new_captures_score_and_review() {
        let bank = make_bank();
        // true/false choices are ["True", "False"]: q0 right, q1 wrong, q2 skipped
        let attempt = attempt_from(&[(0, 0), (1, 0)]);

        let report = SessionReport::new(&bank, &attempt);
        assert_eq!(report.quiz.chapter_id, "clojure-collections");
        assert_eq!(report.quiz.question_count, 3);
        assert_eq!(report.score.correct, 1);
        assert_eq!(report.score.unanswered, 1);
        assert_eq!(report.review.len(), 3);
        assert_eq!(report.review[0].number, 1);
        assert!(report.review[0].correct);
        assert_eq!(report.review[0].selected, vec![0]);
        assert!(!report.review[1].correct);
        assert!(report.review[1].answered());
        assert!(!report.review[2].answered());
        assert_eq!(report.review[2].correct_choices, vec![1]);
    }

    #[test]
    fn json_roundtrip() {
        let bank = make_bank();
        let report = SessionReport::new(&bank, &attempt_from(&[(0, 0)]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        report.save_json(&path).unwrap();
        let loaded = SessionReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.quiz.chapter_id, "clojure-collections");
        assert_eq!(loaded.score, report.score);
        assert_eq!(loaded.review.len(), 3);
    }

    #[test]
    fn compare_identical_sessions() {
        let bank = make_bank();
        let attempt = attempt_from(&[(0, 0), (1, 1), (2, 1)]);
        let baseline = SessionReport::new(&bank, &attempt);
        let current = SessionReport::new(&bank, &attempt);

        let progress = current.compare(&baseline).unwrap();
        assert!(progress.fixed.is_empty());
        assert!(progress.slipped.is_empty());
        assert_eq!(progress.unchanged, 3);
        assert!(!progress.has_slipped());
        assert_eq!(progress.percent_delta(), 0.0);
    }

    #[test]
    fn compare_detects_fixed_and_slipped() {
        let bank = make_bank();
        // Baseline: q0 wrong, q1 right, q2 skipped. Current: q0 right, q1 wrong, q2 right.
        let baseline = SessionReport::new(&bank, &attempt_from(&[(0, 1), (1, 1)]));
        let current = SessionReport::new(&bank, &attempt_from(&[(0, 0), (1, 0), (2, 1)]));

        let progress = current.compare(&baseline).unwrap();
        let fixed_numbers: Vec<usize> = progress.fixed.iter().map(|d| d.number).collect();
        let slipped_numbers: Vec<usize> = progress.slipped.iter().map(|d| d.number).collect();
        assert_eq!(fixed_numbers, vec![1, 3]);
        assert_eq!(slipped_numbers, vec![2]);
        assert!(progress.has_slipped());
    }

    #[test]
    fn compare_rejects_different_chapters() {
        let bank = make_bank();
        let other = QuizBank::new("clojure-macros", "Macros").add_question(Question::true_false(
            "Macros run at compile time.",
            true,
            "Macro expansion happens before evaluation.",
        ));

        let a = SessionReport::new(&bank, &Attempt::new());
        let b = SessionReport::new(&other, &Attempt::new());

        let err = a.compare(&b).unwrap_err();
        assert!(err.to_string().contains("different chapters"));
    }

    #[test]
    fn compare_counts_question_drift() {
        let long = make_bank();
        let short = QuizBank::new("clojure-collections", "Collections").add_question(
            Question::true_false(
                "Vectors support fast indexed access.",
                true,
                "Vectors are indexed collections.",
            ),
        );

        let baseline = SessionReport::new(&long, &attempt_from(&[(0, 0)]));
        let current = SessionReport::new(&short, &attempt_from(&[(0, 0)]));

        let progress = current.compare(&baseline).unwrap();
        assert_eq!(progress.removed, 2);
        assert_eq!(progress.added, 0);

        let reversed = baseline.compare(&current).unwrap();
        assert_eq!(reversed.added, 2);
    }

    #[test]
    fn markdown_output() {
        let bank = make_bank();
        let baseline = SessionReport::new(&bank, &attempt_from(&[(0, 0), (1, 1)]));
        let current = SessionReport::new(&bank, &attempt_from(&[(0, 1)]));

        let md = current.compare(&baseline).unwrap().to_markdown();
        assert!(md.contains("Slipped"));
        assert!(md.contains("Vectors support fast indexed access."));
        assert!(md.contains("slipped, "));
    }

    #[test]
    fn load_directory_sorts_by_time() {
        let bank = make_bank();
        let dir = tempfile::tempdir().unwrap();

        let mut older = SessionReport::new(&bank, &Attempt::new());
        older.taken_at = Utc::now() - chrono::Duration::hours(2);
        let newer = SessionReport::new(&bank, &attempt_from(&[(0, 0)]));

        newer.save_json(&dir.path().join("b.json")).unwrap();
        older.save_json(&dir.path().join("a.json")).unwrap();
        std::fs::write(dir.path().join("junk.json"), "not json").unwrap();

        let reports = load_reports_directory(dir.path()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, older.id);
        assert_eq!(reports[1].id, newer.id);
    }
}
