//! Attempts and exact-match scoring.
//!
//! Scoring is pure: the same bank and attempt always produce the same report,
//! and nothing here touches I/O or shared state.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::QuizBank;

/// A learner's selected answers for one quiz session.
///
/// Keys are 0-based question indices; values are the selected choice indices.
/// The map may be partial (skipped questions are simply absent) and may
/// reference indices the bank does not have — scoring ignores those entries
/// rather than failing a learner's session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(default)]
    pub answers: BTreeMap<usize, BTreeSet<usize>>,
}

impl Attempt {
    /// An attempt with no answers yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single-choice answer, replacing any earlier selection for the
    /// same question.
    pub fn select(&mut self, question: usize, choice: usize) {
        self.answers.insert(question, BTreeSet::from([choice]));
    }

    /// The selection for a question, if one was recorded.
    pub fn selected(&self, question: usize) -> Option<&BTreeSet<usize>> {
        self.answers.get(&question)
    }

    /// Number of questions with a non-empty selection.
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|s| !s.is_empty()).count()
    }

    /// Save the attempt as JSON, creating parent directories as needed.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize attempt")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write attempt to {}", path.display()))?;
        Ok(())
    }

    /// Load an attempt from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read attempt from {}", path.display()))?;
        let attempt: Attempt =
            serde_json::from_str(&content).context("failed to parse attempt JSON")?;
        Ok(attempt)
    }
}

/// The computed outcome of scoring one attempt against one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Number of questions in the quiz.
    pub total: usize,
    /// Questions whose selection matched the answer key exactly.
    pub correct: usize,
    /// Questions with no selection (counted as incorrect).
    pub unanswered: usize,
    /// Per-question correctness in display order.
    pub details: Vec<bool>,
}

impl ScoreReport {
    /// Score as a percentage; 0.0 for an empty quiz.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }

    /// Questions answered but not matching the answer key.
    pub fn answered_wrong(&self) -> usize {
        self.total - self.correct - self.unanswered
    }
}

impl QuizBank {
    /// Score an attempt against this quiz.
    ///
    /// A question is correct iff the selected index set equals its
    /// `correct_indices` exactly — no partial credit for supersets or subsets.
    /// Questions omitted from the attempt, or present with an empty selection,
    /// count as unanswered and incorrect. Entries keyed by a question index the
    /// quiz does not have are ignored.
    pub fn score(&self, attempt: &Attempt) -> ScoreReport {
        let mut details = Vec::with_capacity(self.len());
        let mut correct = 0usize;
        let mut unanswered = 0usize;

        for (index, question) in self.questions().iter().enumerate() {
            match attempt.answers.get(&index).filter(|s| !s.is_empty()) {
                Some(selection) => {
                    let hit = question.is_correct_selection(selection);
                    if hit {
                        correct += 1;
                    }
                    details.push(hit);
                }
                None => {
                    unanswered += 1;
                    details.push(false);
                }
            }
        }

        ScoreReport {
            total: self.len(),
            correct,
            unanswered,
            details,
        }
    }
}
