//! Aggregate study statistics across session reports.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::SessionReport;

/// Statistics over a learner's session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyStats {
    /// Total sessions considered.
    pub sessions: usize,
    /// Per-chapter progress, sorted by chapter id.
    pub chapters: Vec<ChapterProgress>,
    /// Questions missed at least once, hardest first.
    pub hardest: Vec<HardQuestion>,
}

/// Progress for a single chapter across all its sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterProgress {
    pub chapter_id: String,
    pub title: String,
    /// Number of sessions on this chapter.
    pub attempts: usize,
    /// Best score percent over all attempts.
    pub best_percent: f64,
    /// Score percent of the most recent attempt.
    pub latest_percent: f64,
    /// When the most recent attempt was taken.
    pub latest_taken_at: DateTime<Utc>,
}

/// A question missed in at least one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardQuestion {
    pub chapter_id: String,
    /// 1-based question number within its chapter.
    pub number: usize,
    pub prompt: String,
    /// Sessions in which the question appeared.
    pub times_asked: usize,
    /// Sessions in which it was answered wrong or skipped.
    pub times_missed: usize,
}

impl HardQuestion {
    /// Fraction of appearances that were missed.
    pub fn miss_rate(&self) -> f64 {
        if self.times_asked == 0 {
            0.0
        } else {
            self.times_missed as f64 / self.times_asked as f64
        }
    }
}

/// Compute study statistics from a set of session reports.
pub fn compute_study_stats(reports: &[SessionReport]) -> StudyStats {
    // Per-chapter progress
    let mut by_chapter: HashMap<&str, Vec<&SessionReport>> = HashMap::new();
    for report in reports {
        by_chapter
            .entry(report.quiz.chapter_id.as_str())
            .or_default()
            .push(report);
    }

    let mut chapters = Vec::new();
    for (chapter_id, sessions) in &by_chapter {
        let mut best_percent = 0.0f64;
        let mut latest: Option<&SessionReport> = None;

        for session in sessions {
            let percent = session.score.percent();
            if percent > best_percent {
                best_percent = percent;
            }
            if latest.map_or(true, |l| session.taken_at > l.taken_at) {
                latest = Some(session);
            }
        }

        if let Some(latest) = latest {
            chapters.push(ChapterProgress {
                chapter_id: chapter_id.to_string(),
                title: latest.quiz.title.clone(),
                attempts: sessions.len(),
                best_percent,
                latest_percent: latest.score.percent(),
                latest_taken_at: latest.taken_at,
            });
        }
    }
    chapters.sort_by(|a, b| a.chapter_id.cmp(&b.chapter_id));

    // Miss counts per (chapter, question number)
    let mut miss_counts: HashMap<(String, usize), HardQuestion> = HashMap::new();
    for report in reports {
        for entry in &report.review {
            let key = (report.quiz.chapter_id.clone(), entry.number);
            let stat = miss_counts.entry(key).or_insert_with(|| HardQuestion {
                chapter_id: report.quiz.chapter_id.clone(),
                number: entry.number,
                prompt: entry.prompt.clone(),
                times_asked: 0,
                times_missed: 0,
            });
            stat.times_asked += 1;
            if !entry.correct {
                stat.times_missed += 1;
            }
        }
    }

    let mut hardest: Vec<HardQuestion> = miss_counts
        .into_values()
        .filter(|q| q.times_missed > 0)
        .collect();
    hardest.sort_by(|a, b| {
        b.miss_rate()
            .partial_cmp(&a.miss_rate())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.times_missed.cmp(&a.times_missed))
            .then(a.chapter_id.cmp(&b.chapter_id))
            .then(a.number.cmp(&b.number))
    });

    StudyStats {
        sessions: reports.len(),
        chapters,
        hardest,
    }
}
