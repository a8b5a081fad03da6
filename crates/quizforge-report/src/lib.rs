//! quizforge-report — study-report renderers.
//!
//! Turns a scored [`quizforge_core::report::SessionReport`] into something a
//! learner keeps: a self-contained HTML page or Markdown for study notes.

pub mod html;
pub mod markdown;
