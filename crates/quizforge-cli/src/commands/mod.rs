//! quizforge subcommands.

pub mod compare;
pub mod init;
pub mod render;
pub mod score;
pub mod stats;
pub mod take;
pub mod validate;

mod output;

use std::path::Path;

use anyhow::Result;

use quizforge_core::model::QuizBank;

use crate::config::QuizforgeConfig;

/// Load a quiz from an explicit file path, or treat the argument as a chapter
/// id under the configured quizzes directory.
pub(crate) fn resolve_quiz(quiz: &Path, config: &QuizforgeConfig) -> Result<QuizBank> {
    if quiz.exists() {
        return quizforge_core::parser::load_quiz_file(quiz);
    }

    match quiz.to_str().filter(|s| !s.contains(std::path::MAIN_SEPARATOR)) {
        Some(chapter_id) => {
            tracing::debug!(chapter_id, dir = %config.content.quizzes.display(), "resolving chapter id");
            quizforge_core::parser::load_chapter_quiz(&config.content.quizzes, chapter_id)
        }
        None => anyhow::bail!("quiz file not found: {}", quiz.display()),
    }
}
