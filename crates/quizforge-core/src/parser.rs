//! TOML quiz file parsing and soft validation.
//!
//! Quiz files carry a `[quiz]` header and a `[[questions]]` array; each
//! question marks its correct choice(s) inline:
//!
//! ```toml
//! [quiz]
//! chapter = "clojure-namespaces"
//! title = "Namespaces"
//!
//! [[questions]]
//! prompt = "`require` loads a namespace."
//! explanation = "It loads and makes the namespace available."
//!
//! [[questions.choices]]
//! text = "True"
//! correct = true
//!
//! [[questions.choices]]
//! text = "False"
//! ```
//!
//! Parsing converts raw TOML structs into validated model types, so a file
//! with a broken answer key fails loudly at load time.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::QuizError;
use crate::model::{Question, QuizBank};

/// Intermediate TOML structure for a standalone quiz file.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    chapter: String,
    title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TomlQuestion {
    prompt: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    choices: Vec<TomlChoice>,
}

#[derive(Debug, Deserialize)]
struct TomlChoice {
    text: String,
    #[serde(default)]
    correct: bool,
}

/// Convert one raw question, turning per-choice `correct` flags into the
/// answer-key index set.
pub(crate) fn question_from_toml(raw: TomlQuestion) -> Result<Question, QuizError> {
    let texts: Vec<String> = raw.choices.iter().map(|c| c.text.clone()).collect();
    let correct = raw
        .choices
        .iter()
        .enumerate()
        .filter(|(_, c)| c.correct)
        .map(|(i, _)| i)
        .collect();
    Question::new(raw.prompt, texts, correct, raw.explanation)
}

pub(crate) fn questions_from_toml(
    raw: Vec<TomlQuestion>,
    source_path: &Path,
) -> Result<Vec<Question>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, q)| {
            question_from_toml(q)
                .with_context(|| format!("question {} in {}", i + 1, source_path.display()))
        })
        .collect()
}

/// Parse a single TOML quiz file into a `QuizBank`.
pub fn parse_quiz(path: &Path) -> Result<QuizBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `QuizBank` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizBank> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut bank = QuizBank::new(parsed.quiz.chapter, parsed.quiz.title);
    for question in questions_from_toml(parsed.questions, source_path)? {
        bank = bank.add_question(question);
    }

    Ok(bank)
}

/// Load one quiz file, dispatching on extension: `.toml` quiz files or `.md`
/// chapters with embedded quiz blocks.
pub fn load_quiz_file(path: &Path) -> Result<QuizBank> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_quiz(path),
        Some("md") => crate::markdown::parse_chapter(path),
        _ => anyhow::bail!("unsupported quiz format: {}", path.display()),
    }
}

/// Recursively load all quiz files (`.toml` and `.md`) from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<QuizBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_quiz_directory(&path)?);
        } else if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("toml") | Some("md")
        ) {
            match load_quiz_file(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Resolve a chapter id to its quiz under a content directory.
///
/// Looks for `<chapter_id>.toml` first, then `<chapter_id>.md`.
pub fn load_chapter_quiz(dir: &Path, chapter_id: &str) -> Result<QuizBank> {
    let toml_path = dir.join(format!("{chapter_id}.toml"));
    if toml_path.is_file() {
        return parse_quiz(&toml_path);
    }

    let md_path = dir.join(format!("{chapter_id}.md"));
    if md_path.is_file() {
        return crate::markdown::parse_chapter(&md_path);
    }

    anyhow::bail!(
        "no quiz found for chapter '{chapter_id}' in {}",
        dir.display()
    )
}

/// A soft authoring concern that does not block loading.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number, when the warning is about one question.
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common authoring issues.
///
/// Hard invariants (answer key present and in range) are enforced by
/// construction; everything here is advisory.
pub fn validate_quiz(bank: &QuizBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions".into(),
        });
    }

    // Check for empty prompts
    for (i, q) in bank.questions().iter().enumerate() {
        if q.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: "prompt is empty".into(),
            });
        }
    }

    // Check for missing explanations
    for (i, q) in bank.questions().iter().enumerate() {
        if q.explanation().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: "no explanation; learners see nothing after scoring".into(),
            });
        }
    }

    // Check for degenerate choice lists
    for (i, q) in bank.questions().iter().enumerate() {
        if q.choices().len() < 2 {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: "fewer than two choices".into(),
            });
        }
    }

    // Check for duplicate choice text
    for (i, q) in bank.questions().iter().enumerate() {
        let mut seen = std::collections::HashSet::new();
        for choice in q.choices() {
            if !seen.insert(choice.trim()) {
                warnings.push(ValidationWarning {
                    question: Some(i + 1),
                    message: format!("duplicate choice text: {choice:?}"),
                });
            }
        }
    }

    // Interactive answering is single-select, so a multi-correct key can
    // never be matched by a learner
    for (i, q) in bank.questions().iter().enumerate() {
        if q.correct_indices().len() > 1 {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: "multiple choices marked correct; single-select answering cannot match"
                    .into(),
            });
        }
    }

    warnings
}
