//! Quiz extraction from chapter Markdown.
//!
//! Study chapters interleave prose with fenced blocks tagged `quiz` whose body
//! is the same `[[questions]]` TOML used by standalone quiz files. The chapter
//! id comes from the file stem, the title from the first `#` heading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::QuizBank;
use crate::parser::{questions_from_toml, TomlQuestion};

#[derive(Debug, Deserialize)]
struct TomlQuestionList {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

/// Collect the bodies of all ```` ```quiz ```` fenced blocks, ignoring every
/// other fence. An unclosed trailing block is still captured.
pub fn extract_quiz_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut is_quiz_block = false;
    let mut current_block = String::new();

    for line in markdown.lines() {
        let trimmed = line.trim();

        if !in_block && trimmed.starts_with("```") {
            in_block = true;
            let tag = trimmed.trim_start_matches('`').trim().to_lowercase();
            is_quiz_block = tag == "quiz";
            current_block.clear();
            continue;
        }

        if in_block && trimmed == "```" {
            in_block = false;
            if is_quiz_block {
                blocks.push(current_block.clone());
            }
            current_block.clear();
            continue;
        }

        if in_block && is_quiz_block {
            if !current_block.is_empty() {
                current_block.push('\n');
            }
            current_block.push_str(line);
        }
    }

    // A chapter cut off mid-block still yields its accumulated questions
    if in_block && is_quiz_block && !current_block.is_empty() {
        blocks.push(current_block);
    }

    blocks
}

/// First `#` heading in the chapter, if any.
pub fn chapter_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

/// Parse a chapter Markdown file into a `QuizBank`, using the file stem as
/// the chapter id.
pub fn parse_chapter(path: &Path) -> Result<QuizBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read chapter file: {}", path.display()))?;

    let chapter_id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "chapter".to_string());

    parse_chapter_str(&content, &chapter_id, path)
}

/// Parse chapter Markdown into a `QuizBank` (useful for testing).
pub fn parse_chapter_str(content: &str, chapter_id: &str, source_path: &Path) -> Result<QuizBank> {
    let blocks = extract_quiz_blocks(content);
    if blocks.is_empty() {
        anyhow::bail!("no quiz blocks in {}", source_path.display());
    }

    let mut raw_questions = Vec::new();
    for block in &blocks {
        let parsed: TomlQuestionList = toml::from_str(block).with_context(|| {
            format!("failed to parse quiz block in {}", source_path.display())
        })?;
        raw_questions.extend(parsed.questions);
    }

    let title = chapter_title(content).unwrap_or_else(|| chapter_id.to_string());

    let mut bank = QuizBank::new(chapter_id, title);
    for question in questions_from_toml(raw_questions, source_path)? {
        bank = bank.add_question(question);
    }

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE_CHAPTER: &str = r#"# Namespaces

Clojure code lives in namespaces. Loading one looks like:

```clojure
(require '[clojure.string :as str])
```

Check yourself before moving on:

```quiz
[[questions]]
prompt = "`require` loads a namespace without referring its symbols."
explanation = "Use `:refer` to pull symbols in."

[[questions.choices]]
text = "True"
correct = true

[[questions.choices]]
text = "False"
```

More prose, then a second round:

```quiz
[[questions]]
prompt = "Which form declares a namespace?"
explanation = "`ns` goes at the top of the file."

[[questions.choices]]
text = "(ns my.app)"
correct = true

[[questions.choices]]
text = "(def my.app)"
```
"#;

    #[test]
    fn extract_only_quiz_blocks() {
        let blocks = extract_quiz_blocks(SAMPLE_CHAPTER);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("[[questions]]"));
        assert!(!blocks[0].contains("require '"));
    }

    #[test]
    fn extract_unclosed_trailing_block() {
        let input = "# Cut short\n\n```quiz\n[[questions]]\nprompt = \"Truncated?\"\n\n[[questions.choices]]\ntext = \"Yes\"\ncorrect = true";
        let blocks = extract_quiz_blocks(input);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("Truncated?"));
    }

    #[test]
    fn extract_no_blocks() {
        assert!(extract_quiz_blocks("# Just prose\n\nNothing here.").is_empty());
    }

    #[test]
    fn title_from_first_heading() {
        assert_eq!(chapter_title(SAMPLE_CHAPTER).as_deref(), Some("Namespaces"));
        assert_eq!(chapter_title("plain text"), None);
    }

    #[test]
    fn parse_chapter_merges_blocks() {
        let bank =
            parse_chapter_str(SAMPLE_CHAPTER, "clojure-namespaces", &PathBuf::from("ch.md"))
                .unwrap();
        assert_eq!(bank.chapter_id(), "clojure-namespaces");
        assert_eq!(bank.title(), "Namespaces");
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn parse_chapter_without_quiz_fails() {
        let err = parse_chapter_str("# Prose only", "prose", &PathBuf::from("prose.md"))
            .unwrap_err();
        assert!(err.to_string().contains("no quiz blocks"));
    }

    #[test]
    fn parse_chapter_title_falls_back_to_id() {
        let input = "```quiz\n[[questions]]\nprompt = \"p\"\n\n[[questions.choices]]\ntext = \"a\"\ncorrect = true\n```\n";
        let bank = parse_chapter_str(input, "untitled", &PathBuf::from("untitled.md")).unwrap();
        assert_eq!(bank.title(), "untitled");
    }

    #[test]
    fn parse_chapter_uses_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clojure-macros.md");
        std::fs::write(&path, SAMPLE_CHAPTER).unwrap();

        let bank = parse_chapter(&path).unwrap();
        assert_eq!(bank.chapter_id(), "clojure-macros");
    }

    #[test]
    fn bad_answer_key_in_block_fails() {
        let input = "```quiz\n[[questions]]\nprompt = \"p\"\n\n[[questions.choices]]\ntext = \"a\"\n```\n";
        let err = parse_chapter_str(input, "bad", &PathBuf::from("bad.md")).unwrap_err();
        assert!(format!("{err:#}").contains("no choice is marked correct"));
    }
}
