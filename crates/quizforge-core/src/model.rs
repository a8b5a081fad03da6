//! Core quiz data model.
//!
//! A [`Question`] can only be constructed in a valid state, so everything
//! downstream (banks, scoring, rendering) works with data whose answer key is
//! known to be sound.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{InvalidQuestion, QuizError};

/// A single multiple-choice question with its answer key.
///
/// Fields are private: the only way to obtain a `Question` is through
/// [`Question::new`] (or [`Question::true_false`]), which enforces that at
/// least one choice is marked correct and every marked index is in range.
/// Once constructed a question never changes.
#[derive(Debug, Clone)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct: BTreeSet<usize>,
    explanation: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// `correct` holds 0-based indices into `choices`. Fails with
    /// [`QuizError::InvalidQuestion`] when `choices` is empty, `correct` is
    /// empty, or any index is out of range.
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct: BTreeSet<usize>,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if choices.is_empty() {
            return Err(InvalidQuestion::NoChoices.into());
        }
        if correct.is_empty() {
            return Err(InvalidQuestion::NoCorrectChoice.into());
        }
        if let Some(&index) = correct.iter().find(|&&i| i >= choices.len()) {
            return Err(InvalidQuestion::CorrectOutOfRange {
                index,
                choices: choices.len(),
            }
            .into());
        }

        Ok(Self {
            prompt: prompt.into(),
            choices,
            correct,
            explanation: explanation.into(),
        })
    }

    /// Build the True/False shape most chapter quizzes use.
    ///
    /// Cannot fail: the answer key always points at one of the two choices.
    pub fn true_false(
        prompt: impl Into<String>,
        answer: bool,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices: vec!["True".to_string(), "False".to_string()],
            correct: BTreeSet::from([if answer { 0 } else { 1 }]),
            explanation: explanation.into(),
        }
    }

    /// The question text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Candidate answers in authored (display) order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// 0-based indices of the correct choice(s). Never empty.
    pub fn correct_indices(&self) -> &BTreeSet<usize> {
        &self.correct
    }

    /// Text shown after scoring, justifying the correct answer.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether a selection matches the answer key exactly.
    ///
    /// No partial credit: a superset or subset of the correct indices is
    /// wrong, same as any other mismatch.
    pub fn is_correct_selection(&self, selected: &BTreeSet<usize>) -> bool {
        *selected == self.correct
    }
}

/// The ordered quiz belonging to one chapter.
///
/// Insertion order is display order; questions are numbered from 1 in the
/// order they were added. Built once when a chapter's quiz is loaded and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct QuizBank {
    chapter_id: String,
    title: String,
    questions: Vec<Question>,
}

impl QuizBank {
    /// Create an empty bank for one chapter.
    pub fn new(chapter_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question, builder style.
    ///
    /// A [`Question`] cannot exist in an invalid state, so appending never
    /// fails.
    pub fn add_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Identifier of the chapter this quiz belongs to.
    pub fn chapter_id(&self) -> &str {
        &self.chapter_id
    }

    /// Human-readable chapter title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at a 0-based index.
    pub fn question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// The explanation for the question at a 0-based index.
    pub fn explanation_for(&self, index: usize) -> Result<&str, QuizError> {
        self.question(index).map(Question::explanation)
    }

    /// The learner-facing view of this quiz.
    ///
    /// Answer keys and explanations are structurally absent from the rendered
    /// types, so handing the result to a presenter cannot leak them before
    /// scoring.
    pub fn render(&self) -> RenderedQuiz {
        RenderedQuiz {
            chapter_id: self.chapter_id.clone(),
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| RenderedQuestion {
                    number: i + 1,
                    prompt: q.prompt.clone(),
                    choices: q.choices.clone(),
                })
                .collect(),
        }
    }
}

/// A quiz as presented to a learner: prompts and choices only.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedQuiz {
    pub chapter_id: String,
    pub title: String,
    pub questions: Vec<RenderedQuestion>,
}

/// One question as presented to a learner.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedQuestion {
    /// 1-based display number.
    pub number: usize,
    pub prompt: String,
    pub choices: Vec<String>,
}
