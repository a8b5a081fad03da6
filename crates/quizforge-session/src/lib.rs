//! quizforge-session — the interactive answering loop.
//!
//! A session walks a rendered quiz in order and collects an `Attempt`. The
//! `Prompter` trait abstracts where answers come from: a terminal, a script,
//! a test. Explanations and answer keys never pass through here; learners see
//! them only after scoring.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use anyhow::{Context, Result};
use quizforge_core::model::{QuizBank, RenderedQuestion};
use quizforge_core::scoring::Attempt;

/// What a prompter returned for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// A 0-based choice index.
    Choice(usize),
    /// Leave the question unanswered and move on.
    Skip,
    /// Stop the session, keeping answers given so far.
    Quit,
}

/// Source of answers for a session.
pub trait Prompter {
    fn ask(&mut self, question: &RenderedQuestion) -> Result<Reply>;
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    /// The answers collected.
    pub attempt: Attempt,
    /// False when the learner quit before the last question.
    pub completed: bool,
}

/// Walk the quiz in order, asking the prompter for each question.
///
/// Questions the prompter skips stay unanswered; a quit keeps everything
/// answered so far. An out-of-range choice from a prompter is logged and
/// treated as a skip (interactive prompters re-ask before returning).
pub fn run_session(bank: &QuizBank, prompter: &mut dyn Prompter) -> Result<SessionOutcome> {
    let rendered = bank.render();
    let mut attempt = Attempt::new();
    let mut completed = true;

    for question in &rendered.questions {
        match prompter.ask(question)? {
            Reply::Choice(choice) => {
                if choice < question.choices.len() {
                    attempt.select(question.number - 1, choice);
                } else {
                    tracing::warn!(
                        question = question.number,
                        choice,
                        "ignoring out-of-range selection"
                    );
                }
            }
            Reply::Skip => {}
            Reply::Quit => {
                completed = false;
                break;
            }
        }
    }

    Ok(SessionOutcome { attempt, completed })
}

/// Terminal prompter: prints the question, reads one line per answer.
///
/// Accepts a 1-based choice number, a blank line to skip, or `q` to quit.
/// EOF quits. Unparseable or out-of-range input re-asks.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<BufReader<Stdin>, Stdout> {
    /// A prompter wired to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, question: &RenderedQuestion) -> Result<Reply> {
        writeln!(self.output)?;
        writeln!(self.output, "{}. {}", question.number, question.prompt)?;
        for (i, choice) in question.choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice)?;
        }

        loop {
            write!(
                self.output,
                "answer [1-{}], blank to skip, q to quit: ",
                question.choices.len()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let bytes = self
                .input
                .read_line(&mut line)
                .context("failed to read answer")?;
            if bytes == 0 {
                return Ok(Reply::Quit);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Reply::Skip);
            }
            if trimmed.eq_ignore_ascii_case("q") {
                return Ok(Reply::Quit);
            }

            match trimmed.parse::<usize>() {
                Ok(n) if n >= 1 && n <= question.choices.len() => {
                    return Ok(Reply::Choice(n - 1));
                }
                _ => {
                    writeln!(
                        self.output,
                        "enter a number between 1 and {}",
                        question.choices.len()
                    )?;
                }
            }
        }
    }
}

/// Replays a fixed list of replies; quits once the script runs out.
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _question: &RenderedQuestion) -> Result<Reply> {
        Ok(self.replies.pop_front().unwrap_or(Reply::Quit))
    }
}
