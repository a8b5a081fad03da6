//! Build a quiz in code, score an attempt, and print the review.
//!
//! Run with: `cargo run -p quizforge-core --example score_attempt`

use std::collections::BTreeSet;

use quizforge_core::model::{Question, QuizBank};
use quizforge_core::scoring::Attempt;

fn main() -> anyhow::Result<()> {
    let bank = QuizBank::new("clojure-atoms", "Atoms")
        .add_question(Question::true_false(
            "`swap!` applies a function to an atom's current value.",
            true,
            "`swap!` retries the function until the compare-and-set succeeds.",
        ))
        .add_question(Question::new(
            "Which form reads an atom's value?",
            vec!["deref".into(), "swap!".into(), "reset!".into()],
            BTreeSet::from([0]),
            "`deref` (or the `@` reader macro) returns the current value.",
        )?);

    let mut attempt = Attempt::new();
    attempt.select(0, 0);
    attempt.select(1, 2);

    let report = bank.score(&attempt);
    println!(
        "Score: {}/{} ({:.1}%)\n",
        report.correct,
        report.total,
        report.percent()
    );

    for (i, correct) in report.details.iter().enumerate() {
        let question = bank.question(i)?;
        let marker = if *correct { "OK  " } else { "MISS" };
        println!("{marker} {}. {}", i + 1, question.prompt());
        if !correct {
            println!("     {}", bank.explanation_for(i)?);
        }
    }

    Ok(())
}
