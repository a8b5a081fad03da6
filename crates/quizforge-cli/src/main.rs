//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizforge",
    version,
    about = "Chapter quiz toolkit: validate, take, and score self-assessment quizzes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz interactively
    Take {
        /// Path to a .toml quiz or .md chapter, or a chapter id resolved
        /// under the configured quizzes directory
        #[arg(long)]
        quiz: PathBuf,

        /// Output directory for saved reports (default from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, html, markdown, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a recorded attempt without an interactive session
    Score {
        /// Path to a .toml quiz or .md chapter, or a chapter id
        #[arg(long)]
        quiz: PathBuf,

        /// Path to an answers JSON file
        #[arg(long)]
        attempt: PathBuf,

        /// Output directory for saved reports (default from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, html, markdown, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a quiz as learners see it, answers withheld
    Render {
        /// Path to a .toml quiz or .md chapter
        #[arg(long)]
        quiz: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate quiz files
    Validate {
        /// Path to a quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Compare two saved session reports on the same chapter
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Exit code 1 if any question slipped from right to wrong
        #[arg(long)]
        fail_on_slip: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Summarize saved session reports
    Stats {
        /// Directory of saved reports (default from config)
        #[arg(long)]
        results: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            quiz,
            output,
            format,
            config,
        } => commands::take::execute(quiz, output, format, config),
        Commands::Score {
            quiz,
            attempt,
            output,
            format,
            config,
        } => commands::score::execute(quiz, attempt, output, format, config),
        Commands::Render { quiz, format } => commands::render::execute(quiz, format),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Compare {
            baseline,
            current,
            fail_on_slip,
            format,
        } => commands::compare::execute(baseline, current, fail_on_slip, format),
        Commands::Stats { results, config } => commands::stats::execute(results, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
