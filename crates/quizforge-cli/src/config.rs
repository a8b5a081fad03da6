//! quizforge configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizforge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizforgeConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where quiz content lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding quiz files (`.toml` and `.md`).
    #[serde(default = "default_quizzes_dir")]
    pub quizzes: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            quizzes: default_quizzes_dir(),
        }
    }
}

/// Where and how session reports are saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for saved session reports.
    #[serde(default = "default_results_dir")]
    pub results: PathBuf,
    /// Default output format for `take` and `score`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results: default_results_dir(),
            format: default_format(),
        }
    }
}

fn default_quizzes_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("./quizforge-results")
}
fn default_format() -> String {
    "text".to_string()
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizforge.toml` in the current directory
/// 2. `~/.config/quizforge/config.toml`
///
/// Missing files fall back to defaults; a given `--config` path must exist.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizforgeConfig::default(),
    };

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizforge"))
}
