//! Configuration types for stepsearch.
//!
//! [`Config::load`] layers `~/.config/stepsearch/config.toml` (if present) on
//! top of the embedded defaults. Nothing is written to disk.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[demo]
values   = [1, 3, 5, 7, 9, 11, 13, 15, 17]
target   = 11
greeting = "Hello World!"

[output]
format = "plain"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[demo]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    /// Must be sorted ascending; checked when the demo runs.
    #[serde(default = "default_values")]
    pub values: Vec<i64>,
    #[serde(default = "default_target")]
    pub target: i64,
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_values() -> Vec<i64> { vec![1, 3, 5, 7, 9, 11, 13, 15, 17] }
fn default_target() -> i64 { 11 }
fn default_greeting() -> String { "Hello World!".to_string() }

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            values: default_values(),
            target: default_target(),
            greeting: default_greeting(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the demo prints its result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare index, or `not found`.
    #[default]
    Plain,
    /// A single JSON object: `{"target":..,"index":..}`.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the user config path, layered on top of the built-in
    /// defaults. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");
        Self::layered(&path, false)
    }

    /// Load a specific file on top of the built-in defaults. The file must
    /// exist.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config from explicit path");
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/stepsearch/config.toml`, falling back to
/// `$HOME/.config/stepsearch/config.toml`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("stepsearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
