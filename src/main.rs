use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stepsearch::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "stepsearch", about = "Step search — find a value by halving power-of-two jumps")]
struct Cli {
    /// Value to look for (defaults to the configured demo target).
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Comma-separated ascending values to search.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,

    /// Output format for the result line.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Read configuration from this file instead of the user config path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stepsearch-debug.log in the temp dir.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Plain,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => OutputFormat::Plain,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("stepsearch-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "stepsearch debug log started");
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in config");
            eprintln!("warning: ignoring user config ({err:#}); using built-in defaults");
            Config::defaults()
        }),
    };
    if let Some(values) = cli.values {
        config.demo.values = values;
    }
    if let Some(target) = cli.target {
        config.demo.target = target;
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    tracing::debug!(format = %config.output.format, target_value = config.demo.target, "resolved config");
    let result = stepsearch::demo::run(&config.demo)?;
    let rendered = stepsearch::demo::render(&result, &config.demo.greeting, config.output.format)?;
    print!("{rendered}");
    Ok(())
}
