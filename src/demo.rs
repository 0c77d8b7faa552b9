//! Demo — search a configured sequence and render the result.
//!
//! With the built-in defaults this prints:
//!
//! ```text
//! 5
//! Hello World!
//! ```

use anyhow::Context;
use serde::Serialize;
use stepsearch_core::config::{DemoConfig, OutputFormat};
use stepsearch_core::SortedSlice;

/// Outcome of one demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoResult {
    pub target: i64,
    /// `None` when the target is absent; serialised as `null`.
    pub index: Option<usize>,
}

/// Run the search described by `demo`.
///
/// Fails if the configured values are not sorted ascending.
pub fn run(demo: &DemoConfig) -> anyhow::Result<DemoResult> {
    let sorted = SortedSlice::new(&demo.values)
        .with_context(|| format!("demo values {:?} cannot be searched", demo.values))?;
    let index = sorted.search(&demo.target);
    tracing::info!(target_value = demo.target, len = sorted.len(), ?index, "demo search done");
    Ok(DemoResult {
        target: demo.target,
        index,
    })
}

/// Render the result line followed by the greeting line.
pub fn render(result: &DemoResult, greeting: &str, format: OutputFormat) -> anyhow::Result<String> {
    let line = match format {
        OutputFormat::Plain => match result.index {
            Some(i) => i.to_string(),
            None => "not found".to_string(),
        },
        OutputFormat::Json => serde_json::to_string(result)?,
    };
    Ok(format!("{line}\n{greeting}\n"))
}
