// this_file: backends/posterline-core/src/diagnostics.rs

//! Routing diagnostics used by the layout engine for structured debug logging.

use crate::types::Run;
use log::{debug, log_enabled, Level};

/// Lightweight snapshot of how one string was split across fonts.
#[derive(Debug)]
pub struct RouteDiagnostics<'a> {
    operation: &'a str,
    chars: usize,
    runs: &'a [Run],
    size: Option<f32>,
}

impl<'a> RouteDiagnostics<'a> {
    /// Capture the snapshot for `runs` produced on behalf of `operation`.
    pub fn new(operation: &'a str, runs: &'a [Run]) -> Self {
        Self {
            operation,
            chars: runs.iter().map(|run| run.text.chars().count()).sum(),
            runs,
            size: None,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    fn fonts_summary(&self) -> String {
        self.runs
            .iter()
            .map(|run| format!("{}:{}", run.font, run.text.chars().count()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Emit the snapshot at debug level when logging is enabled.
    pub fn log(&self) {
        if log_enabled!(target: "posterline::route", Level::Debug) {
            debug!(
                target: "posterline::route",
                "op={op} chars={chars} runs={runs} size={size} fonts=[{fonts}]",
                op = self.operation,
                chars = self.chars,
                runs = self.runs.len(),
                size = self
                    .size
                    .map(|size| format!("{size:.1}"))
                    .unwrap_or_else(|| "-".to_string()),
                fonts = self.fonts_summary(),
            );
        }
    }
}
