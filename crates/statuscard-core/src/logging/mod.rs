//! Logging setup shared by the desktop page and the CLI.
//!
//! Console output goes through `tracing_subscriber::fmt` on stderr, keeping
//! stdout free for command output. When a logs
//! directory is given, events at or above a threshold are also appended to a
//! per-instance JSONL file:
//!
//! ```text
//! <data_dir>/logs/
//! ├── 2026-10-19_desktop.jsonl
//! └── 2026-10-19_cli.jsonl
//! ```
//!
//! ```bash
//! # Presence failures only
//! jq 'select(.msg == "Presence poll failed")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub use entry::DiagnosticEntry;
pub use layer::DiagnosticsLayer;
pub use writer::{read_entries, DiagnosticsWriter};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open diagnostics file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Console filter directive for a `-v` count.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds and installs the global subscriber.
pub struct LoggingBuilder {
    instance: String,
    verbosity: u8,
    logs_dir: Option<PathBuf>,
    diagnostics_level: LevelFilter,
    console: bool,
}

impl LoggingBuilder {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            verbosity: 0,
            logs_dir: None,
            diagnostics_level: LevelFilter::INFO,
            console: true,
        }
    }

    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Also write JSONL diagnostics into `logs_dir`.
    pub fn logs_dir(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = Some(logs_dir.into());
        self
    }

    /// Lowest level written to the diagnostics file (INFO by default).
    pub fn diagnostics_level(mut self, level: LevelFilter) -> Self {
        self.diagnostics_level = level;
        self
    }

    pub fn no_console(mut self) -> Self {
        self.console = false;
        self
    }

    pub fn build_layer(&self) -> std::io::Result<Option<DiagnosticsLayer>> {
        self.logs_dir
            .as_ref()
            .map(|dir| DiagnosticsLayer::new(dir, &self.instance))
            .transpose()
    }

    /// Install the subscriber. Returns the diagnostics file path, if any.
    ///
    /// `RUST_LOG` overrides the verbosity for the console layer only; the
    /// diagnostics file keeps its own threshold.
    pub fn init(self) -> Result<Option<PathBuf>, LoggingError> {
        let diagnostics = self.build_layer()?;
        let log_path = diagnostics.as_ref().map(|l| l.log_path().to_path_buf());

        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(self.verbosity)));

        let console = self.console.then(|| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter)
        });

        tracing_subscriber::registry()
            .with(console)
            .with(diagnostics.map(|layer| layer.with_filter(self.diagnostics_level)))
            .try_init()
            .map_err(|e| LoggingError::AlreadyInstalled(e.to_string()))?;

        Ok(log_path)
    }
}
