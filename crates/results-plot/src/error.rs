// File: crates/results-plot/src/error.rs
// Summary: Error taxonomy for loading the results table and producing the chart.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Input file missing or unreadable.
    #[error("cannot read results table {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input present but not a well-formed numeric table.
    #[error("cannot parse results table {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A column the chart needs is not in the table.
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    KeyNotFound { column: String, available: Vec<String> },

    #[error("failed to render chart: {0:#}")]
    Render(anyhow::Error),

    #[error("cannot write chart image {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
