// File: crates/results-plot/src/lib.rs
// Summary: Load a results table, then render benchmark timings per worker count to a PNG.

pub mod cli;
pub mod error;
pub mod report;
pub mod table;

use std::path::PathBuf;

use log::info;

pub use error::{ReportError, Result};
pub use report::{build_chart, render, render_png, ReportSpec, DEFAULT_SERIES};
pub use table::Table;

#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub spec: ReportSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("results.csv"),
            output: PathBuf::from("results.png"),
            spec: ReportSpec::default(),
        }
    }
}

/// Load the table, then render it. Any failure stops the run before the output is written.
pub fn run(config: &Config) -> Result<()> {
    info!("Using input file: {}", config.input.display());
    let table = Table::load(&config.input)?;
    info!("Loaded {} rows, columns {:?}", table.len(), table.column_names());

    render(&table, &config.spec, &config.output)?;
    info!("Wrote {}", config.output.display());
    Ok(())
}
