// File: crates/results-plot/src/main.rs
// Summary: CLI entry point; renders results.csv into results.png unless told otherwise.

use anyhow::Result;
use clap::Parser;
use results_plot::{cli::Args, Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    results_plot::run(&config)?;
    Ok(())
}
