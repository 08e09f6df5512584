// File: crates/results-plot/src/cli.rs
// Summary: Command-line arguments and their conversion into a run configuration.

use std::path::PathBuf;

use chart_core::{theme, Theme};
use clap::Parser;

use crate::report::{ReportSpec, DEFAULT_SERIES};
use crate::Config;

#[derive(Debug, Parser)]
#[command(name = "results-plot", version, about = "Plot benchmark timings against worker count")]
pub struct Args {
    /// Delimited results table with a header row
    #[arg(short, long, default_value = "results.csv")]
    pub input: PathBuf,
    /// Where to write the PNG chart (overwritten)
    #[arg(short, long, default_value = "results.png")]
    pub output: PathBuf,
    /// Column used for the x axis
    #[arg(long, default_value = "workers")]
    pub x_column: String,
    /// Columns to plot, in legend order
    #[arg(short, long = "series", value_delimiter = ',', default_values = DEFAULT_SERIES)]
    pub series: Vec<String>,
    /// Color theme: light, dark or high-contrast-dark
    #[arg(long, default_value = "light", value_parser = parse_theme)]
    pub theme: Theme,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    theme::find(name).ok_or_else(|| {
        let known = theme::presets().iter().map(|t| t.name).collect::<Vec<_>>().join(", ");
        format!("unknown theme '{name}' (expected one of: {known})")
    })
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            spec: ReportSpec {
                x_column: args.x_column,
                series: args.series,
                theme: args.theme,
                ..ReportSpec::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fixed_relative_paths() {
        let config = Config::from(Args::try_parse_from(["results-plot"]).unwrap());
        assert_eq!(config.input, PathBuf::from("results.csv"));
        assert_eq!(config.output, PathBuf::from("results.png"));
        assert_eq!(config.spec.series, DEFAULT_SERIES);
        assert_eq!(config.spec.theme.name, "light");
    }

    #[test]
    fn series_override_keeps_order() {
        let args = Args::try_parse_from(["results-plot", "--series", "b,a", "--x-column", "threads"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.spec.series, vec!["b", "a"]);
        assert_eq!(config.spec.x_column, "threads");
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Args::try_parse_from(["results-plot", "--theme", "sepia"]).is_err());
    }
}
