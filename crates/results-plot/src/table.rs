// File: crates/results-plot/src/table.rs
// Summary: Column-oriented, read-only table loaded from a delimited results file.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{ReportError, Result};

/// Numeric columns keyed by header name, all of equal length, header order preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl Table {
    /// Load a comma-delimited file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReportError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Parse a table from any reader; `origin` only labels errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let parse_err = |message: String| ReportError::Parse { path: origin.to_path_buf(), message };
        // I/O failures while reading are access errors, everything else is malformed input
        let read_err = |e: csv::Error| {
            let message = e.to_string();
            match e.into_kind() {
                csv::ErrorKind::Io(source) => ReportError::FileAccess { path: origin.to_path_buf(), source },
                _ => parse_err(message),
            }
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(read_err)?.clone();
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(parse_err("missing header row".to_string()));
        }
        let names = dedupe(headers.iter());
        debug!("Headers: {:?}", names);

        let mut columns = vec![Vec::new(); names.len()];
        let mut rows = 0usize;
        for rec in rdr.records() {
            let rec = rec.map_err(read_err)?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            for (i, cell) in rec.iter().enumerate() {
                let value = parse_cell(cell).ok_or_else(|| {
                    parse_err(format!("line {line}, column '{}': '{cell}' is not a number", names[i]))
                })?;
                columns[i].push(value);
            }
            rows += 1;
        }

        Ok(Self { names, columns, rows })
    }

    /// Build a table in memory. Every column must have the same length.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        if let Some((name, v)) = columns.iter().find(|(_, v)| v.len() != rows) {
            return Err(ReportError::Parse {
                path: "<memory>".into(),
                message: format!("column '{name}' has {} values, expected {rows}", v.len()),
            });
        }
        let (names, columns): (Vec<_>, Vec<_>) = columns.into_iter().unzip();
        Ok(Self { names: dedupe(names.iter().map(String::as_str)), columns, rows })
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| ReportError::KeyNotFound {
                column: name.to_string(),
                available: self.names.clone(),
            })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Empty cells become NaN, which renders as a gap.
fn parse_cell(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return Some(f64::NAN);
    }
    cell.parse::<f64>().ok()
}

/// Repeated header names get a `.1`, `.2`, ... suffix, extended until the name is unused,
/// so every column stays addressable.
fn dedupe<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    names
        .map(|n| {
            let mut name = n.to_string();
            if taken.contains(&name) {
                let count = counts.entry(n).or_insert(0);
                loop {
                    *count += 1;
                    name = format!("{n}.{count}");
                    if !taken.contains(&name) {
                        break;
                    }
                }
            }
            taken.insert(name.clone());
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_parse_as_floats() {
        assert_eq!(parse_cell("42"), Some(42.0));
        assert_eq!(parse_cell("1.5e2"), Some(150.0));
        assert!(parse_cell("").is_some_and(f64::is_nan));
        assert_eq!(parse_cell("fast"), None);
    }

    #[test]
    fn duplicate_headers_get_suffixes() {
        let names = dedupe(["a", "b", "a", "a"].into_iter());
        assert_eq!(names, vec!["a", "b", "a.1", "a.2"]);
    }

    #[test]
    fn suffixed_duplicate_skips_existing_header() {
        let names = dedupe(["a", "a", "a.1"].into_iter());
        assert_eq!(names, vec!["a", "a.1", "a.1.1"]);
    }
}
