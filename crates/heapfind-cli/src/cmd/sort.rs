//! Implementation of `heapfind sort <file> [--remove <value>]...`.
//!
//! Parses whitespace-separated integers, heapifies them into an
//! [`IndexedMinHeap`], removes one occurrence of each `--remove` value, then
//! polls the heap dry.
//!
//! Output (human mode): one value per line, ascending.
//! Output (JSON mode): `{"sorted": [...], "removed": [...], "missing": [...]}`.
//!
//! Removal values that are not present are logged as warnings and reported
//! under `missing`; they do not fail the command.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use heapfind_core::IndexedMinHeap;
use log::{debug, warn};

use crate::OutputFormat;
use crate::error::CliError;
use crate::parse::parse_integers;

/// Result of a sort run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Remaining values in ascending order.
    pub sorted: Vec<i64>,
    /// Removal requests that found a value, in request order.
    pub removed: Vec<i64>,
    /// Removal requests that found nothing, in request order.
    pub missing: Vec<i64>,
}

/// Runs the `sort` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if `content` is not a list of
/// integers, or if stdout cannot be written.
pub fn run(content: &str, removals: &[i64], format: OutputFormat) -> Result<(), CliError> {
    let values = parse_integers(content)?;
    debug!("parsed {} value(s)", values.len());

    let outcome = sort_values(values, removals);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &outcome),
        OutputFormat::Json => print_json(&mut out, &outcome),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Heapifies `values`, applies `removals`, and drains the heap.
pub fn sort_values(values: Vec<i64>, removals: &[i64]) -> SortOutcome {
    let mut heap = IndexedMinHeap::from_vec(values);
    let mut outcome = SortOutcome::default();

    for &value in removals {
        if heap.remove(&value) {
            outcome.removed.push(value);
        } else {
            warn!("value {value} is not present; nothing removed");
            outcome.missing.push(value);
        }
    }

    outcome.sorted = heap.into_sorted_vec();
    outcome
}

fn print_human<W: std::io::Write>(w: &mut W, outcome: &SortOutcome) -> std::io::Result<()> {
    for value in &outcome.sorted {
        writeln!(w, "{value}")?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, outcome: &SortOutcome) -> std::io::Result<()> {
    let output = serde_json::json!({
        "sorted": outcome.sorted,
        "removed": outcome.removed,
        "missing": outcome.missing,
    });
    let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn sorts_ascending() {
        let outcome = sort_values(vec![5, 3, 8, 1, 9, 2], &[]);
        assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 8, 9]);
        assert!(outcome.removed.is_empty());
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn removal_takes_one_occurrence() {
        let outcome = sort_values(vec![4, 4, 2], &[4]);
        assert_eq!(outcome.sorted, vec![2, 4]);
        assert_eq!(outcome.removed, vec![4]);
    }

    #[test]
    fn missing_removals_are_reported() {
        let outcome = sort_values(vec![1, 2], &[7, 1, 1]);
        assert_eq!(outcome.sorted, vec![2]);
        assert_eq!(outcome.removed, vec![1]);
        assert_eq!(outcome.missing, vec![7, 1]);
    }

    #[test]
    fn human_output_is_one_value_per_line() {
        let outcome = sort_values(vec![3, -1, 2], &[]);
        let mut buf = Vec::new();
        print_human(&mut buf, &outcome).expect("write to vec");
        assert_eq!(String::from_utf8(buf).expect("utf-8"), "-1\n2\n3\n");
    }

    #[test]
    fn json_output_has_all_fields() {
        let outcome = sort_values(vec![3, 1], &[3, 9]);
        let mut buf = Vec::new();
        print_json(&mut buf, &outcome).expect("write to vec");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(value["sorted"], serde_json::json!([1]));
        assert_eq!(value["removed"], serde_json::json!([3]));
        assert_eq!(value["missing"], serde_json::json!([9]));
    }
}
