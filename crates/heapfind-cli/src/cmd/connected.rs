//! Implementation of `heapfind connected <file> --size <n> <p> <q>`.
//!
//! Builds the same union-find as `components`, then answers a single
//! connectivity query.
//!
//! Output (human mode): `true` or `false`.
//! Output (JSON mode): `{"connected": bool, "component_size": k}` where `k`
//! is the size of the component containing `p`.
//!
//! Exit codes: 0 = success, 1 = size 0 or element outside `0..n`,
//! 2 = read/parse failure.
use crate::OutputFormat;
use crate::cmd::components::build_union_find;
use crate::error::CliError;
use crate::parse::parse_pairs;

/// Runs the `connected` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` cannot be parsed.
/// - [`CliError`] exit code 1 if `size` is zero, or any pair or the query
///   names an element outside `0..size`.
pub fn run(
    content: &str,
    size: usize,
    p: usize,
    q: usize,
    format: OutputFormat,
) -> Result<(), CliError> {
    let pairs = parse_pairs(content)?;
    let mut uf = build_union_find(size, &pairs)?;
    let connected = uf.connected(p, q)?;
    let component_size = uf.component_size(p)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => {
            use std::io::Write as _;
            writeln!(out, "{connected}")
        }
        OutputFormat::Json => {
            use std::io::Write as _;
            let output = serde_json::json!({
                "connected": connected,
                "component_size": component_size,
            });
            serde_json::to_string_pretty(&output)
                .map_err(std::io::Error::other)
                .and_then(|json| writeln!(out, "{json}"))
        }
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
