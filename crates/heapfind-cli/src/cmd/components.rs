//! Implementation of `heapfind components <file> --size <n>`.
//!
//! Parses one `p q` pair per line, unifies every pair in a [`UnionFind`] over
//! `0..n`, and prints the resulting partition.
//!
//! Output (human mode): a `components: C` line, then one line per component
//! listing its members, ordered by smallest member.
//! Output (JSON mode): `{"size": N, "components": C, "groups": [[...], ...]}`.
//!
//! Exit codes: 0 = success, 1 = size 0 or element outside `0..n`,
//! 2 = read/parse failure.
use heapfind_core::UnionFind;
use log::debug;

use crate::OutputFormat;
use crate::error::CliError;
use crate::parse::parse_pairs;

/// Partition summary printed by the command.
#[derive(Debug, PartialEq, Eq)]
pub struct ComponentStats {
    /// Universe size.
    pub size: usize,
    /// Number of components.
    pub components: usize,
    /// Members of each component, ordered by smallest member.
    pub groups: Vec<Vec<usize>>,
}

/// Runs the `components` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if `content` cannot be parsed.
/// - [`CliError`] exit code 1 if `size` is zero or a pair names an element
///   outside `0..size`.
pub fn run(content: &str, size: usize, format: OutputFormat) -> Result<(), CliError> {
    let pairs = parse_pairs(content)?;
    let mut uf = build_union_find(size, &pairs)?;
    let stats = ComponentStats::from_union_find(&mut uf);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Builds a union-find of `size` elements and unifies every pair.
///
/// # Errors
///
/// Returns [`CliError::Structure`] for an empty universe or an out-of-range
/// element; the message names the offending element.
pub fn build_union_find(size: usize, pairs: &[(usize, usize)]) -> Result<UnionFind, CliError> {
    let mut uf = UnionFind::new(size)?;
    let mut merges = 0usize;
    for &(p, q) in pairs {
        if uf.unify(p, q)? {
            merges += 1;
        }
    }
    debug!(
        "applied {} pair(s): {merges} merge(s), {} component(s)",
        pairs.len(),
        uf.components()
    );
    Ok(uf)
}

impl ComponentStats {
    /// Collects the partition from `uf`.
    pub fn from_union_find(uf: &mut UnionFind) -> Self {
        Self {
            size: uf.len(),
            components: uf.components(),
            groups: uf.groups(),
        }
    }
}

fn print_human<W: std::io::Write>(w: &mut W, stats: &ComponentStats) -> std::io::Result<()> {
    writeln!(w, "components: {}", stats.components)?;
    for group in &stats.groups {
        let members: Vec<String> = group.iter().map(ToString::to_string).collect();
        writeln!(w, "  {}", members.join(" "))?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, stats: &ComponentStats) -> std::io::Result<()> {
    let output = serde_json::json!({
        "size": stats.size,
        "components": stats.components,
        "groups": stats.groups,
    });
    let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn two_pairs_leave_three_components() {
        let mut uf = build_union_find(5, &[(0, 1), (2, 3)]).expect("valid");
        let stats = ComponentStats::from_union_find(&mut uf);
        assert_eq!(
            stats,
            ComponentStats {
                size: 5,
                components: 3,
                groups: vec![vec![0, 1], vec![2, 3], vec![4]],
            }
        );
    }

    #[test]
    fn no_pairs_leave_singletons() {
        let mut uf = build_union_find(3, &[]).expect("valid");
        let stats = ComponentStats::from_union_find(&mut uf);
        assert_eq!(stats.components, 3);
        assert_eq!(stats.groups, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn zero_size_is_logical_failure() {
        let err = build_union_find(0, &[]).expect_err("empty universe");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn out_of_range_pair_is_logical_failure() {
        let err = build_union_find(3, &[(0, 1), (1, 3)]).expect_err("3 is outside 0..3");
        assert_eq!(err.exit_code(), 1);
        assert!(err.message().contains("element 3"), "message: {}", err.message());
    }

    #[test]
    fn human_output_lists_groups() {
        let mut uf = build_union_find(4, &[(3, 0)]).expect("valid");
        let stats = ComponentStats::from_union_find(&mut uf);
        let mut buf = Vec::new();
        print_human(&mut buf, &stats).expect("write to vec");
        assert_eq!(
            String::from_utf8(buf).expect("utf-8"),
            "components: 3\n  0 3\n  1\n  2\n"
        );
    }

    #[test]
    fn json_output_has_groups() {
        let mut uf = build_union_find(3, &[(0, 2)]).expect("valid");
        let stats = ComponentStats::from_union_find(&mut uf);
        let mut buf = Vec::new();
        print_json(&mut buf, &stats).expect("write to vec");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(value["size"], 3);
        assert_eq!(value["components"], 2);
        assert_eq!(value["groups"], serde_json::json!([[0, 2], [1]]));
    }
}
