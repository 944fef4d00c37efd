//! Text input parsing for the `sort`, `components` and `connected` commands.
//!
//! Both formats are line oriented. Blank lines are skipped and `#` starts a
//! comment that runs to the end of the line. Errors name the 1-based line of
//! the first malformed token.
use crate::error::CliError;

/// Parses whitespace-separated signed integers.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] on the first token that is not an `i64`.
pub fn parse_integers(content: &str) -> Result<Vec<i64>, CliError> {
    let mut values = Vec::new();
    for (line_no, line) in significant_lines(content) {
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| CliError::ParseFailed {
                detail: format!("line {line_no}: invalid integer {token:?}"),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Parses one `p q` element pair per line.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] if a line does not hold exactly two
/// non-negative integers.
pub fn parse_pairs(content: &str) -> Result<Vec<(usize, usize)>, CliError> {
    let mut pairs = Vec::new();
    for (line_no, line) in significant_lines(content) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [p, q] = tokens.as_slice() else {
            return Err(CliError::ParseFailed {
                detail: format!(
                    "line {line_no}: expected two element ids, found {} token(s)",
                    tokens.len()
                ),
            });
        };
        pairs.push((parse_element(p, line_no)?, parse_element(q, line_no)?));
    }
    Ok(pairs)
}

fn parse_element(token: &str, line_no: usize) -> Result<usize, CliError> {
    token.parse::<usize>().map_err(|_| CliError::ParseFailed {
        detail: format!("line {line_no}: invalid element id {token:?}"),
    })
}

/// Yields `(line_no, text)` for lines with content left after stripping
/// comments.
fn significant_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.lines().enumerate().filter_map(|(i, line)| {
        let text = line.split('#').next().unwrap_or_default().trim();
        (!text.is_empty()).then_some((i + 1, text))
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    #[test]
    fn integers_across_lines() {
        let values = parse_integers("5 3 8\n1\n\n9 2\n").expect("valid");
        assert_eq!(values, vec![5, 3, 8, 1, 9, 2]);
    }

    #[test]
    fn integers_allow_negatives_and_comments() {
        let values = parse_integers("# header\n-4 7 # trailing\n").expect("valid");
        assert_eq!(values, vec![-4, 7]);
    }

    #[test]
    fn integers_report_line_of_bad_token() {
        match parse_integers("1 2\n3 four\n") {
            Err(CliError::ParseFailed { detail }) => {
                assert!(detail.starts_with("line 2"), "detail: {detail}");
                assert!(detail.contains("four"), "detail: {detail}");
            }
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(parse_integers("").expect("valid").is_empty());
        assert!(parse_pairs("\n# nothing\n").expect("valid").is_empty());
    }

    #[test]
    fn pairs_one_per_line() {
        let pairs = parse_pairs("0 1\n2 3\n# skip\n\n1 2\n").expect("valid");
        assert_eq!(pairs, vec![(0, 1), (2, 3), (1, 2)]);
    }

    #[test]
    fn pairs_reject_wrong_arity() {
        match parse_pairs("0 1\n2\n") {
            Err(CliError::ParseFailed { detail }) => {
                assert!(detail.contains("line 2"), "detail: {detail}");
                assert!(detail.contains("1 token"), "detail: {detail}");
            }
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn pairs_reject_negative_ids() {
        let err = parse_pairs("0 -1\n").expect_err("negative id");
        assert_eq!(err.exit_code(), 2);
    }
}
