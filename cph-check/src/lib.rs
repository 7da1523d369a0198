//! Output normalization and comparison for judging a solution.
//!
//! The comparison is whitespace-insensitive in the same spirit of a `diff --ignore-all-space`
//! based checker: both the produced output and the expected output go through
//! [`normalize`](fn.normalize.html) before the equality check, so line-ending styles, trailing
//! spaces and blank lines never make a correct solution fail. Comparison is never done on the raw
//! bytes.

#![deny(missing_docs)]

/// Result of checking the output of a solution against the expected output.
///
/// A mismatch is a normal result, not an error: it carries both normalized strings so they can be
/// shown side by side to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The normalized outputs are identical.
    Correct,
    /// The normalized outputs differ.
    Incorrect {
        /// The normalized expected output.
        expected: String,
        /// The normalized output the solution produced.
        received: String,
    },
}

impl CheckOutcome {
    /// Whether the outcome is a pass.
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckOutcome::Correct)
    }
}

/// Normalize a program output before any comparison.
///
/// The text is split on any line-ending style (`\n` or `\r\n`), each line is trimmed
/// independently, the lines left empty by the trimming are discarded and the survivors are joined
/// back with a single `\n`, without a trailing newline.
///
/// Note that blank lines are removed unconditionally, even in the middle of the output.
///
/// ```
/// use cph_check::normalize;
///
/// assert_eq!(normalize("a \r\n\r\n  b\n"), "a\nb");
/// ```
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compare two already-normalized outputs.
pub fn outputs_match(received: &str, expected: &str) -> bool {
    received == expected
}

/// Normalize both outputs independently and compare them.
///
/// `received` is the text the solution wrote to stdout, `expected` is the content of the expected
/// output file. On mismatch the outcome carries both normalized strings.
pub fn check(received: &str, expected: &str) -> CheckOutcome {
    let received = normalize(received);
    let expected = normalize(expected);
    if outputs_match(&received, &expected) {
        CheckOutcome::Correct
    } else {
        CheckOutcome::Incorrect { expected, received }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_trims_lines() {
        assert_eq!(normalize("  a  \n\tb\t"), "a\nb");
    }

    #[test]
    fn test_normalize_removes_blank_lines() {
        assert_eq!(normalize("a\n\n  \nb"), "a\nb");
    }

    #[test]
    fn test_normalize_line_ending_equivalence() {
        assert_eq!(normalize("a\r\nb\n"), normalize("a\nb\n"));
    }

    #[test]
    fn test_normalize_no_trailing_newline() {
        assert_eq!(normalize("3\n\n"), "3");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \n \r\n\n"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "a",
            "a\nb",
            "  a  \r\n\r\n b\n\n",
            "3\n\n",
            "x y\t\nz  ",
            "\r\n\r\n",
        ];
        for sample in samples {
            assert_eq!(normalize(&normalize(sample)), normalize(sample));
        }
    }

    #[test]
    fn test_check_matches_normalized_equality() {
        let samples = [
            ("3", "3\n\n"),
            ("a\r\nb", "a\nb"),
            ("3", "4"),
            ("", ""),
            ("a b", "a  b"),
            ("hello\nworld", "hello\n\nworld"),
        ];
        for (received, expected) in samples {
            assert_eq!(
                check(received, expected).is_correct(),
                outputs_match(&normalize(received), &normalize(expected)),
                "check disagrees with normalized equality for {:?} / {:?}",
                received,
                expected,
            );
        }
    }

    #[test]
    fn test_check_correct() {
        assert_eq!(check("3", "3\n\n"), CheckOutcome::Correct);
    }

    #[test]
    fn test_check_incorrect_carries_both_sides() {
        let outcome = check("3\n", "4\n");
        assert_eq!(
            outcome,
            CheckOutcome::Incorrect {
                expected: "4".to_string(),
                received: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_check_internal_spacing_matters() {
        // only leading/trailing whitespace of each line is ignored
        assert!(!check("a b", "a  b").is_correct());
    }
}
