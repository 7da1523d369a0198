use colored::Colorize;
use serde::Serialize;

use cph_check::CheckOutcome;

/// The outcome of judging a solution against the fetched sample test case.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    /// File name of the judged solution.
    pub solution: String,
    /// Whether the normalized outputs matched.
    pub passed: bool,
    /// The normalized expected output, present only on mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// The normalized output the solution produced, present only on mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

impl TestReport {
    /// Make a new `TestReport` for the outcome of a check.
    pub fn new(solution: String, outcome: CheckOutcome) -> TestReport {
        match outcome {
            CheckOutcome::Correct => TestReport {
                solution,
                passed: true,
                expected: None,
                received: None,
            },
            CheckOutcome::Incorrect { expected, received } => TestReport {
                solution,
                passed: false,
                expected: Some(expected),
                received: Some(received),
            },
        }
    }

    /// Print the human-readable report, with both normalized outputs on mismatch so they can be
    /// diffed by eye.
    pub fn print(&self) {
        if self.passed {
            println!(
                "{} {}",
                "Test case passed!".bright_green().bold(),
                self.solution
            );
        } else {
            println!(
                "{} {}",
                "Test case failed.".bright_red().bold(),
                self.solution
            );
            println!();
            println!("{}", "Expected:".bold());
            println!("{}", self.expected.as_deref().unwrap_or_default());
            println!();
            println!("{}", "Received:".bold());
            println!("{}", self.received.as_deref().unwrap_or_default());
        }
    }
}
