//! Aggregated pass/fail outcome of one run.

use crate::case::TestCase;
use crate::output;

/// Counts and failures accumulated while executing an environment.
#[derive(Debug, Default)]
pub struct Report {
    passed: usize,
    failed: Vec<TestCase>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record one test outcome; failures are kept in encounter order
    pub(crate) fn record(&mut self, test: &TestCase, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed.push(*test);
        }
    }

    /// Number of tests that passed
    pub fn passed_count(&self) -> usize {
        self.passed
    }

    /// Failed tests, in the order they failed
    pub fn failed(&self) -> &[TestCase] {
        &self.failed
    }

    /// Total number of tests recorded
    pub fn total(&self) -> usize {
        self.passed + self.failed.len()
    }

    /// Whether every recorded test passed
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Print the error-styled block listing every failure, followed by the
    /// trailing failure count line.
    pub fn print_failures(&self) {
        output::error(
            "[  FAILED  ] ",
            format_args!("{} tests, listed below:", self.failed.len()),
        );
        for test in &self.failed {
            output::error("[  FAILED  ] ", test.full_name());
        }
        println!();
        println!(" {} FAILED TESTS", self.failed.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(suite: &'static str, test: &'static str) -> TestCase {
        TestCase {
            suite_name: suite,
            test_name: test,
            func: None,
        }
    }

    #[test]
    fn accounting_splits_passes_and_failures() {
        let mut report = Report::new();
        report.record(&case("a", "t1"), true);
        report.record(&case("a", "t2"), false);
        report.record(&case("b", "t1"), true);

        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed().len(), 1);
        assert_eq!(report.total(), 3);
        assert!(!report.all_passed());
    }

    #[test]
    fn failures_keep_encounter_order() {
        let mut report = Report::new();
        report.record(&case("a", "t2"), false);
        report.record(&case("b", "t1"), false);
        report.record(&case("a", "t1"), false);

        let names: Vec<String> = report.failed().iter().map(TestCase::full_name).collect();
        assert_eq!(names, ["a.t2", "b.t1", "a.t1"]);
    }

    #[test]
    fn empty_report_counts_as_all_passed() {
        let report = Report::new();
        assert!(report.all_passed());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn print_failures_renders_without_panicking() {
        let mut report = Report::new();
        report.record(&case("a", "t1"), false);
        report.print_failures();
    }
}
