//! Stanza — a minimal unit-test framework core.
//!
//! Test cases are contributed from any number of independent modules with
//! [`test_case!`], collected into a process-wide registry before `main`,
//! grouped into named suites, executed sequentially, and summarized as a
//! pass/fail report:
//!
//! - Registration: decentralized and static, visible before the run starts
//! - Grouping: first-seen suite order, bounded by [`Limits`]
//! - Execution: strictly sequential, with a per-invocation failure signal
//! - Reporting: pass count plus an ordered failure list
//!
//! # Example
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! stanza::test_case!(math, addition, |ctx| {
//!     if 2 + 2 != 4 {
//!         ctx.fail();
//!     }
//! });
//!
//! fn main() -> ExitCode {
//!     stanza::run()
//! }
//! ```
//!
//! # Exit status
//!
//! [`run`] returns `0` when every test passed, `1` when at least one test
//! failed, and `2` for harness errors (a capacity limit was exceeded while
//! grouping, in which case no tests execute).

pub mod case;
pub mod environment;
pub mod executor;
pub mod output;
pub mod registry;
pub mod report;

pub use case::{TestCase, TestContext};
pub use environment::{
    BuildError, BuildResult, Environment, Limits, Suite, MAX_SUITES, MAX_TESTS_PER_SUITE,
};
pub use output::colors_enabled;
pub use registry::registered_cases;
pub use report::Report;

// Re-exported for `test_case!` expansion; not part of the public API.
#[doc(hidden)]
pub use inventory;

use std::process::ExitCode;

/// Exit status when every executed test passed
pub const EXIT_PASSED: u8 = 0;
/// Exit status when at least one test failed
pub const EXIT_TEST_FAILURES: u8 = 1;
/// Exit status for harness errors: capacity overflow during grouping
pub const EXIT_HARNESS_ERROR: u8 = 2;

/// Run every registered test and report the outcome.
///
/// Performs the full pipeline: snapshot the registry, group it into suites,
/// execute each suite in order, and print the summary. The environment and
/// report live only for the duration of this call.
pub fn run() -> ExitCode {
    output::init_terminal();

    let env = match Environment::build(registry::registered_cases()) {
        Ok(env) => env,
        Err(err) => {
            output::error("Error: ", err);
            return ExitCode::from(EXIT_HARNESS_ERROR);
        }
    };

    output::info(
        "[==========] ",
        format_args!(
            "Running {} tests from {} test suites.",
            env.total_tests(),
            env.suite_count()
        ),
    );
    output::info("[----------] ", "Global test environment set-up.");

    let report = executor::run_environment(&env);

    output::info("[----------] ", "Global test environment tear-down.");
    output::info(
        "[==========] ",
        format_args!(
            "{} tests from {} test suites ran.",
            env.total_tests(),
            env.suite_count()
        ),
    );
    output::info(
        "[  PASSED  ] ",
        format_args!("{} tests.", report.passed_count()),
    );

    if report.all_passed() {
        ExitCode::from(EXIT_PASSED)
    } else {
        report.print_failures();
        ExitCode::from(EXIT_TEST_FAILURES)
    }
}
