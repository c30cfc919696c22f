//! Sequential execution of a built environment.

use crate::case::{TestCase, TestContext};
use crate::environment::Environment;
use crate::output;
use crate::report::Report;

/// Walk the environment suite by suite, test by test, in order.
///
/// Each test body receives a fresh [`TestContext`]; the outcome is read from
/// the context after the body returns. A case without a body is an automatic
/// pass. Failures never abort the walk.
pub fn run_environment(env: &Environment) -> Report {
    let mut report = Report::new();

    for suite in env.suites() {
        output::info(
            "[----------] ",
            format_args!("{} tests from {}", suite.tests().len(), suite.name()),
        );

        for test in suite.tests() {
            let passed = run_single(test);
            report.record(test, passed);
        }

        output::info(
            "[----------] ",
            format_args!("{} tests from {}", suite.tests().len(), suite.name()),
        );
        println!();
    }

    report
}

fn run_single(test: &TestCase) -> bool {
    output::info("[ RUN      ] ", test.full_name());

    let ctx = TestContext::new();
    if let Some(func) = test.func {
        func(&ctx);
    }
    let passed = !ctx.failed();

    if passed {
        output::info("[       OK ] ", test.full_name());
    } else {
        output::error("[  FAILED  ] ", test.full_name());
    }

    passed
}
