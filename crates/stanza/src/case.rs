//! Test case descriptors and the per-invocation failure context.

use std::cell::Cell;

/// A single registered test case.
///
/// Identity is the `(suite_name, test_name)` pair. Duplicate pairs are not
/// rejected; each registration executes as an independent test.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Name of the suite this test belongs to (grouping key, exact match)
    pub suite_name: &'static str,
    /// Name of the test within its suite
    pub test_name: &'static str,
    /// The test body. A case without a body executes as an automatic pass.
    pub func: Option<fn(&TestContext)>,
}

impl TestCase {
    /// Create a test case with a body
    pub const fn new(
        suite_name: &'static str,
        test_name: &'static str,
        func: fn(&TestContext),
    ) -> Self {
        Self {
            suite_name,
            test_name,
            func: Some(func),
        }
    }

    /// Fully qualified `suite.test` name used in lifecycle output
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.suite_name, self.test_name)
    }
}

/// Failure signal for one test invocation.
///
/// A fresh context is handed to each test body. The test, or any helper it
/// passes the context to, may mark the invocation failed any number of
/// times; the outcome is boolean, so one call and ten calls read the same.
/// The context is dropped when the invocation ends and carries no state into
/// the next test.
#[derive(Debug, Default)]
pub struct TestContext {
    failed: Cell<bool>,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mark the current test failed. Idempotent.
    pub fn fail(&self) {
        self.failed.set(true);
    }

    /// Whether [`fail`](Self::fail) was called during this invocation
    pub fn failed(&self) -> bool {
        self.failed.get()
    }
}
