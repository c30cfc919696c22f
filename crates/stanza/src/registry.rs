//! Process-wide registry of test cases.
//!
//! Any module may contribute cases with [`test_case!`](crate::test_case)
//! without a central list being maintained anywhere; `inventory` aggregates
//! the submissions before `main` runs, so every contribution is visible by
//! the time a run snapshots the registry. Ordering is deterministic for a
//! given build, but nothing stronger is promised across modules.

use crate::case::TestCase;

inventory::collect!(TestCase);

/// Snapshot every registered case, in this build's registration order
pub fn registered_cases() -> Vec<TestCase> {
    inventory::iter::<TestCase>.into_iter().copied().collect()
}

/// Registers a test case with the process-wide registry.
///
/// The body receives a [`TestContext`](crate::TestContext); calling
/// [`fail`](crate::TestContext::fail) on it (directly or from a helper)
/// marks the test failed.
///
/// ```
/// stanza::test_case!(math, addition, |ctx| {
///     if 2 + 2 != 4 {
///         ctx.fail();
///     }
/// });
/// ```
#[macro_export]
macro_rules! test_case {
    ($suite:ident, $test:ident, |$ctx:ident| $body:block) => {
        $crate::inventory::submit! {
            $crate::TestCase {
                suite_name: stringify!($suite),
                test_name: stringify!($test),
                func: Some({
                    fn $test($ctx: &$crate::TestContext) $body
                    $test as fn(&$crate::TestContext)
                }),
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::TestContext;

    fn noop(_ctx: &TestContext) {}

    inventory::submit! {
        TestCase {
            suite_name: "registry_probe",
            test_name: "with_body",
            func: Some(noop),
        }
    }

    inventory::submit! {
        TestCase {
            suite_name: "registry_probe",
            test_name: "without_body",
            func: None,
        }
    }

    crate::test_case!(registry_macro_probe, expands_and_registers, |_ctx| {});

    #[test]
    fn snapshot_contains_direct_submissions() {
        let probes: Vec<TestCase> = registered_cases()
            .into_iter()
            .filter(|case| case.suite_name == "registry_probe")
            .collect();

        assert_eq!(probes.len(), 2);
        assert!(probes.iter().any(|c| c.test_name == "with_body"));
        assert!(probes.iter().any(|c| c.test_name == "without_body"));
    }

    #[test]
    fn snapshot_contains_macro_submissions() {
        let found = registered_cases().into_iter().any(|case| {
            case.suite_name == "registry_macro_probe"
                && case.test_name == "expands_and_registers"
                && case.func.is_some()
        });
        assert!(found);
    }

    #[test]
    fn snapshot_order_is_stable_within_a_process() {
        let first = registered_cases();
        let second = registered_cases();

        let names = |cases: &[TestCase]| -> Vec<String> {
            cases.iter().map(TestCase::full_name).collect()
        };
        assert_eq!(names(&first), names(&second));
    }
}
