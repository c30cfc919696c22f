//! Grouping the registry snapshot into named suites.

use crate::case::TestCase;
use thiserror::Error;

/// Default hard limit on the number of distinct suites in one run.
pub const MAX_SUITES: usize = 64;

/// Default hard limit on the number of tests within a single suite.
pub const MAX_TESTS_PER_SUITE: usize = 512;

pub type BuildResult<T> = Result<T, BuildError>;

/// Fatal conditions hit while grouping registered cases into suites.
///
/// Overflow is reported to the caller rather than terminating on the spot;
/// the run entry point decides how to exit. No partial [`Environment`] is
/// ever returned alongside an error.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("number of test suites exceeds the maximum of {limit}")]
    TooManySuites { limit: usize },

    #[error("number of tests in suite '{suite}' exceeds the maximum of {limit}")]
    TooManyTests { suite: String, limit: usize },
}

/// Capacity bounds enforced while building an [`Environment`].
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum number of distinct suites
    pub max_suites: usize,
    /// Maximum number of tests within one suite
    pub max_tests_per_suite: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_suites: MAX_SUITES,
            max_tests_per_suite: MAX_TESTS_PER_SUITE,
        }
    }
}

/// A named, ordered group of test cases.
#[derive(Debug)]
pub struct Suite {
    name: &'static str,
    tests: Vec<TestCase>,
}

impl Suite {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            tests: Vec::new(),
        }
    }

    /// Suite name, unique within its environment
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Member tests in first-seen registration order
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }
}

/// The grouped view of one run's registered cases.
///
/// Built exactly once per run and owned by the caller of the run; nothing
/// retains it afterwards.
#[derive(Debug)]
pub struct Environment {
    suites: Vec<Suite>,
    total_tests: usize,
}

impl Environment {
    /// Group cases into suites under the default capacity limits
    pub fn build(cases: impl IntoIterator<Item = TestCase>) -> BuildResult<Self> {
        Self::build_with_limits(cases, Limits::default())
    }

    /// Group cases into suites, enforcing the given capacity bounds.
    ///
    /// Suite order is the order in which each suite name is first seen.
    /// Test order within a suite is encounter order, which need not be
    /// contiguous in the input. Suite lookup is a linear scan by exact
    /// name; suite counts are small.
    pub fn build_with_limits(
        cases: impl IntoIterator<Item = TestCase>,
        limits: Limits,
    ) -> BuildResult<Self> {
        let mut env = Self {
            suites: Vec::new(),
            total_tests: 0,
        };

        for case in cases {
            let index = match env
                .suites
                .iter()
                .position(|suite| suite.name == case.suite_name)
            {
                Some(index) => index,
                None => {
                    if env.suites.len() == limits.max_suites {
                        return Err(BuildError::TooManySuites {
                            limit: limits.max_suites,
                        });
                    }
                    env.suites.push(Suite::new(case.suite_name));
                    env.suites.len() - 1
                }
            };

            let suite = &mut env.suites[index];
            if suite.tests.len() == limits.max_tests_per_suite {
                return Err(BuildError::TooManyTests {
                    suite: suite.name.to_string(),
                    limit: limits.max_tests_per_suite,
                });
            }

            suite.tests.push(case);
            env.total_tests += 1;
        }

        Ok(env)
    }

    /// Suites in first-seen order
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Number of distinct suites
    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    /// Total number of tests across all suites
    pub fn total_tests(&self) -> usize {
        self.total_tests
    }
}
