//! Self-test harness containing one deliberately failing test.
//!
//! Used by the end-to-end tests to check the failure block and the exit
//! status when a run is not clean.

use std::process::ExitCode;

mod arithmetic {
    stanza::test_case!(arithmetic, addition, |ctx| {
        if 2 + 2 != 4 {
            ctx.fail();
        }
    });
}

mod parsing {
    use stanza::TestContext;

    stanza::test_case!(parsing, accepts_balanced, |ctx| {
        if !balanced("(())") {
            ctx.fail();
        }
    });

    stanza::test_case!(parsing, rejects_unbalanced, |ctx| {
        // Deliberately wrong expectation; this test must fail.
        if !balanced("(()") {
            ctx.fail();
        }
    });

    fn balanced(input: &str) -> bool {
        let mut depth: i32 = 0;
        for ch in input.chars() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return false;
            }
        }
        depth == 0
    }
}

fn main() -> ExitCode {
    stanza::run()
}
