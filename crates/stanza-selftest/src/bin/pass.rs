//! Self-test harness in which every registered test passes.
//!
//! Cases are contributed from independent modules with no shared list; the
//! harness itself only hands control to the framework.

use std::process::ExitCode;

mod arithmetic {
    use stanza::TestContext;

    stanza::test_case!(arithmetic, addition, |ctx| {
        if 2 + 2 != 4 {
            ctx.fail();
        }
    });

    stanza::test_case!(arithmetic, subtraction_via_helper, |ctx| {
        expect_positive(ctx, 5 - 3);
    });

    fn expect_positive(ctx: &TestContext, value: i32) {
        if value <= 0 {
            ctx.fail();
        }
    }
}

mod text {
    stanza::test_case!(text, concatenation, |ctx| {
        let joined = format!("{}{}", "foo", "bar");
        if joined != "foobar" {
            ctx.fail();
        }
    });
}

fn main() -> ExitCode {
    stanza::run()
}
