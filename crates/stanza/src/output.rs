//! Leveled, color-aware lifecycle printing.
//!
//! Informational lines go to stdout with a green label; error-styled lines
//! go to stderr with a red label. Color detection (tty, `NO_COLOR`) is
//! delegated to `colored`.

use colored::Colorize;
use std::fmt::Display;

/// Print an informational lifecycle line to stdout
pub(crate) fn info(label: &str, message: impl Display) {
    println!("{}{}", label.green(), message);
}

/// Print an error-styled lifecycle line to stderr
pub(crate) fn error(label: &str, message: impl Display) {
    eprintln!("{}{}", label.red(), message);
}

/// Whether color output is currently enabled.
///
/// Exposed for assertion helpers that want to match the harness styling in
/// their own output.
pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Enable ANSI escape handling on terminals that require explicit opt-in.
///
/// On failure, color output is disabled; the run itself proceeds.
pub(crate) fn init_terminal() {
    #[cfg(windows)]
    if colored::control::set_virtual_terminal(true).is_err() {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leveled_printing_does_not_panic() {
        info("[ RUN      ] ", "math.addition");
        error("[  FAILED  ] ", "math.addition");
    }

    #[test]
    fn init_terminal_is_safe_to_call() {
        init_terminal();
    }
}
