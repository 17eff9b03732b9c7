//! Terminal output helpers.
//!
//! Everything here writes to stderr: stdout is reserved for the ciphertext,
//! which downstream tooling consumes verbatim.

use std::fmt::Display;

use console::style;

/// Print an error message to stderr (red).
///
/// Example: `✗ invalid public key`
pub fn error(msg: impl Display) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ export OP_SERVICE_ACCOUNT_TOKEN with a valid token`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}
