//! Test support utilities for opseal integration tests.
//!
//! Provides key-material fixtures and a decryption helper so tests can
//! prove the ciphertext round-trips, plus a binary runner with a scrubbed
//! environment.

#![allow(dead_code)]

pub mod fixtures;

use assert_cmd::Command;

/// Environment variables the binary reads.
///
/// Every test clears these so ambient configuration on the machine running
/// the suite cannot leak into assertions.
pub const INPUT_VARS: &[&str] = &[
    "OP_SECRET_REFERENCE",
    "RENOVATE_ORG",
    "RENOVATE_REPO",
    "PGP_PUBLIC_KEY",
    "OP_SERVICE_ACCOUNT_TOKEN",
    "OPSEAL_LOG",
];

/// Build an `opseal` command with a scrubbed environment.
#[allow(deprecated)]
pub fn opseal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("opseal").expect("failed to find opseal binary");
    for var in INPUT_VARS {
        cmd.env_remove(var);
    }
    cmd
}
