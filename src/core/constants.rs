//! Constants used throughout opseal.
//!
//! Centralizes magic strings shared across modules.

/// Scheme prefix for 1Password secret references.
pub const REFERENCE_SCHEME: &str = "op://";

/// Number of path segments in a secret reference (vault/item/field).
pub const REFERENCE_SEGMENTS: usize = 3;

/// Environment variable holding the 1Password service account token.
pub const TOKEN_ENV: &str = "OP_SERVICE_ACCOUNT_TOKEN";
