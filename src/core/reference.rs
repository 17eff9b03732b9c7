//! 1Password secret reference grammar.
//!
//! A reference addresses a single field as `op://<vault>/<item>/<field>`.
//! The grammar here mirrors what `op read` itself accepts, so the pipeline
//! can reject a bad reference before spawning any process.

use std::fmt;

use crate::core::constants::{REFERENCE_SCHEME, REFERENCE_SEGMENTS};
use crate::error::{ReferenceError, Result};

/// A validated secret reference.
///
/// Construction goes through [`SecretReference::parse`], so holding one
/// means the grammar check already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference(String);

impl SecretReference {
    /// Parse and validate a reference string.
    ///
    /// Segment content is unconstrained apart from the `/` separator; vault
    /// and item names with spaces or punctuation are fine.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::Invalid` unless the input is exactly
    /// `op://vault/item/field` with three non-empty segments.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(path) = raw.strip_prefix(REFERENCE_SCHEME) else {
            return Err(invalid(raw));
        };

        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() != REFERENCE_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
            return Err(invalid(raw));
        }

        Ok(Self(raw.to_string()))
    }

    /// Check a reference string without constructing one.
    ///
    /// Never fails; malformed input is reported as `false`.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// The reference exactly as it will be passed to the resolver.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(raw: &str) -> crate::error::Error {
    ReferenceError::Invalid {
        reference: raw.to_string(),
    }
    .into()
}
