//! Wire payload encrypted for the downstream consumer.
//!
//! Renovate decrypts the ciphertext and expects a JSON object with exactly
//! the single-letter fields `o` (organization), `r` (repository), and `v`
//! (value), in that order. Field names and order are a compatibility
//! contract; serde serializes struct fields in declaration order, which is
//! what pins the wire shape.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::{CipherError, Result};

/// The `{o, r, v}` payload Renovate expects.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payload {
    /// Organization the secret is scoped to.
    pub o: String,
    /// Repository scope; empty string when the secret is org-wide.
    pub r: String,
    /// The secret value itself.
    pub v: String,
}

impl Payload {
    /// Build a payload, normalizing an absent repository to `""`.
    ///
    /// The consumer requires `r` to be present even when empty, never
    /// null or missing.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MissingField` if `org` or `value` is empty.
    pub fn new(org: &str, repo: Option<&str>, value: &str) -> Result<Self> {
        if org.is_empty() {
            return Err(CipherError::MissingField("organization").into());
        }
        if value.is_empty() {
            return Err(CipherError::MissingField("secret value").into());
        }

        Ok(Self {
            o: org.to_string(),
            r: repo.unwrap_or_default().to_string(),
            v: value.to_string(),
        })
    }

    /// Serialize to the compact JSON form that gets encrypted.
    ///
    /// The result holds the secret value, so it comes back zeroizing.
    pub fn to_json(&self) -> Result<Zeroizing<String>> {
        serde_json::to_string(self)
            .map(Zeroizing::new)
            .map_err(|e| CipherError::EncryptionFailed(format!("payload serialization: {}", e)).into())
    }
}
