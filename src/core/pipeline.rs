//! Pipeline orchestration.
//!
//! Wires validation, resolution, and encryption into one fail-fast
//! sequence: reference grammar and public key are both checked before the
//! resolver runs, so a secret is never fetched when the key it would be
//! protected with is already known to be bad. Each run is stateless and
//! single-shot; a resolver or cipher failure aborts the run without
//! retries and without partial output.

use tracing::debug;

use crate::core::cipher;
use crate::core::reference::SecretReference;
use crate::core::resolver::SecretResolver;
use crate::error::{CipherError, Result};

/// Raw inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct Request {
    /// Secret reference (`op://vault/item/field`).
    pub reference: String,
    /// Organization the encrypted secret is scoped to.
    pub org: String,
    /// Repository scope, if any.
    pub repo: Option<String>,
    /// Armored recipient public key.
    pub public_key: String,
}

/// One-shot encryption pipeline over an injected resolver.
pub struct Pipeline<'a> {
    resolver: &'a dyn SecretResolver,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline around a resolver capability.
    ///
    /// The resolver is constructed once by the caller and injected; the
    /// pipeline never builds one implicitly.
    pub fn new(resolver: &'a dyn SecretResolver) -> Self {
        Self { resolver }
    }

    /// Run the full validate → resolve → encrypt sequence.
    ///
    /// On success the returned string is exactly the compact ciphertext.
    /// Any failure aborts the run; later stages are never entered.
    ///
    /// # Errors
    ///
    /// Propagates the failing stage's error: `ReferenceError` or
    /// `CipherError` from validation, `ResolverError` from resolution,
    /// `CipherError` from encryption.
    pub fn run(&self, request: &Request) -> Result<String> {
        let reference = SecretReference::parse(&request.reference)?;
        debug!(%reference, "reference validated");

        if request.org.is_empty() {
            return Err(CipherError::MissingField("organization").into());
        }

        if !cipher::validate_public_key(&request.public_key) {
            return Err(CipherError::InvalidPublicKey("unparseable key block".to_string()).into());
        }
        debug!("public key validated");

        let value = self.resolver.resolve(&reference)?;
        debug!("secret resolved");

        let ciphertext = cipher::encrypt_for_recipient(
            &request.org,
            request.repo.as_deref(),
            &value,
            &request.public_key,
        )?;
        debug!(ciphertext_len = ciphertext.len(), "payload encrypted");

        Ok(ciphertext)
    }
}
