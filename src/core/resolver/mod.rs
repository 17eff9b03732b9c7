//! Secret resolution.
//!
//! The pipeline treats the vault as an injected capability so it can run
//! against a deterministic stub in tests. The production implementation
//! shells out to the 1Password CLI.

use zeroize::Zeroizing;

use crate::core::reference::SecretReference;
use crate::error::Result;

mod op;
pub use op::OpCli;

/// Capability that turns a secret reference into its plaintext value.
///
/// Implementations hold whatever credentials they need; the pipeline only
/// ever calls [`resolve`](SecretResolver::resolve), once per run.
pub trait SecretResolver {
    /// Resolve a validated reference to its secret value.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::NotFound` for a well-formed reference with
    /// nothing behind it, and `ResolverError::Authentication` when the
    /// vault credentials are absent or rejected.
    fn resolve(&self, reference: &SecretReference) -> Result<Zeroizing<String>>;
}
