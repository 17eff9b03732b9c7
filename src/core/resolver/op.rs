//! 1Password CLI resolver.
//!
//! Resolves `op://` references by running `op read` with a service account
//! token. The token is taken once at construction and handed to the child
//! through its environment; the secret value travels back over the child's
//! stdout and is never logged.

use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::SecretResolver;
use crate::core::constants::TOKEN_ENV;
use crate::core::reference::SecretReference;
use crate::error::{ResolverError, Result};

/// Secret resolver backed by the `op` CLI.
#[derive(Debug)]
pub struct OpCli {
    token: Zeroizing<String>,
}

impl OpCli {
    /// Create a resolver from a service account token.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::Authentication` if the token is empty.
    pub fn new(token: String) -> Result<Self> {
        if token.is_empty() {
            return Err(ResolverError::Authentication(format!("{} is empty", TOKEN_ENV)).into());
        }
        Ok(Self {
            token: Zeroizing::new(token),
        })
    }

    /// Create a resolver from the `OP_SERVICE_ACCOUNT_TOKEN` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::Authentication` if the variable is unset.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| ResolverError::Authentication(format!("{} is not set", TOKEN_ENV)))?;
        Self::new(token)
    }

    /// Check that the op CLI is available.
    fn check_op() -> Result<()> {
        which::which("op").map_err(|_| ResolverError::CliNotFound)?;
        Ok(())
    }
}

impl SecretResolver for OpCli {
    fn resolve(&self, reference: &SecretReference) -> Result<Zeroizing<String>> {
        Self::check_op()?;

        debug!(%reference, "resolving secret");

        let output = Command::new("op")
            .args(["read", "--no-newline", reference.as_str()])
            .env(TOKEN_ENV, self.token.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ResolverError::Cli(format!("failed to run op: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify(reference, stderr.trim()).into());
        }

        let value = String::from_utf8(output.stdout)
            .map_err(|_| ResolverError::Cli("op returned non-UTF-8 output".to_string()))?;
        let value = value.trim_end_matches('\n').to_string();

        if value.is_empty() {
            return Err(ResolverError::NotFound(reference.to_string()).into());
        }

        trace!(value_len = value.len(), "secret resolved");
        Ok(Zeroizing::new(value))
    }
}

/// Map `op` stderr onto the resolver error taxonomy.
fn classify(reference: &SecretReference, stderr: &str) -> ResolverError {
    let lower = stderr.to_lowercase();

    if lower.contains("isn't a secret reference") || lower.contains("invalid secret reference") {
        ResolverError::Malformed(stderr.to_string())
    } else if lower.contains("not found")
        || lower.contains("isn't an item")
        || lower.contains("isn't a vault")
        || lower.contains("no item")
    {
        ResolverError::NotFound(reference.to_string())
    } else if lower.contains("401")
        || lower.contains("403")
        || lower.contains("unauthorized")
        || lower.contains("authentication")
        || lower.contains("token")
    {
        ResolverError::Authentication(stderr.to_string())
    } else {
        ResolverError::Cli(stderr.to_string())
    }
}
