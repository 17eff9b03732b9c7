//! Error taxonomy.
//!
//! Every failure mode maps onto one nested enum so callers can match on the
//! failing stage. Display messages never contain secret values.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing or unreadable process-level inputs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("secret reference is required: pass --reference or set OP_SECRET_REFERENCE")]
    MissingReference,

    #[error("organization is required: pass --org or set RENOVATE_ORG")]
    MissingOrg,

    #[error("public key is required: pass --key, --key-file, or set PGP_PUBLIC_KEY")]
    MissingPublicKey,

    #[error("cannot read key file {path}: {source}")]
    KeyFile {
        path: String,
        source: std::io::Error,
    },
}

/// Secret reference grammar violations.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("invalid secret reference {reference:?}: expected op://<vault>/<item>/<field>")]
    Invalid { reference: String },
}

/// Key parsing and encryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("public key has no encryption-capable key")]
    NoEncryptionKey,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Vault resolution failures.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("vault authentication failed: {0}")]
    Authentication(String),

    #[error("vault rejected the reference: {0}")]
    Malformed(String),

    #[error("op CLI not found in PATH")]
    CliNotFound,

    #[error("op CLI failed: {0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
