//! Command-line interface.

pub mod output;

use std::fs;
use std::io::{self, Write};

use clap::Parser;

use crate::core::pipeline::{Pipeline, Request};
use crate::core::resolver::OpCli;
use crate::error::{ConfigError, Result};

/// Opseal - encrypt 1Password secrets for Renovate.
#[derive(Parser)]
#[command(
    name = "opseal",
    about = "Encrypt 1Password secrets for Renovate",
    version
)]
pub struct Cli {
    /// Secret reference (op://vault/item/field)
    #[arg(long, env = "OP_SECRET_REFERENCE")]
    pub reference: Option<String>,

    /// Organization the encrypted secret is scoped to
    #[arg(long, env = "RENOVATE_ORG")]
    pub org: Option<String>,

    /// Repository scope (omit for an org-wide secret)
    #[arg(long, env = "RENOVATE_REPO")]
    pub repo: Option<String>,

    /// Armored PGP public key text
    #[arg(long, env = "PGP_PUBLIC_KEY", conflicts_with = "key_file", allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Read the armored PGP public key from a file
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<String>,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the CLI: build the resolver, run the pipeline, emit the result.
///
/// On success exactly the compact ciphertext is written to stdout, with no
/// trailing newline so the output can be piped or captured verbatim.
///
/// # Errors
///
/// Returns an error if required inputs are missing or any pipeline stage
/// fails. Nothing is written to stdout on failure.
pub fn execute(cli: Cli) -> Result<()> {
    let request = request_from(cli)?;
    let resolver = OpCli::from_env()?;
    let ciphertext = Pipeline::new(&resolver).run(&request)?;

    let mut stdout = io::stdout();
    stdout.write_all(ciphertext.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Assemble a pipeline request from flag/environment inputs.
fn request_from(cli: Cli) -> Result<Request> {
    let reference = cli
        .reference
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingReference)?;
    let org = cli
        .org
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingOrg)?;

    let public_key = match (cli.key, cli.key_file) {
        (Some(key), _) if !key.is_empty() => key,
        (_, Some(path)) => {
            fs::read_to_string(&path).map_err(|source| ConfigError::KeyFile { path, source })?
        }
        _ => return Err(ConfigError::MissingPublicKey.into()),
    };

    Ok(Request {
        reference,
        org,
        repo: cli.repo,
        public_key,
    })
}
