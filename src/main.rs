//! Opseal - seal 1Password secrets into Renovate's encrypted-secret format.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use opseal::cli::{execute, output, Cli};
use opseal::error::{Error, ResolverError};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    // Initialize tracing subscriber with env-filter support. Logs go to
    // stderr; stdout carries nothing but the ciphertext.
    let filter = EnvFilter::try_from_env("OPSEAL_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("opseal=debug")
        } else {
            EnvFilter::new("opseal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Resolver(ResolverError::CliNotFound) => {
                Some("install the 1Password CLI: https://developer.1password.com/docs/cli/get-started/")
            }
            Error::Resolver(ResolverError::Authentication(_)) => {
                Some("export OP_SERVICE_ACCOUNT_TOKEN with a valid service account token")
            }
            _ => None,
        };

        output::error(&e);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
