//! Opseal - seal 1Password secrets into Renovate's encrypted-secret format.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and execution
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── reference     # op:// secret reference grammar
//!     ├── payload       # {o, r, v} wire payload
//!     ├── cipher/       # OpenPGP encryption
//!     │   ├── mod       # Key validation and payload encryption
//!     │   └── compact   # Armor → single-line compaction
//!     ├── resolver/     # Secret resolution
//!     │   ├── mod       # SecretResolver trait
//!     │   └── op        # 1Password CLI implementation
//!     └── pipeline      # Validate → resolve → encrypt orchestration
//! ```
//!
//! # Features
//!
//! - Fetches secrets by `op://vault/item/field` reference via the 1Password CLI
//! - Encrypts for a single PGP recipient with permissive key-flag handling
//! - Emits the one-line, header-stripped, unpadded ciphertext Renovate accepts
//! - Fail-fast validation: no secret is ever fetched against a bad key

pub mod cli;
pub mod core;
pub mod error;
