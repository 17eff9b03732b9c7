//! OpenPGP encryption for Renovate.
//!
//! Parses the recipient public key, encrypts the `{o, r, v}` payload as a
//! single OpenPGP message, and compacts the armored output into the
//! one-line form Renovate accepts.
//!
//! Key handling is deliberately permissive: keys without key-usage flags
//! are common in the wild and must not be rejected, so recipient selection
//! falls back to any encryption-capable key when no subkey advertises
//! encryption flags under the standard policy.

use std::io::Write;

use sequoia_openpgp as openpgp;

use openpgp::packet::key::{PublicParts, UnspecifiedRole};
use openpgp::packet::Key;
use openpgp::parse::Parse;
use openpgp::policy::StandardPolicy;
use openpgp::serialize::stream::{Armorer, Encryptor2, LiteralWriter, Message, Recipient};
use tracing::{debug, trace};

use crate::core::payload::Payload;
use crate::error::{CipherError, Result};

mod compact;
pub use compact::compact;

/// Check that a public key block parses as an OpenPGP certificate.
///
/// Structural parse only: no policy, flag, or expiry checks are applied, so
/// legacy keys and keys lacking usage metadata pass. Returns `false` on any
/// parse failure. This is a pre-flight gate; encryption re-parses the key
/// independently.
pub fn validate_public_key(armored: &str) -> bool {
    openpgp::Cert::from_bytes(armored.as_bytes()).is_ok()
}

/// Encrypt a payload for a single recipient and compact the armor.
///
/// `repo` is normalized to `""` when absent. The key is parsed here even
/// though callers are expected to have run [`validate_public_key`] first;
/// the two checks share no state.
///
/// # Errors
///
/// Returns `CipherError::MissingField` for empty org/value,
/// `CipherError::InvalidPublicKey` if the key does not parse,
/// `CipherError::NoEncryptionKey` if no key in the certificate can encrypt,
/// and `CipherError::EncryptionFailed` for cipher-level failures.
pub fn encrypt_for_recipient(
    org: &str,
    repo: Option<&str>,
    value: &str,
    public_key: &str,
) -> Result<String> {
    let payload = Payload::new(org, repo, value)?;
    let json = payload.to_json()?;

    let cert = openpgp::Cert::from_bytes(public_key.as_bytes())
        .map_err(|e| CipherError::InvalidPublicKey(e.to_string()))?;

    let armored = encrypt(&json, &cert)?;
    Ok(compact(&armored))
}

/// Encrypt plaintext into an armored PGP MESSAGE block for one certificate.
fn encrypt(plaintext: &str, cert: &openpgp::Cert) -> Result<String> {
    let policy = StandardPolicy::new();
    let keys = encryption_keys(cert, &policy)?;

    trace!(plaintext_len = plaintext.len(), "encrypting");

    let mut sink = Vec::new();
    let message = Message::new(&mut sink);
    let message = Armorer::new(message)
        .kind(openpgp::armor::Kind::Message)
        .build()
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
    let message = Encryptor2::for_recipients(message, keys.iter().map(Recipient::from))
        .build()
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
    let mut message = LiteralWriter::new(message)
        .build()
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    message
        .write_all(plaintext.as_bytes())
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
    message
        .finalize()
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    trace!(ciphertext_len = sink.len(), "encrypted");

    String::from_utf8(sink)
        .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
}

/// Select the keys to encrypt to.
///
/// Prefers keys that advertise encryption flags under the standard policy.
/// When none do (missing key flags), any key whose algorithm can encrypt is
/// accepted instead.
fn encryption_keys(
    cert: &openpgp::Cert,
    policy: &StandardPolicy,
) -> Result<Vec<Key<PublicParts, UnspecifiedRole>>> {
    let flagged: Vec<_> = cert
        .keys()
        .with_policy(policy, None)
        .supported()
        .alive()
        .revoked(false)
        .for_transport_encryption()
        .for_storage_encryption()
        .map(|ka| ka.key().clone())
        .collect();

    if !flagged.is_empty() {
        debug!(keys = flagged.len(), "using encryption-flagged keys");
        return Ok(flagged);
    }

    let capable: Vec<_> = cert
        .keys()
        .filter(|ka| ka.key().pk_algo().for_encryption())
        .map(|ka| ka.key().clone())
        .collect();

    if capable.is_empty() {
        return Err(CipherError::NoEncryptionKey.into());
    }

    debug!(
        keys = capable.len(),
        "no encryption flags present, using encryption-capable keys"
    );
    Ok(capable)
}
