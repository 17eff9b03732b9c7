//! Key material fixtures and round-trip helpers.

use std::io::Read;

use sequoia_openpgp as openpgp;

use openpgp::cert::prelude::*;
use openpgp::crypto::SessionKey;
use openpgp::packet::{PKESK, SKESK};
use openpgp::parse::stream::{
    DecryptionHelper, DecryptorBuilder, MessageStructure, VerificationHelper,
};
use openpgp::parse::Parse;
use openpgp::policy::{Policy, StandardPolicy};
use openpgp::types::SymmetricAlgorithm;

/// An obviously invalid key block for negative tests.
pub const INVALID_PUBLIC_KEY: &str = "not a pgp key";

/// Generate a fresh certificate with a transport-encryption subkey.
pub fn generate_cert(userid: &str) -> openpgp::Cert {
    let (cert, _rev) = CertBuilder::new()
        .add_userid(userid)
        .add_transport_encryption_subkey()
        .generate()
        .expect("failed to generate cert");
    cert
}

/// Armored public-key text for a certificate.
pub fn armored_public_key(cert: &openpgp::Cert) -> String {
    use openpgp::serialize::SerializeInto;
    let bytes = cert.armored().to_vec().expect("failed to armor cert");
    String::from_utf8(bytes).expect("armor is ASCII")
}

/// Re-wrap a compact ciphertext into a standard armored message block, the
/// way the downstream consumer does before decrypting: restore base64 tail
/// padding, split into 64-column lines, and re-add the BEGIN/END markers.
pub fn rearmor(compact: &str) -> String {
    let mut body = compact.to_string();
    while body.len() % 4 != 0 {
        body.push('=');
    }

    let mut armored = String::from("-----BEGIN PGP MESSAGE-----\n\n");
    let mut rest = body.as_str();
    while rest.len() > 64 {
        let (line, tail) = rest.split_at(64);
        armored.push_str(line);
        armored.push('\n');
        rest = tail;
    }
    armored.push_str(rest);
    armored.push('\n');
    armored.push_str("-----END PGP MESSAGE-----\n");
    armored
}

struct Helper<'a> {
    cert: &'a openpgp::Cert,
    policy: &'a dyn Policy,
}

impl VerificationHelper for Helper<'_> {
    fn get_certs(&mut self, _ids: &[openpgp::KeyHandle]) -> openpgp::Result<Vec<openpgp::Cert>> {
        Ok(Vec::new())
    }

    fn check(&mut self, _structure: MessageStructure) -> openpgp::Result<()> {
        Ok(())
    }
}

impl DecryptionHelper for Helper<'_> {
    fn decrypt<D>(
        &mut self,
        pkesks: &[PKESK],
        _skesks: &[SKESK],
        sym_algo: Option<SymmetricAlgorithm>,
        mut decrypt: D,
    ) -> openpgp::Result<Option<openpgp::Fingerprint>>
    where
        D: FnMut(SymmetricAlgorithm, &SessionKey) -> bool,
    {
        for ka in self
            .cert
            .keys()
            .unencrypted_secret()
            .with_policy(self.policy, None)
            .for_transport_encryption()
        {
            let mut pair = ka.key().clone().into_keypair()?;
            for pkesk in pkesks {
                if let Some((algo, sk)) = pkesk.decrypt(&mut pair, sym_algo) {
                    if decrypt(algo, &sk) {
                        return Ok(None);
                    }
                }
            }
        }
        Err(openpgp::Error::InvalidOperation("no key could decrypt the message".into()).into())
    }
}

/// Decrypt an armored message with the certificate's secret key material.
pub fn decrypt_armored(cert: &openpgp::Cert, armored: &str) -> String {
    let policy = StandardPolicy::new();
    let helper = Helper {
        cert,
        policy: &policy,
    };

    let mut decryptor = DecryptorBuilder::from_bytes(armored.as_bytes())
        .expect("failed to parse message")
        .with_policy(&policy, None, helper)
        .expect("decryption failed");

    let mut plaintext = Vec::new();
    decryptor
        .read_to_end(&mut plaintext)
        .expect("failed to read plaintext");
    String::from_utf8(plaintext).expect("plaintext is UTF-8")
}
