//! Private keys: P-256 scalars that derive public keys and sign messages.

use keysuite_core::SuiteConfig;
use p256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use p256::ecdsa::SigningKey;
use p256::elliptic_curve::subtle::ConstantTimeEq;
use p256::SecretKey;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::codec::expect_len;
use crate::error::{KeyError, KeyResult};
use crate::hash::sha256;
use crate::mnemonic::{bytes_to_mnemonics, mnemonics_to_bytes};
use crate::public::PublicKey;
use crate::signable::Signable;
use crate::signature::Signature;
use crate::suite::{Suite, LENOF_BIGINT};
use crate::text::impl_base64_text;

/// Length of the scalar payload.
pub const LENOF_PRIVATEKEY: usize = LENOF_BIGINT;

/// Encoded size of a private key: suite byte plus scalar.
pub const SIZEOF_PRIVATEKEY: usize = 1 + LENOF_PRIVATEKEY;

/// A private key.
///
/// The scalar is held by `p256::SecretKey`, which keeps it in `[1, n)` and
/// zeroes it when dropped. `Debug` never prints it; `Display` does, since the
/// text form is the key's backup format.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrivateKey {
    suite: Suite,
    secret: SecretKey,
}

impl PrivateKey {
    /// Draws a fresh scalar from the operating system's secure random source.
    pub fn random() -> Self {
        Self::random_in(Suite::default())
    }

    /// Like [`PrivateKey::random`], tagged with the suite named in `config`.
    ///
    /// Fails with [`KeyError::UnknownSuite`] if the configured tag names no
    /// supported suite.
    pub fn random_with(config: &SuiteConfig) -> KeyResult<Self> {
        let suite = Suite::try_from(config.tag)?;
        debug!(suite = %suite, "generating key for configured suite");
        Ok(Self::random_in(suite))
    }

    fn random_in(suite: Suite) -> Self {
        Self {
            suite,
            secret: SecretKey::random(&mut OsRng),
        }
    }

    pub fn suite(&self) -> Suite {
        self.suite
    }

    /// The 32-byte big-endian scalar.
    pub fn data(&self) -> Zeroizing<[u8; LENOF_PRIVATEKEY]> {
        let mut data = Zeroizing::new([0u8; LENOF_PRIVATEKEY]);
        data.copy_from_slice(&self.secret.to_bytes());
        data
    }

    /// Builds a key from the bare scalar, using the default suite.
    pub fn from_data(data: &[u8]) -> KeyResult<Self> {
        expect_len("PrivateKey data", data, LENOF_PRIVATEKEY)?;
        Self::from_scalar_bytes(Suite::default(), data)
    }

    fn from_scalar_bytes(suite: Suite, data: &[u8]) -> KeyResult<Self> {
        let secret = SecretKey::from_slice(data).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self { suite, secret })
    }

    /// `[suite] || scalar`
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(SIZEOF_PRIVATEKEY));
        bytes.push(self.suite.tag());
        bytes.extend_from_slice(self.data().as_slice());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        expect_len("PrivateKey", bytes, SIZEOF_PRIVATEKEY)?;
        let suite = Suite::from_leading_byte(bytes)?;
        Self::from_scalar_bytes(suite, &bytes[1..])
    }

    /// The scalar as a 24-word mnemonic.
    pub fn mnemonics(&self) -> KeyResult<Vec<String>> {
        bytes_to_mnemonics(&self.data())
    }

    pub fn from_mnemonics<S: AsRef<str>>(words: &[S]) -> KeyResult<Self> {
        let data = Zeroizing::new(mnemonics_to_bytes(words)?);
        Self::from_data(data.as_slice())
    }

    /// Computes `scalar * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_p256(self.suite, &self.secret.public_key())
    }

    /// Signs the SHA-256 digest of the message's abstract representation.
    ///
    /// The nonce comes from the secure random source, so two signatures over
    /// the same message differ. The result carries the signer's public key
    /// coordinates and the digest.
    pub fn sign<M: Signable + ?Sized>(&self, message: &M) -> KeyResult<Signature> {
        let digest = sha256(&message.abstract_representation());
        let signing_key = SigningKey::from(&self.secret);
        let ecdsa: p256::ecdsa::Signature = signing_key
            .sign_prehash_with_rng(&mut OsRng, &digest)
            .map_err(|e| {
                warn!("ECDSA signing failed: {}", e);
                KeyError::SignFailed(e.to_string())
            })?;

        let (r, s) = ecdsa.split_bytes();
        let public = self.public_key();
        debug!(suite = %self.suite, "message signed");
        Ok(Signature::from_parts(self.suite, r.into(), s.into(), public, digest))
    }
}

impl_base64_text!(PrivateKey);

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.suite == other.suite
            && bool::from(self.data().as_slice().ct_eq(other.data().as_slice()))
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, secret)", self.suite)
    }
}
