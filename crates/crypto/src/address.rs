//! Addresses: short digests identifying a public key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::expect_len;
use crate::error::KeyResult;
use crate::hash::address_digest;
use crate::public::PublicKey;
use crate::suite::{Suite, LENOF_ADDRESS};
use crate::text::impl_base64_text;

/// Encoded size of an address: suite byte plus digest.
pub const SIZEOF_ADDRESS: usize = 1 + LENOF_ADDRESS;

/// A suite tag plus the RIPEMD-160(SHA-256) digest of a public key's coordinates.
///
/// There is no checksum; an address is only ever checked by recomputing the
/// digest from a candidate public key, see [`Address::validate`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    suite: Suite,
    digest: [u8; LENOF_ADDRESS],
}

impl Address {
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self {
            suite: public_key.suite(),
            digest: address_digest(&public_key.data()),
        }
    }

    pub fn suite(&self) -> Suite {
        self.suite
    }

    /// The digest without the suite byte.
    pub fn data(&self) -> &[u8; LENOF_ADDRESS] {
        &self.digest
    }

    /// Builds an address from a bare digest, using the default suite.
    pub fn from_data(data: &[u8]) -> KeyResult<Self> {
        expect_len("Address data", data, LENOF_ADDRESS)?;
        let mut digest = [0u8; LENOF_ADDRESS];
        digest.copy_from_slice(data);
        Ok(Self {
            suite: Suite::default(),
            digest,
        })
    }

    /// `[suite] || digest`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SIZEOF_ADDRESS);
        bytes.push(self.suite.tag());
        bytes.extend_from_slice(&self.digest);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        expect_len("Address", bytes, SIZEOF_ADDRESS)?;
        let suite = Suite::from_leading_byte(bytes)?;
        let mut digest = [0u8; LENOF_ADDRESS];
        digest.copy_from_slice(&bytes[1..]);
        Ok(Self { suite, digest })
    }

    /// Whether this address was derived from `public_key`.
    ///
    /// Compares the full recomputed digest; the suite tags must match too.
    pub fn validate(&self, public_key: &PublicKey) -> bool {
        let derived = public_key.address();
        derived.suite == self.suite && derived.digest == self.digest
    }
}

impl_base64_text!(Address);

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.digest
    }
}
