//! Crypto suite tags.
//!
//! The first byte of every encoded entity names the suite it belongs to. Only
//! one suite is defined; unknown tags are rejected on decode.

use std::fmt;

use keysuite_core::DEFAULT_SUITE_TAG;

use crate::error::{KeyError, KeyResult};

/// Width of every scalar and coordinate field, the byte length of the curve order.
pub const LENOF_BIGINT: usize = 32;

/// Width of a message digest.
pub const LENOF_HASH: usize = 32;

/// Width of an address digest.
pub const LENOF_ADDRESS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Suite {
    /// ECDSA over NIST P-256, SHA-256 message digests, RIPEMD-160(SHA-256) addresses.
    #[default]
    EcdsaP256Sha256Ripemd160 = DEFAULT_SUITE_TAG,
}

impl Suite {
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Byte width of scalars and coordinates in this suite.
    pub const fn field_len(self) -> usize {
        match self {
            Suite::EcdsaP256Sha256Ripemd160 => LENOF_BIGINT,
        }
    }

    pub const fn hash_len(self) -> usize {
        match self {
            Suite::EcdsaP256Sha256Ripemd160 => LENOF_HASH,
        }
    }

    pub const fn address_len(self) -> usize {
        match self {
            Suite::EcdsaP256Sha256Ripemd160 => LENOF_ADDRESS,
        }
    }

    /// Reads the suite tag at the front of an encoding.
    pub(crate) fn from_leading_byte(bytes: &[u8]) -> KeyResult<Self> {
        match bytes.first() {
            Some(&tag) => Self::try_from(tag),
            None => Err(KeyError::Decode("empty encoding".into())),
        }
    }
}

impl TryFrom<u8> for Suite {
    type Error = KeyError;

    fn try_from(tag: u8) -> KeyResult<Self> {
        match tag {
            DEFAULT_SUITE_TAG => Ok(Suite::EcdsaP256Sha256Ripemd160),
            other => Err(KeyError::UnknownSuite(other)),
        }
    }
}

impl From<Suite> for u8 {
    fn from(suite: Suite) -> u8 {
        suite.tag()
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suite::EcdsaP256Sha256Ripemd160 => f.write_str("ecdsa-p256-sha256-ripemd160"),
        }
    }
}
