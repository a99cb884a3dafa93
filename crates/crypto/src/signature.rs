//! Self-contained signatures.
//!
//! A signature carries, besides `(r, s)`, the signer's public key coordinates
//! and the message digest, so a holder can name the signer and verify without
//! looking anything up.

use keysuite_core::DecodeConfig;
use num_bigint::BigUint;
use p256::FieldBytes;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::Address;
use crate::codec::{self, expect_len};
use crate::error::{KeyError, KeyResult};
use crate::public::{FieldWord, PublicKey};
use crate::signable::Signable;
use crate::suite::{Suite, LENOF_BIGINT, LENOF_HASH};
use crate::text::impl_base64_text;

/// Length of the payload `r || s || x || y || hash`.
pub const LENOF_SIGNATURE: usize = 4 * LENOF_BIGINT + LENOF_HASH;

/// Encoded size of a signature: suite byte plus payload.
pub const SIZEOF_SIGNATURE: usize = 1 + LENOF_SIGNATURE;

const R: usize = 0;
const S: usize = LENOF_BIGINT;
const X: usize = 2 * LENOF_BIGINT;
const Y: usize = 3 * LENOF_BIGINT;
const HASH: usize = 4 * LENOF_BIGINT;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature {
    suite: Suite,
    r: FieldWord,
    s: FieldWord,
    x: FieldWord,
    y: FieldWord,
    hash: [u8; LENOF_HASH],
}

impl Signature {
    pub(crate) fn from_parts(
        suite: Suite,
        r: FieldWord,
        s: FieldWord,
        signer: PublicKey,
        hash: [u8; LENOF_HASH],
    ) -> Self {
        let (x, y) = signer.into_coordinates();
        Self {
            suite,
            r,
            s,
            x,
            y,
            hash,
        }
    }

    pub fn suite(&self) -> Suite {
        self.suite
    }

    pub fn r(&self) -> BigUint {
        codec::decode(&self.r)
    }

    pub fn s(&self) -> BigUint {
        codec::decode(&self.s)
    }

    pub fn x(&self) -> BigUint {
        codec::decode(&self.x)
    }

    pub fn y(&self) -> BigUint {
        codec::decode(&self.y)
    }

    /// Digest of the signed message as recorded by the signer.
    ///
    /// Informational only: verification recomputes the digest from the
    /// message it is given.
    pub fn hash(&self) -> &[u8; LENOF_HASH] {
        &self.hash
    }

    pub fn hash_string(&self) -> String {
        codec::to_base64(&self.hash)
    }

    /// The payload `r || s || x || y || hash` without the suite byte.
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(LENOF_SIGNATURE);
        for word in [&self.r, &self.s, &self.x, &self.y] {
            data.extend_from_slice(word);
        }
        data.extend_from_slice(&self.hash);
        data
    }

    /// Builds a signature from its payload, using the default suite.
    pub fn from_data(data: &[u8]) -> KeyResult<Self> {
        expect_len("Signature data", data, LENOF_SIGNATURE)?;
        Ok(Self::from_payload(Suite::default(), data))
    }

    fn from_payload(suite: Suite, data: &[u8]) -> Self {
        let word = |range: std::ops::Range<usize>| {
            let mut out = [0u8; LENOF_BIGINT];
            out.copy_from_slice(&data[range]);
            out
        };
        let mut hash = [0u8; LENOF_HASH];
        hash.copy_from_slice(&data[HASH..]);
        Self {
            suite,
            r: word(R..S),
            s: word(S..X),
            x: word(X..Y),
            y: word(Y..HASH),
            hash,
        }
    }

    /// `[suite] || r || s || x || y || hash`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SIZEOF_SIGNATURE);
        bytes.push(self.suite.tag());
        bytes.extend_from_slice(&self.data());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        Self::decode_with(bytes, DecodeConfig::LENIENT)
    }

    /// Decodes under an explicit policy; the strict policy also rejects an
    /// embedded signer point that is not on the curve.
    pub fn decode_with(bytes: &[u8], policy: DecodeConfig) -> KeyResult<Self> {
        expect_len("Signature", bytes, SIZEOF_SIGNATURE)?;
        let suite = Suite::from_leading_byte(bytes)?;
        let signature = Self::from_payload(suite, &bytes[1..]);
        if policy.strict_curve_check && !signature.public_key().is_on_curve() {
            return Err(KeyError::NotOnCurve);
        }
        Ok(signature)
    }

    /// The signer's public key, rebuilt from the embedded coordinates.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::with_suite(self.suite, self.x, self.y)
    }

    pub fn address(&self) -> Address {
        self.public_key().address()
    }

    /// Verifies against the embedded signer key, see [`PublicKey::verify`].
    pub fn verify<M: Signable + ?Sized>(&self, message: &M) -> bool {
        self.public_key().verify(message, self)
    }

    /// `(r, s)` as an ECDSA signature, or `None` if either is zero or not
    /// below the curve order.
    pub(crate) fn to_ecdsa(&self) -> Option<p256::ecdsa::Signature> {
        let r = FieldBytes::clone_from_slice(&self.r);
        let s = FieldBytes::clone_from_slice(&self.s);
        p256::ecdsa::Signature::from_scalars(r, s).ok()
    }
}

impl_base64_text!(Signature);

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}
