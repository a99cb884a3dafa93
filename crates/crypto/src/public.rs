//! Public keys: curve points that derive addresses and verify signatures.

use keysuite_core::DecodeConfig;
use num_bigint::BigUint;
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::VerifyingKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{EncodedPoint, FieldBytes};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::address::Address;
use crate::codec::{self, expect_len};
use crate::error::{KeyError, KeyResult};
use crate::hash::sha256;
use crate::signable::Signable;
use crate::signature::Signature;
use crate::suite::{Suite, LENOF_BIGINT};
use crate::text::impl_base64_text;

/// Length of the coordinate payload, `x || y`.
pub const LENOF_PUBLICKEY: usize = 2 * LENOF_BIGINT;

/// Encoded size of a public key: suite byte plus both coordinates.
pub const SIZEOF_PUBLICKEY: usize = 1 + LENOF_PUBLICKEY;

/// One big-endian coordinate or scalar, always exactly the field width.
pub(crate) type FieldWord = [u8; LENOF_BIGINT];

/// A public key: the affine coordinates of a P-256 point plus its suite tag.
///
/// Decoding does not check that `(x, y)` is on the curve unless asked to via
/// [`PublicKey::decode_with`]; an off-curve point simply never verifies.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey {
    suite: Suite,
    x: FieldWord,
    y: FieldWord,
}

impl PublicKey {
    /// Raw constructor from coordinates. Curve membership is not checked,
    /// but a coordinate wider than the field is rejected with
    /// [`KeyError::LengthMismatch`].
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> KeyResult<Self> {
        let mut data = [0u8; LENOF_PUBLICKEY];
        codec::encode_into(x, &mut data[..LENOF_BIGINT])?;
        codec::encode_into(y, &mut data[LENOF_BIGINT..])?;
        Ok(Self::from_coordinate_bytes(Suite::default(), &data))
    }

    pub(crate) fn with_suite(suite: Suite, x: FieldWord, y: FieldWord) -> Self {
        Self { suite, x, y }
    }

    pub(crate) fn from_p256(suite: Suite, key: &p256::PublicKey) -> Self {
        // A p256 public key is never the identity, so the SEC1 form is
        // always `0x04 || x || y`.
        let point = key.to_encoded_point(false);
        Self::from_coordinate_bytes(suite, &point.as_bytes()[1..])
    }

    pub fn suite(&self) -> Suite {
        self.suite
    }

    pub fn x(&self) -> BigUint {
        codec::decode(&self.x)
    }

    pub fn y(&self) -> BigUint {
        codec::decode(&self.y)
    }

    pub(crate) fn into_coordinates(self) -> (FieldWord, FieldWord) {
        (self.x, self.y)
    }

    /// The coordinate payload `x || y`, each left padded to the field width.
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(LENOF_PUBLICKEY);
        data.extend_from_slice(&self.x);
        data.extend_from_slice(&self.y);
        data
    }

    /// Builds a key from the coordinate payload, using the default suite.
    pub fn from_data(data: &[u8]) -> KeyResult<Self> {
        expect_len("PublicKey data", data, LENOF_PUBLICKEY)?;
        Ok(Self::from_coordinate_bytes(Suite::default(), data))
    }

    /// `data` must be exactly `LENOF_PUBLICKEY` bytes.
    fn from_coordinate_bytes(suite: Suite, data: &[u8]) -> Self {
        let mut x = [0u8; LENOF_BIGINT];
        let mut y = [0u8; LENOF_BIGINT];
        x.copy_from_slice(&data[..LENOF_BIGINT]);
        y.copy_from_slice(&data[LENOF_BIGINT..]);
        Self { suite, x, y }
    }

    /// `[suite] || x || y`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SIZEOF_PUBLICKEY);
        bytes.push(self.suite.tag());
        bytes.extend_from_slice(&self.data());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        Self::decode_with(bytes, DecodeConfig::LENIENT)
    }

    /// Decodes under an explicit policy; the strict policy also rejects
    /// points that are not on the curve.
    pub fn decode_with(bytes: &[u8], policy: DecodeConfig) -> KeyResult<Self> {
        expect_len("PublicKey", bytes, SIZEOF_PUBLICKEY)?;
        let suite = Suite::from_leading_byte(bytes)?;
        let key = Self::from_coordinate_bytes(suite, &bytes[1..]);
        if policy.strict_curve_check && !key.is_on_curve() {
            return Err(KeyError::NotOnCurve);
        }
        Ok(key)
    }

    pub fn address(&self) -> Address {
        Address::from_public_key(self)
    }

    pub fn is_on_curve(&self) -> bool {
        self.verifying_key().is_some()
    }

    fn verifying_key(&self) -> Option<VerifyingKey> {
        let x = FieldBytes::clone_from_slice(&self.x);
        let y = FieldBytes::clone_from_slice(&self.y);
        let point = EncodedPoint::from_affine_coordinates(&x, &y, false);
        VerifyingKey::from_encoded_point(&point).ok()
    }

    /// Verifies `signature` over `message` with this key.
    ///
    /// The digest is recomputed from `message`; the digest stored inside the
    /// signature is never consulted. Any malformed input yields `false`.
    pub fn verify<M: Signable + ?Sized>(&self, message: &M, signature: &Signature) -> bool {
        if signature.suite() != self.suite {
            debug!(key = %self.suite, signature = %signature.suite(), "suite mismatch");
            return false;
        }
        let Some(key) = self.verifying_key() else {
            debug!("public key is not a curve point");
            return false;
        };
        let Some(ecdsa) = signature.to_ecdsa() else {
            debug!("signature scalars out of range");
            return false;
        };
        let digest = sha256(&message.abstract_representation());
        key.verify_prehash(&digest, &ecdsa).is_ok()
    }
}

impl_base64_text!(PublicKey);

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}
