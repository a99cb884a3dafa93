//! Hash primitives used by suite `0x01`.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::suite::{LENOF_ADDRESS, LENOF_HASH};

/// Message digest fed to ECDSA.
pub fn sha256(data: &[u8]) -> [u8; LENOF_HASH] {
    Sha256::digest(data).into()
}

pub fn ripemd160(data: &[u8]) -> [u8; LENOF_ADDRESS] {
    Ripemd160::digest(data).into()
}

/// Address digest: RIPEMD-160 over SHA-256 of the public key coordinates.
pub fn address_digest(coordinates: &[u8]) -> [u8; LENOF_ADDRESS] {
    ripemd160(&sha256(coordinates))
}
