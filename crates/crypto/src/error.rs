//! Error types for key, address and signature handling.

use thiserror::Error;

/// Errors that can occur while decoding or producing key material.
///
/// Verification never reports through this type: a signature that fails to
/// verify is a `false`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A byte encoding had the wrong fixed width for its entity.
    #[error("{entity}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        entity: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text input was not valid base64, or a mnemonic had the wrong shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A mnemonic word is not in the dictionary or the checksum is wrong.
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// The signing primitive could not produce a signature.
    #[error("Signing failed: {0}")]
    SignFailed(String),

    /// The leading suite byte is not a defined suite.
    #[error("Unknown crypto suite tag 0x{0:02x}")]
    UnknownSuite(u8),

    /// The private scalar is zero or not below the curve order.
    #[error("Private scalar out of range")]
    InvalidScalar,

    /// An embedded point is not on the curve (strict decoding only).
    #[error("Point is not on the curve")]
    NotOnCurve,
}

impl KeyError {
    pub(crate) fn length(entity: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            entity,
            expected,
            actual,
        }
    }
}

/// Result type for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
