//! Text-in, text-out helpers for callers that only handle base64 strings.
//!
//! Private keys are passed as the base64 of the bare 32-byte scalar and data
//! as the base64 of the raw message bytes. Public keys and signatures use
//! their full text forms.

use tracing::debug;

use crate::codec::from_base64;
use crate::error::KeyResult;
use crate::private::PrivateKey;
use crate::public::PublicKey;
use crate::signature::Signature;

fn private_from_scalar_text(private: &str) -> KeyResult<PrivateKey> {
    let scalar = zeroize::Zeroizing::new(from_base64(private)?);
    PrivateKey::from_data(&scalar)
}

/// Derives the public key text form for a base64 scalar.
pub fn public_key_from_private_string(private: &str) -> KeyResult<String> {
    Ok(private_from_scalar_text(private)?.public_key().to_string())
}

/// Signs base64 `data` with a base64 scalar and returns the signature text form.
pub fn sign_data_by_private_string(private: &str, data: &str) -> KeyResult<String> {
    let key = private_from_scalar_text(private)?;
    let message = from_base64(data)?;
    Ok(key.sign(&message)?.to_string())
}

/// Verifies a signature text form over base64 `data` with a public key text form.
///
/// Malformed text is an error; a well-formed signature that does not match
/// is `Ok(false)`.
pub fn verify_signature_and_data_by_public_string(
    signature: &str,
    public: &str,
    data: &str,
) -> KeyResult<bool> {
    let signature: Signature = signature.parse()?;
    let public: PublicKey = public.parse()?;
    let message = from_base64(data)?;
    let valid = public.verify(&message, &signature);
    debug!(valid, "verified data by public string");
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::to_base64;
    use crate::KeyError;

    fn scalar_text() -> String {
        to_base64(&[0x42; 32])
    }

    #[test]
    fn test_public_key_from_private_string() {
        let public = public_key_from_private_string(&scalar_text()).unwrap();
        let expected = PrivateKey::from_data(&[0x42; 32]).unwrap().public_key();
        assert_eq!(public, expected.to_string());
    }

    #[test]
    fn test_sign_then_verify() {
        let data = to_base64(b"Hello World");
        let fake = to_base64(b"hello world");
        let signature = sign_data_by_private_string(&scalar_text(), &data).unwrap();
        let public = public_key_from_private_string(&scalar_text()).unwrap();

        assert!(verify_signature_and_data_by_public_string(&signature, &public, &data).unwrap());
        assert!(!verify_signature_and_data_by_public_string(&signature, &public, &fake).unwrap());
    }

    #[test]
    fn test_wrong_public_key_is_false() {
        let data = to_base64(b"Hello World");
        let signature = sign_data_by_private_string(&scalar_text(), &data).unwrap();
        let other = PrivateKey::random().public_key().to_string();
        assert!(!verify_signature_and_data_by_public_string(&signature, &other, &data).unwrap());
    }

    #[test]
    fn test_input_errors_propagate() {
        assert!(matches!(
            public_key_from_private_string("***"),
            Err(KeyError::Decode(_))
        ));
        // The full 33-byte encoding is not accepted where the bare scalar is expected.
        let full = PrivateKey::random().to_string();
        assert!(matches!(
            public_key_from_private_string(&full),
            Err(KeyError::LengthMismatch { expected: 32, actual: 33, .. })
        ));
        assert!(matches!(
            sign_data_by_private_string(&scalar_text(), "!!"),
            Err(KeyError::Decode(_))
        ));
    }
}
