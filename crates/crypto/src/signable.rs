//! The capability a message needs to be signed or verified.

/// Anything with a canonical byte form.
///
/// Signing and verification only ever look at
/// [`abstract_representation`](Signable::abstract_representation), so a
/// message type decides for itself which of its fields are covered.
pub trait Signable {
    fn abstract_representation(&self) -> Vec<u8>;
}

impl Signable for [u8] {
    fn abstract_representation(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> Signable for [u8; N] {
    fn abstract_representation(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl Signable for Vec<u8> {
    fn abstract_representation(&self) -> Vec<u8> {
        self.clone()
    }
}

impl Signable for str {
    fn abstract_representation(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Signable for String {
    fn abstract_representation(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl<T: Signable + ?Sized> Signable for &T {
    fn abstract_representation(&self) -> Vec<u8> {
        (**self).abstract_representation()
    }
}
