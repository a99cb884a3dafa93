//! Versioned binary encodings for asymmetric key identities and signatures.
//!
//! This crate provides the key, address and signature entities of the
//! keysuite system together with the protocol that ties them together: key
//! derivation, message signing and signature verification.
//!
//! # Entities
//!
//! | Entity | Bytes | Layout |
//! |---|---|---|
//! | [`PrivateKey`] | 33 | `suite(1) \| scalar(32)` |
//! | [`PublicKey`] | 65 | `suite(1) \| x(32) \| y(32)` |
//! | [`Address`] | 21 | `suite(1) \| digest(20)` |
//! | [`Signature`] | 161 | `suite(1) \| r(32) \| s(32) \| x(32) \| y(32) \| hash(32)` |
//!
//! Every entity is an immutable value built by a validating constructor, and
//! has a base64 text form through `Display`/`FromStr` (also used by serde).
//! Private keys additionally round trip through a 24-word mnemonic.
//!
//! # Suites
//!
//! The leading byte names the suite. Only `0x01` is defined: ECDSA over NIST
//! P-256 with SHA-256 message digests and RIPEMD-160(SHA-256) addresses.
//! Encodings carrying any other tag are rejected.
//!
//! # Example
//!
//! ```
//! use keysuite_crypto::{PrivateKey, Signature};
//!
//! let key = PrivateKey::random();
//! let signature = key.sign("Hello World")?;
//!
//! // The signature names its signer and verifies on its own.
//! let received: Signature = signature.to_string().parse()?;
//! assert_eq!(received.address(), key.public_key().address());
//! assert!(received.verify("Hello World"));
//! assert!(!received.verify("hello world"));
//! # Ok::<(), keysuite_crypto::KeyError>(())
//! ```

pub mod address;
pub mod codec;
pub mod error;
pub mod facade;
pub mod hash;
pub mod mnemonic;
pub mod private;
pub mod public;
pub mod signable;
pub mod signature;
pub mod suite;
mod text;

pub use address::{Address, SIZEOF_ADDRESS};
pub use error::{KeyError, KeyResult};
pub use mnemonic::{bytes_to_mnemonics, mnemonics_to_bytes, MNEMONIC_WORD_COUNT};
pub use private::{PrivateKey, LENOF_PRIVATEKEY, SIZEOF_PRIVATEKEY};
pub use public::{PublicKey, LENOF_PUBLICKEY, SIZEOF_PUBLICKEY};
pub use signable::Signable;
pub use signature::{Signature, LENOF_SIGNATURE, SIZEOF_SIGNATURE};
pub use suite::{Suite, LENOF_ADDRESS, LENOF_BIGINT, LENOF_HASH};

pub use keysuite_core::{DecodeConfig, SuiteConfig};
