//! Integration tests for the key lifecycle.
//!
//! These tests validate the complete derivation and signing workflow:
//! - Private key -> public key -> address derivation and its golden vector
//! - Sign/verify over literal messages and custom signable types
//! - Binary, text and mnemonic round trips of every entity
//! - Cross-key rejection

use keysuite_crypto::{
    Address, KeyError, PrivateKey, PublicKey, Signable, Signature, Suite, SIZEOF_ADDRESS,
    SIZEOF_PRIVATEKEY, SIZEOF_PUBLICKEY, SIZEOF_SIGNATURE,
};
use num_bigint::BigUint;

/// P-256 base point.
const GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
const GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// Address of the key with scalar 1.
const SCALAR_ONE_DIGEST: &str = "b134d1f44dca906dcd7c96e4455d7eaa9efa6987";
const SCALAR_ONE_ADDRESS: &str = "AbE00fRNypBtzXyW5EVdfqqe+mmH";
const SCALAR_ONE_PUBLIC: &str =
    "AWsX0fLhLEJH+Lzm5WOkQPJ3A32BLeszoPShOUXYmMKWT+NC4v4af5uO5+tKfA+eFivOM1drMV7Oy7ZAaDe/UfU=";

/// Helper to build the key with scalar 1.
fn scalar_one_key() -> PrivateKey {
    let mut data = [0u8; 32];
    data[31] = 1;
    PrivateKey::from_data(&data).expect("scalar 1 is a valid key")
}

/// Helper to build a fixed, seeded private key.
fn seeded_key() -> PrivateKey {
    PrivateKey::from_data(&[0x42; 32]).expect("seeded scalar is valid")
}

fn big(hex_str: &str) -> BigUint {
    BigUint::parse_bytes(hex_str.as_bytes(), 16).expect("valid hex")
}

#[test]
fn test_scalar_one_derives_base_point() {
    let public = scalar_one_key().public_key();
    assert_eq!(public.x(), big(GX));
    assert_eq!(public.y(), big(GY));
    assert_eq!(public.to_string(), SCALAR_ONE_PUBLIC);
}

#[test]
fn test_scalar_one_golden_address() {
    let address = scalar_one_key().public_key().address();
    assert_eq!(hex::encode(address.data()), SCALAR_ONE_DIGEST);
    assert_eq!(address.to_string(), SCALAR_ONE_ADDRESS);

    let parsed: Address = SCALAR_ONE_ADDRESS.parse().unwrap();
    let public: PublicKey = SCALAR_ONE_PUBLIC.parse().unwrap();
    assert!(parsed.validate(&public));
}

#[test]
fn test_seeded_key_public_vector() {
    let public = seeded_key().public_key();
    assert_eq!(
        public.x(),
        big("3ad3861a95621392516bb593ef05583ed2e5866f5cb6260a3017237fd89b90af")
    );
    assert_eq!(
        public.y(),
        big("d0961c7e37075a6791a39c61f56295b02b6d26567b615e60aa41ee1c8e83388d")
    );
}

#[test]
fn test_hello_world_scenario() {
    let key = seeded_key();
    let signature = key.sign("Hello World").expect("signing succeeds");

    assert!(!key.public_key().verify("hello world", &signature));
    assert!(key.public_key().verify("Hello World", &signature));
    assert!(signature.verify("Hello World"));
    assert!(!signature.verify("hello world"));
}

#[test]
fn test_derivation_is_deterministic() {
    let key = PrivateKey::random();
    let a = key.public_key();
    let b = key.public_key();
    assert_eq!(a.x(), b.x());
    assert_eq!(a.y(), b.y());
    assert_eq!(a.address().data(), b.address().data());
}

#[test]
fn test_cross_key_rejection() {
    let k1 = PrivateKey::random();
    let k2 = PrivateKey::random();
    assert_ne!(k1, k2);

    let signature = k1.sign("transfer 10 units").unwrap();
    assert!(k1.public_key().verify("transfer 10 units", &signature));
    assert!(!k2.public_key().verify("transfer 10 units", &signature));
    assert!(!signature.address().validate(&k2.public_key()));
}

#[test]
fn test_entity_sizes() {
    let key = PrivateKey::random();
    let signature = key.sign(b"bytes".as_slice()).unwrap();
    assert_eq!(key.to_bytes().len(), SIZEOF_PRIVATEKEY);
    assert_eq!(key.public_key().to_bytes().len(), SIZEOF_PUBLICKEY);
    assert_eq!(key.public_key().address().to_bytes().len(), SIZEOF_ADDRESS);
    assert_eq!(signature.to_bytes().len(), SIZEOF_SIGNATURE);
    assert_eq!(
        [SIZEOF_PRIVATEKEY, SIZEOF_PUBLICKEY, SIZEOF_ADDRESS, SIZEOF_SIGNATURE],
        [33, 65, 21, 161]
    );
}

#[test]
fn test_binary_and_text_round_trips() {
    let key = PrivateKey::random();
    let public = key.public_key();
    let address = public.address();
    let signature = key.sign("round trip").unwrap();

    assert_eq!(PrivateKey::from_bytes(&key.to_bytes()).unwrap(), key);
    assert_eq!(PublicKey::from_bytes(&public.to_bytes()).unwrap(), public);
    assert_eq!(Address::from_bytes(&address.to_bytes()).unwrap(), address);
    assert_eq!(Signature::from_bytes(&signature.to_bytes()).unwrap(), signature);

    assert_eq!(key.to_string().parse::<PrivateKey>().unwrap(), key);
    assert_eq!(public.to_string().parse::<PublicKey>().unwrap(), public);
    assert_eq!(address.to_string().parse::<Address>().unwrap(), address);
    assert_eq!(signature.to_string().parse::<Signature>().unwrap(), signature);
}

#[test]
fn test_data_forms_use_default_suite() {
    let key = PrivateKey::random();
    let signature = key.sign("data").unwrap();

    let restored = PrivateKey::from_data(key.data().as_slice()).unwrap();
    assert_eq!(restored, key);
    assert_eq!(restored.suite(), Suite::EcdsaP256Sha256Ripemd160);

    let public = PublicKey::from_data(&key.public_key().data()).unwrap();
    assert_eq!(public, key.public_key());

    let sig = Signature::from_data(&signature.data()).unwrap();
    assert_eq!(sig, signature);
    assert!(sig.verify("data"));
}

#[test]
fn test_mnemonic_backup_restores_identity() {
    let key = PrivateKey::random();
    let words = key.mnemonics().unwrap();
    let phrase = words.join(" ");

    let restored = PrivateKey::from_mnemonics(&phrase.split(' ').collect::<Vec<_>>()).unwrap();
    assert_eq!(restored.public_key().address(), key.public_key().address());
}

#[test]
fn test_mnemonic_errors() {
    let mut words = PrivateKey::random().mnemonics().unwrap();
    words.truncate(12);
    assert!(matches!(
        PrivateKey::from_mnemonics(&words),
        Err(KeyError::Decode(_))
    ));

    let mut words = PrivateKey::random().mnemonics().unwrap();
    words[0] = "notaword".to_string();
    assert!(matches!(
        PrivateKey::from_mnemonics(&words),
        Err(KeyError::InvalidMnemonic(_))
    ));
}

/// A message type that signs only part of its content.
struct Order {
    id: u64,
    item: String,
}

impl Signable for Order {
    fn abstract_representation(&self) -> Vec<u8> {
        let mut out = self.id.to_be_bytes().to_vec();
        out.extend_from_slice(self.item.as_bytes());
        out
    }
}

#[test]
fn test_custom_signable() {
    let key = PrivateKey::random();
    let order = Order {
        id: 7,
        item: "widget".into(),
    };
    let signature = key.sign(&order).unwrap();
    assert!(signature.verify(&order));

    let altered = Order {
        id: 8,
        item: "widget".into(),
    };
    assert!(!signature.verify(&altered));
}

#[test]
fn test_serde_json_forms() {
    let key = PrivateKey::random();
    let signature = key.sign("serde").unwrap();

    let json = serde_json::to_string(&signature).unwrap();
    assert_eq!(json, format!("\"{}\"", signature));
    let back: Signature = serde_json::from_str(&json).unwrap();
    assert!(back.verify("serde"));

    let public_json = serde_json::to_string(&key.public_key()).unwrap();
    let public: PublicKey = serde_json::from_str(&public_json).unwrap();
    assert_eq!(public, key.public_key());

    assert!(serde_json::from_str::<PublicKey>("\"AAAA\"").is_err());
}
