//! Mnemonic word lists for private key material.
//!
//! The 32 scalar bytes are BIP-39 entropy: 24 English words carrying an
//! 8-bit SHA-256 checksum. Word count and dictionary are part of the durable
//! backup format and must not change.

use bip39::{Error as Bip39Error, Language, Mnemonic};

use crate::error::{KeyError, KeyResult};
use crate::suite::LENOF_BIGINT;

/// Number of words encoding one private scalar.
pub const MNEMONIC_WORD_COUNT: usize = 24;

const DICTIONARY: Language = Language::English;

fn map_bip39(err: Bip39Error) -> KeyError {
    match err {
        Bip39Error::BadWordCount(n) => KeyError::Decode(format!(
            "expected {} mnemonic words, got {}",
            MNEMONIC_WORD_COUNT, n
        )),
        Bip39Error::UnknownWord(i) => KeyError::InvalidMnemonic(format!("unknown word #{}", i + 1)),
        Bip39Error::InvalidChecksum => KeyError::InvalidMnemonic("checksum mismatch".into()),
        other => KeyError::Decode(other.to_string()),
    }
}

/// Maps 32 bytes to their 24-word mnemonic.
pub fn bytes_to_mnemonics(bytes: &[u8; LENOF_BIGINT]) -> KeyResult<Vec<String>> {
    let mnemonic = Mnemonic::from_entropy_in(DICTIONARY, bytes).map_err(map_bip39)?;
    Ok(mnemonic
        .to_string()
        .split_whitespace()
        .map(str::to_owned)
        .collect())
}

/// Maps a 24-word mnemonic back to the 32 bytes it encodes.
///
/// Fails with [`KeyError::Decode`] on a wrong word count and with
/// [`KeyError::InvalidMnemonic`] on an unknown word or a checksum mismatch.
pub fn mnemonics_to_bytes<S: AsRef<str>>(words: &[S]) -> KeyResult<[u8; LENOF_BIGINT]> {
    // bip39 accepts 12 to 24 words; a scalar backup is always exactly 24.
    if words.len() != MNEMONIC_WORD_COUNT {
        return Err(KeyError::Decode(format!(
            "expected {} mnemonic words, got {}",
            MNEMONIC_WORD_COUNT,
            words.len()
        )));
    }

    let phrase = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    let mnemonic = Mnemonic::parse_in_normalized(DICTIONARY, &phrase).map_err(map_bip39)?;
    let (entropy, len) = mnemonic.to_entropy_array();
    if len != LENOF_BIGINT {
        return Err(KeyError::length("mnemonic entropy", LENOF_BIGINT, len));
    }
    let mut bytes = [0u8; LENOF_BIGINT];
    bytes.copy_from_slice(&entropy[..LENOF_BIGINT]);
    Ok(bytes)
}

/// Splits a space separated phrase and decodes it.
pub fn phrase_to_bytes(phrase: &str) -> KeyResult<[u8; LENOF_BIGINT]> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    mnemonics_to_bytes(&words)
}
