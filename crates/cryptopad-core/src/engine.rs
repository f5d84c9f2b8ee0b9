// CryptoPad Transform Engine
// Pure function of (mode, input, key): no I/O, no retained state
//
// Branches:
// - Base64 encode/decode over the UTF-8 byte representation of the text.
//   Encoding goes through UTF-8 bytes explicitly, so multi-byte text
//   survives the round trip (a byte-per-character encoder corrupts it).
// - Encrypt/decrypt with AES-256-CBC. The key is derived from the password
//   via PBKDF2-HMAC-SHA256 with a fresh random salt per call, and a fresh
//   random IV is used per call, so encrypting the same plaintext twice
//   yields two different tokens.
//
// Decryption has no MAC: a wrong key surfaces as bad padding, invalid
// UTF-8, or an empty plaintext, all reported as a decryption error. This
// detection is probabilistic, not an authentication guarantee.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as B64};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::error::TransformError;
use crate::mode::Mode;
use crate::token::{EncryptedToken, IV_LEN, SALT_LEN};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decode engine for user-supplied Base64: padding is optional, matching
/// forgiving-base64 decoders. Encoding (and token parsing, which only ever
/// sees self-produced padded text) stays on the strict STANDARD engine.
const B64_RELAXED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// PBKDF2 iteration count. Fixed; changing it would orphan existing tokens
/// until the token version is bumped.
const KDF_ROUNDS: u32 = 10_000;

/// Derived AES-256 key length in bytes
const KEY_LEN: usize = 32;

/// One transform invocation: mode selector, input text, optional key.
///
/// Ephemeral and borrowed; the engine holds nothing between calls.
#[derive(Debug, Clone, Copy)]
pub struct TransformRequest<'a> {
    pub mode: Mode,
    pub input: &'a str,
    pub key: Option<&'a str>,
}

impl<'a> TransformRequest<'a> {
    pub fn new(mode: Mode, input: &'a str, key: Option<&'a str>) -> Self {
        Self { mode, input, key }
    }

    /// The key, if present and non-empty
    fn key_text(&self) -> Option<&'a str> {
        self.key.filter(|k| !k.is_empty())
    }
}

/// Run one transform. Total: every failure comes back as a value.
pub fn transform(request: &TransformRequest<'_>) -> Result<String, TransformError> {
    match request.mode {
        Mode::Base64Encode => Ok(base64_encode(request.input)),
        Mode::Base64Decode => base64_decode(request.input),
        Mode::Encrypt => {
            let key = request.key_text().ok_or(TransformError::MissingKey)?;
            Ok(encrypt(request.input, key))
        }
        Mode::Decrypt => {
            let key = request.key_text().ok_or(TransformError::MissingKey)?;
            decrypt(request.input, key)
        }
    }
}

fn base64_encode(input: &str) -> String {
    B64.encode(input.as_bytes())
}

fn base64_decode(input: &str) -> Result<String, TransformError> {
    let bytes = B64_RELAXED
        .decode(input.trim())
        .map_err(|e| TransformError::Decoding(format!("invalid Base64 input: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| TransformError::Decoding("decoded bytes are not valid UTF-8 text".into()))
}

fn encrypt(plaintext: &str, key_text: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(key_text, &salt);
    let ciphertext = Aes256CbcEnc::new(&key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    log::debug!(
        "encrypted {} bytes into {} ciphertext bytes",
        plaintext.len(),
        ciphertext.len()
    );

    EncryptedToken::new(salt, iv, ciphertext).encode()
}

fn decrypt(token_text: &str, key_text: &str) -> Result<String, TransformError> {
    let token = EncryptedToken::parse(token_text)
        .map_err(|e| TransformError::Decryption(e.to_string()))?;

    let key = derive_key(key_text, &token.salt);
    let plaintext = Aes256CbcDec::new(&key.into(), &token.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&token.ciphertext)
        .map_err(|_| TransformError::Decryption("invalid key or ciphertext".into()))?;

    let text = String::from_utf8(plaintext)
        .map_err(|_| TransformError::Decryption("invalid key or ciphertext".into()))?;

    // Empty output is treated as a failed decryption, matching the
    // original heuristic. Encrypting "" therefore cannot round-trip.
    if text.is_empty() {
        return Err(TransformError::Decryption(
            "decryption produced no output; invalid key or ciphertext".into(),
        ));
    }

    Ok(text)
}

fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ROUNDS, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: Mode, input: &str, key: Option<&str>) -> Result<String, TransformError> {
        transform(&TransformRequest::new(mode, input, key))
    }

    #[test]
    fn test_base64_encode_hello_vector() {
        assert_eq!(run(Mode::Base64Encode, "hello", None).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_base64_decode_hello_vector() {
        assert_eq!(run(Mode::Base64Decode, "aGVsbG8=", None).unwrap(), "hello");
    }

    #[test]
    fn test_base64_decode_padding_is_optional() {
        assert_eq!(run(Mode::Base64Decode, "aGVsbG8", None).unwrap(), "hello");
        assert_eq!(run(Mode::Base64Decode, "aGk", None).unwrap(), "hi");
    }

    #[test]
    fn test_base64_encode_uses_utf8_bytes() {
        // "é" is U+00E9, two bytes in UTF-8; a byte-per-character encoder
        // would produce "6Q==" instead.
        assert_eq!(run(Mode::Base64Encode, "é", None).unwrap(), "w6k=");
    }

    #[test]
    fn test_base64_key_is_ignored() {
        let with_key = run(Mode::Base64Encode, "hello", Some("secret")).unwrap();
        let without = run(Mode::Base64Encode, "hello", None).unwrap();
        assert_eq!(with_key, without);
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        // 0xFF is never valid UTF-8
        let encoded = B64.encode([0xFFu8, 0xFE, 0xFD]);
        let err = run(Mode::Base64Decode, &encoded, None).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Decoding);
    }

    #[test]
    fn test_encrypt_empty_key_is_missing_key() {
        assert_eq!(
            run(Mode::Encrypt, "text", Some("")).unwrap_err(),
            TransformError::MissingKey
        );
        assert_eq!(
            run(Mode::Encrypt, "text", None).unwrap_err(),
            TransformError::MissingKey
        );
    }

    #[test]
    fn test_decrypt_empty_key_is_missing_key() {
        assert_eq!(
            run(Mode::Decrypt, "whatever", Some("")).unwrap_err(),
            TransformError::MissingKey
        );
    }

    #[test]
    fn test_derive_key_is_deterministic_per_salt() {
        let salt_a = [1u8; SALT_LEN];
        let salt_b = [2u8; SALT_LEN];
        assert_eq!(derive_key("pw", &salt_a), derive_key("pw", &salt_a));
        assert_ne!(derive_key("pw", &salt_a), derive_key("pw", &salt_b));
        assert_ne!(derive_key("pw", &salt_a), derive_key("pw2", &salt_a));
    }
}
