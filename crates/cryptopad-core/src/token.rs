// CryptoPad Encrypted Token Format
// Serializes salt + IV + ciphertext into a single clipboard-safe text blob
//
// Layout (before Base64):
//
//   "CPAD" | version(1) | salt(16) | iv(16) | ciphertext(16n)
//
// The magic and version byte make the token self-describing, so a blob
// produced by one run can be parsed and decrypted by another, and future
// layout changes can bump the version without breaking existing tokens.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

/// Magic bytes identifying a CryptoPad token
pub const TOKEN_MAGIC: &[u8; 4] = b"CPAD";

/// Current token layout version
pub const TOKEN_VERSION: u8 = 1;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// IV length in bytes (AES block size)
pub const IV_LEN: usize = 16;

const HEADER_LEN: usize = TOKEN_MAGIC.len() + 1 + SALT_LEN + IV_LEN;

/// Parsed form of an encrypted token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedToken {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

/// Errors raised while parsing a token
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not valid Base64")]
    NotBase64,

    #[error("token is truncated ({0} bytes)")]
    Truncated(usize),

    #[error("token does not look like CryptoPad output")]
    BadMagic,

    #[error("unsupported token version {0}")]
    UnsupportedVersion(u8),

    #[error("ciphertext length {0} is not a whole number of cipher blocks")]
    BadCiphertextLength(usize),
}

impl EncryptedToken {
    pub fn new(salt: [u8; SALT_LEN], iv: [u8; IV_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            iv,
            ciphertext,
        }
    }

    /// Render the token as a single Base64 text line
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        raw.extend_from_slice(TOKEN_MAGIC);
        raw.push(TOKEN_VERSION);
        raw.extend_from_slice(&self.salt);
        raw.extend_from_slice(&self.iv);
        raw.extend_from_slice(&self.ciphertext);
        B64.encode(raw)
    }

    /// Parse a token previously produced by `encode`
    pub fn parse(text: &str) -> Result<Self, TokenError> {
        let raw = B64
            .decode(text.trim())
            .map_err(|_| TokenError::NotBase64)?;

        // PKCS#7 always pads, so a valid token carries at least one block
        if raw.len() < HEADER_LEN + IV_LEN {
            return Err(TokenError::Truncated(raw.len()));
        }
        if &raw[..TOKEN_MAGIC.len()] != TOKEN_MAGIC {
            return Err(TokenError::BadMagic);
        }
        let version = raw[TOKEN_MAGIC.len()];
        if version != TOKEN_VERSION {
            return Err(TokenError::UnsupportedVersion(version));
        }

        let mut salt = [0u8; SALT_LEN];
        let mut iv = [0u8; IV_LEN];
        let salt_start = TOKEN_MAGIC.len() + 1;
        salt.copy_from_slice(&raw[salt_start..salt_start + SALT_LEN]);
        iv.copy_from_slice(&raw[salt_start + SALT_LEN..HEADER_LEN]);

        let ciphertext = raw[HEADER_LEN..].to_vec();
        if ciphertext.len() % IV_LEN != 0 {
            return Err(TokenError::BadCiphertextLength(ciphertext.len()));
        }

        Ok(Self {
            salt,
            iv,
            ciphertext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> EncryptedToken {
        EncryptedToken::new([7u8; SALT_LEN], [9u8; IV_LEN], vec![0xAB; 32])
    }

    #[test]
    fn test_parse_after_encode_is_identity() {
        let token = sample_token();
        let parsed = EncryptedToken::parse(&token.encode()).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_token_is_plain_ascii() {
        let text = sample_token().encode();
        assert!(text.is_ascii());
        assert!(!text.contains(char::is_whitespace));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let text = format!("  {}\n", sample_token().encode());
        assert_eq!(EncryptedToken::parse(&text).unwrap(), sample_token());
    }

    #[test]
    fn test_rejects_non_base64() {
        assert_eq!(
            EncryptedToken::parse("not-valid-base64!!"),
            Err(TokenError::NotBase64)
        );
    }

    #[test]
    fn test_rejects_truncated_token() {
        let err = EncryptedToken::parse(&B64.encode(b"CPAD")).unwrap_err();
        assert!(matches!(err, TokenError::Truncated(_)));
    }

    #[test]
    fn test_rejects_wrong_magic() {
        let mut raw = vec![0u8; HEADER_LEN + IV_LEN];
        raw[..4].copy_from_slice(b"NOPE");
        assert_eq!(
            EncryptedToken::parse(&B64.encode(raw)),
            Err(TokenError::BadMagic)
        );
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut raw = Vec::new();
        raw.extend_from_slice(TOKEN_MAGIC);
        raw.push(99);
        raw.extend_from_slice(&[0u8; SALT_LEN + IV_LEN + IV_LEN]);
        assert_eq!(
            EncryptedToken::parse(&B64.encode(raw)),
            Err(TokenError::UnsupportedVersion(99))
        );
    }

    #[test]
    fn test_rejects_partial_cipher_block() {
        let mut raw = Vec::new();
        raw.extend_from_slice(TOKEN_MAGIC);
        raw.push(TOKEN_VERSION);
        raw.extend_from_slice(&[0u8; SALT_LEN + IV_LEN]);
        raw.extend_from_slice(&[0u8; 17]);
        assert_eq!(
            EncryptedToken::parse(&B64.encode(raw)),
            Err(TokenError::BadCiphertextLength(17))
        );
    }
}
