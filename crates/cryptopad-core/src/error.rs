// CryptoPad Error Taxonomy
// Every failure is returned as a value; nothing panics, nothing is retried

/// Coarse error category, for callers that key on the taxonomy
/// rather than the message (e.g. exit codes, notification styling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingKey,
    Decoding,
    Decryption,
    Encoding,
}

/// Errors produced by the transform engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// Encrypt/decrypt was requested without a key
    #[error("no key provided; enter an encryption key")]
    MissingKey,

    /// Input is not valid Base64, or the decoded bytes are not UTF-8 text
    #[error("unable to decode: {0}")]
    Decoding(String),

    /// Token is malformed, or decryption did not yield usable text.
    /// A wrong key lands here too: there is no MAC, so an invalid-padding
    /// or garbage-plaintext result is the only signal we get.
    #[error("unable to decrypt: {0}")]
    Decryption(String),

    /// Reserved: text input is always encodable in practice
    #[error("unable to encode: {0}")]
    Encoding(String),
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::MissingKey => ErrorKind::MissingKey,
            TransformError::Decoding(_) => ErrorKind::Decoding,
            TransformError::Decryption(_) => ErrorKind::Decryption,
            TransformError::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(TransformError::MissingKey.kind(), ErrorKind::MissingKey);
        assert_eq!(
            TransformError::Decoding("x".into()).kind(),
            ErrorKind::Decoding
        );
        assert_eq!(
            TransformError::Decryption("x".into()).kind(),
            ErrorKind::Decryption
        );
        assert_eq!(
            TransformError::Encoding("x".into()).kind(),
            ErrorKind::Encoding
        );
    }

    #[test]
    fn test_messages_are_user_renderable() {
        let msg = TransformError::MissingKey.to_string();
        assert!(msg.contains("key"));
    }
}
