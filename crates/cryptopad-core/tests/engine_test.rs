// CryptoPad Engine Integration Tests
//
// These tests exercise the full transform pipeline through the public API:
// Mode + TransformRequest -> transform -> output text or TransformError
//
// Run with: cargo test -p cryptopad-core --test engine_test

use cryptopad_core::{transform, ErrorKind, Mode, TransformRequest};

fn run(mode: Mode, input: &str, key: Option<&str>) -> Result<String, cryptopad_core::TransformError> {
    transform(&TransformRequest::new(mode, input, key))
}

#[test]
fn test_base64_round_trip() {
    for text in ["hello", "", "line one\nline two", "ünïcødé 文字 🙂"] {
        let encoded = run(Mode::Base64Encode, text, None).unwrap();
        let decoded = run(Mode::Base64Decode, &encoded, None).unwrap();
        assert_eq!(decoded, text, "round trip failed for {text:?}");
    }
}

#[test]
fn test_base64_known_vectors() {
    assert_eq!(run(Mode::Base64Encode, "hello", None).unwrap(), "aGVsbG8=");
    assert_eq!(run(Mode::Base64Decode, "aGVsbG8=", None).unwrap(), "hello");
    // Empty input encodes to the empty string
    assert_eq!(run(Mode::Base64Encode, "", None).unwrap(), "");
    assert_eq!(run(Mode::Base64Decode, "", None).unwrap(), "");
}

#[test]
fn test_base64_decode_accepts_unpadded_input() {
    // Padding is optional on decode, like forgiving-base64 decoders;
    // encoding still always emits padded output.
    assert_eq!(run(Mode::Base64Decode, "aGVsbG8", None).unwrap(), "hello");
    let padded = run(Mode::Base64Decode, "aGVsbG8=", None).unwrap();
    assert_eq!(padded, "hello");
}

#[test]
fn test_base64_decode_rejects_malformed_input() {
    let err = run(Mode::Base64Decode, "not-valid-base64!!", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decoding);
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    for text in ["attack at dawn", "a", "multi\nline\ntext", "ünïcødé 文字 🙂"] {
        let token = run(Mode::Encrypt, text, Some("hunter2")).unwrap();
        let decrypted = run(Mode::Decrypt, &token, Some("hunter2")).unwrap();
        assert_eq!(decrypted, text, "round trip failed for {text:?}");
    }
}

#[test]
fn test_encryption_is_non_deterministic() {
    let first = run(Mode::Encrypt, "same plaintext", Some("same key")).unwrap();
    let second = run(Mode::Encrypt, "same plaintext", Some("same key")).unwrap();
    // Fresh random salt and IV per call
    assert_ne!(first, second);
}

#[test]
fn test_wrong_key_fails_to_decrypt() {
    // No MAC, so detection rides on padding/UTF-8/empty checks. With a
    // 16-byte random salt this is overwhelmingly likely, not guaranteed.
    let token = run(Mode::Encrypt, "attack at dawn", Some("right key")).unwrap();
    let err = run(Mode::Decrypt, &token, Some("wrong key")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decryption);
}

#[test]
fn test_missing_key_is_reported_for_both_directions() {
    for key in [None, Some("")] {
        assert_eq!(
            run(Mode::Encrypt, "text", key).unwrap_err().kind(),
            ErrorKind::MissingKey
        );
        assert_eq!(
            run(Mode::Decrypt, "text", key).unwrap_err().kind(),
            ErrorKind::MissingKey
        );
    }
}

#[test]
fn test_empty_plaintext_decrypts_as_failure() {
    // Encrypting "" works, but the empty decrypted output is treated as an
    // invalid-key signal, so the round trip deliberately fails.
    let token = run(Mode::Encrypt, "", Some("key")).unwrap();
    let err = run(Mode::Decrypt, &token, Some("key")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decryption);
}

#[test]
fn test_decrypt_rejects_garbage_tokens() {
    for garbage in [
        "",
        "definitely not a token",
        "aGVsbG8=", // valid Base64, not a CryptoPad token
    ] {
        let err = run(Mode::Decrypt, garbage, Some("key")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decryption, "accepted {garbage:?}");
    }
}

#[test]
fn test_token_survives_reserialization() {
    // Tokens are plain text: storing in a file or clipboard must not
    // change how they decrypt.
    let token = run(Mode::Encrypt, "persist me", Some("key")).unwrap();
    let copied = format!("{}\n", token); // trailing newline from a .txt file
    assert_eq!(
        run(Mode::Decrypt, &copied, Some("key")).unwrap(),
        "persist me"
    );
}

#[test]
fn test_corrupted_token_fails() {
    let token = run(Mode::Encrypt, "attack at dawn", Some("key")).unwrap();
    // Flip a character in the middle of the token body
    let mut chars: Vec<char> = token.chars().collect();
    let mid = chars.len() / 2;
    chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
    let corrupted: String = chars.into_iter().collect();
    assert!(run(Mode::Decrypt, &corrupted, Some("key")).is_err());
}
