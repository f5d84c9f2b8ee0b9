// CryptoPad Mode Selector
// The four-way branch choosing which transform runs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The transform to apply to the input text.
///
/// Wire names (`base64-encode`, `base64-decode`, `encrypt`, `decrypt`) are
/// used on the CLI and in the persisted settings file; `label()` is the
/// human-readable form shown in the TUI mode bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Base64Encode,
    Base64Decode,
    Encrypt,
    Decrypt,
}

/// Error returned when a mode name is not recognized
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown mode '{0}' (expected base64-encode, base64-decode, encrypt or decrypt)")]
pub struct ParseModeError(pub String);

impl Mode {
    /// All modes in the order the TUI mode bar cycles through them
    pub const ALL: [Mode; 4] = [
        Mode::Base64Encode,
        Mode::Base64Decode,
        Mode::Encrypt,
        Mode::Decrypt,
    ];

    /// The stable wire name used on the CLI and in settings.toml
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Base64Encode => "base64-encode",
            Mode::Base64Decode => "base64-decode",
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }

    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Mode::Base64Encode => "Base64 Encode",
            Mode::Base64Decode => "Base64 Decode",
            Mode::Encrypt => "Encrypt",
            Mode::Decrypt => "Decrypt",
        }
    }

    /// Whether this mode needs a non-empty key to run
    pub fn requires_key(self) -> bool {
        matches!(self, Mode::Encrypt | Mode::Decrypt)
    }

    /// Next mode in cycle order (wraps around)
    pub fn next(self) -> Mode {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous mode in cycle order (wraps around)
    pub fn prev(self) -> Mode {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Base64Encode
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64-encode" => Ok(Mode::Base64Encode),
            "base64-decode" => Ok(Mode::Base64Decode),
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ENCRYPT".parse::<Mode>().unwrap(), Mode::Encrypt);
        assert_eq!(" Base64-Encode ".parse::<Mode>().unwrap(), Mode::Base64Encode);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!("rot13".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_cycle_wraps_in_both_directions() {
        assert_eq!(Mode::Decrypt.next(), Mode::Base64Encode);
        assert_eq!(Mode::Base64Encode.prev(), Mode::Decrypt);
        for mode in Mode::ALL {
            assert_eq!(mode.next().prev(), mode);
        }
    }

    #[test]
    fn test_requires_key() {
        assert!(!Mode::Base64Encode.requires_key());
        assert!(!Mode::Base64Decode.requires_key());
        assert!(Mode::Encrypt.requires_key());
        assert!(Mode::Decrypt.requires_key());
    }
}
