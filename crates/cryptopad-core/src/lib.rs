// CryptoPad Core Library
// Text transform engine: Base64 encoding and password-based AES encryption

pub mod engine;
pub mod error;
pub mod mode;
pub mod settings;
pub mod token;

pub use engine::{transform, TransformRequest};
pub use error::{ErrorKind, TransformError};
pub use mode::{Mode, ParseModeError};
pub use settings::{Settings, SettingsError};
pub use token::{EncryptedToken, TokenError};
