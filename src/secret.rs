//! Representation of a shared secret as the base32 encoded String exchanged
//! when enrolling an account.
//!
//! # Examples
//!
//! ```
//! use twofa::{Secret, Totp};
//!
//! let secret = Secret::new("JBSWY3DPEHPK3PXP".to_string());
//! let totp = Totp::new(secret.to_bytes().unwrap());
//!
//! println!("code from base32:\t{}", totp.generate_current().unwrap());
//! ```

use base32::{self, Alphabet};

use serde::Deserialize;

/// Different ways secret decoding failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretParseError {
    /// Invalid base32 input.
    ParseBase32,
    /// Input decodes to an empty key.
    Empty,
}

impl std::error::Error for SecretParseError {}

impl std::fmt::Display for SecretParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretParseError::ParseBase32 => write!(f, "Could not decode base32 secret."),
            SecretParseError::Empty => write!(f, "Secret decodes to an empty key."),
        }
    }
}

/// Shared secret between this tool and an issuer, kept in its base32 encoded
/// form as read from the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a base32 encoded ([rfc-4648](https://datatracker.ietf.org/doc/html/rfc4648#section-6))
    /// secret string. The alphabet is case-insensitive; validation happens
    /// on [to_bytes](struct.Secret.html#method.to_bytes).
    pub fn new(encoded: String) -> Secret {
        Secret(encoded)
    }

    /// Decode to the raw key bytes. Input is upper-cased before decoding.
    ///
    /// # Errors
    ///
    /// Returns a [SecretParseError](enum.SecretParseError.html) when the
    /// string contains characters outside the base32 alphabet, carries
    /// invalid padding, or decodes to an empty key.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SecretParseError> {
        let normalized = self.0.to_ascii_uppercase();
        match base32::decode(Alphabet::Rfc4648 { padding: true }, &normalized) {
            Some(bytes) if bytes.is_empty() => Err(SecretParseError::Empty),
            Some(bytes) => Ok(bytes),
            None => Err(SecretParseError::ParseBase32),
        }
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
