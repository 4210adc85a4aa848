//! Generation of 2FA authentification tokens per TOTP for accounts kept in a
//! local configuration file. The token derivation follows [rfc-4226](https://tools.ietf.org/html/rfc4226)
//! and [rfc-6238](https://tools.ietf.org/html/rfc6238) with the parameters
//! every mainstream authenticator app uses: HMAC-SHA1, 6 digits, 30-second
//! steps. Those are fixed constants here, not knobs.
//!
//! # Examples
//!
//! ```rust
//! use twofa::{Secret, Totp};
//!
//! let secret = Secret::new("JBSWY3DPEHPK3PXP".to_string());
//! let totp = Totp::new(secret.to_bytes().unwrap());
//! let token = totp.generate_current().unwrap();
//! println!("{}", token);
//! ```

mod config;
mod error;
mod secret;

pub use config::{Account, Config, ConfigError};
pub use error::Error;
pub use secret::{Secret, SecretParseError};

use hmac::Mac;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

type HmacSha1 = hmac::Hmac<sha1::Sha1>;

/// The number of digits composing a token. [rfc-4226](https://tools.ietf.org/html/rfc4226#section-5.3)
/// allows 6 to 8; authenticator apps settled on 6.
pub const DIGITS: u32 = 6;

/// Duration in seconds of a step, the recommended value per [rfc-6238](https://tools.ietf.org/html/rfc6238#section-5.2).
pub const STEP: u64 = 30;

fn system_time() -> Result<u64, SystemTimeError> {
    let t = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    Ok(t)
}

/// Totp holds the raw shared key and derives auth codes from it. The key is
/// sensitive data, treat it accordingly.
///
/// Token generation is a pure function of (key, time): no state is kept
/// between calls, and two calls within the same 30-second step yield the
/// same token.
#[derive(Debug, Clone)]
pub struct Totp<T = Vec<u8>> {
    /// Non-encoded key bytes, as decoded from a base32 [Secret](struct.Secret.html).
    key: T,
}

impl<T: AsRef<[u8]>> Totp<T> {
    /// Will create a new instance of Totp over raw key bytes. To start from
    /// the base32 string found in a configuration file, decode it with
    /// [Secret::to_bytes](struct.Secret.html#method.to_bytes) first.
    pub fn new(key: T) -> Totp<T> {
        Totp { key }
    }

    /// Will sign the step counter for the given timestamp.
    fn sign(&self, time: u64) -> Vec<u8> {
        let mut mac = HmacSha1::new_from_slice(self.key.as_ref()).unwrap();
        mac.update((time / STEP).to_be_bytes().as_ref());
        mac.finalize().into_bytes().to_vec()
    }

    /// Will generate a token given the provided timestamp in seconds,
    /// using the dynamic truncation of [rfc-4226](https://tools.ietf.org/html/rfc4226#section-5.4).
    pub fn generate(&self, time: u64) -> String {
        let result: &[u8] = &self.sign(time);
        let offset = (result.last().unwrap() & 15) as usize;
        let result =
            u32::from_be_bytes(result[offset..offset + 4].try_into().unwrap()) & 0x7fff_ffff;
        format!("{:06}", result % 10_u32.pow(DIGITS))
    }

    /// Generate a token from the current system time
    pub fn generate_current(&self) -> Result<String, SystemTimeError> {
        let t = system_time()?;
        Ok(self.generate(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "JBSWY3DPEHPK3PXP";

    fn key() -> Vec<u8> {
        Secret::new(SECRET.to_string()).to_bytes().unwrap()
    }

    #[test]
    fn generates_known_tokens() {
        let totp = Totp::new(key());
        assert_eq!(totp.generate(0).as_str(), "282760");
        // counter 1
        assert_eq!(totp.generate(59).as_str(), "996554");
        // counter 37037036
        assert_eq!(totp.generate(1111111109).as_str(), "071271");
    }

    #[test]
    fn generates_token_from_raw_key() {
        let totp = Totp::new("TestSecretSuperSecret");
        assert_eq!(totp.generate(1000).as_str(), "804420");
    }

    #[test]
    fn same_step_same_token() {
        let totp = Totp::new(key());
        assert_eq!(totp.generate(0), totp.generate(29));
        assert_eq!(totp.generate(30), totp.generate(59));
    }

    #[test]
    fn token_is_six_decimal_digits() {
        let totp = Totp::new(key());
        for time in [0, 1, 29, 30, 59, 1000, 1234567890, 2000000000] {
            let token = totp.generate(time);
            assert_eq!(token.len(), 6);
            assert!(token.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn pads_with_leading_zeros() {
        // counter 256 truncates to 766
        let totp = Totp::new(key());
        assert_eq!(totp.generate(256 * STEP).as_str(), "000766");
    }

    #[test]
    fn generate_token_current() {
        let totp = Totp::new(key());
        let time = system_time().unwrap();
        assert_eq!(
            totp.generate(time).as_str(),
            totp.generate_current().unwrap()
        );
    }
}
