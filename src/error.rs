use std::time::SystemTimeError;

use crate::config::ConfigError;
use crate::secret::SecretParseError;

/// Errors surfaced to the command-line entry point. Every fallible boundary
/// (config read, YAML parse, base32 decode, clock read) converges here; the
/// single handler in `main` reports the error and exits non-zero.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Secret(SecretParseError),
    Time(SystemTimeError),
    MissingIssuer,
    UnknownIssuer(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(err) => write!(f, "{}", err),
            Error::Secret(err) => write!(f, "Invalid secret: {}", err),
            Error::Time(err) => write!(f, "Could not read the system clock: {}", err),
            Error::MissingIssuer => write!(f, "Expected exactly one issuer argument"),
            Error::UnknownIssuer(issuer) => {
                write!(f, "No account matches issuer \"{}\"", issuer)
            }
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<SecretParseError> for Error {
    fn from(err: SecretParseError) -> Self {
        Error::Secret(err)
    }
}

impl From<SystemTimeError> for Error {
    fn from(err: SystemTimeError) -> Self {
        Error::Time(err)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, SecretParseError};

    #[test]
    fn secret() {
        let error = Error::Secret(SecretParseError::ParseBase32);
        assert_eq!(
            error.to_string(),
            "Invalid secret: Could not decode base32 secret."
        )
    }

    #[test]
    fn missing_issuer() {
        let error = Error::MissingIssuer;
        assert_eq!(error.to_string(), "Expected exactly one issuer argument")
    }

    #[test]
    fn unknown_issuer() {
        let error = Error::UnknownIssuer("dockerhub".to_string());
        assert_eq!(
            error.to_string(),
            "No account matches issuer \"dockerhub\""
        )
    }
}
