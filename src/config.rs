//! Configuration file discovery and loading.
//!
//! The file is a YAML sequence of accounts:
//!
//! ```yaml
//! - issuer: GitHub
//!   secret: JBSWY3DPEHPK3PXP
//! - issuer: AWS
//!   secret: ORSXG5A=
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::secret::Secret;

/// Environment variable overriding the default configuration path.
pub const CONFIG_ENV: &str = "TWO_FA_CONFIG";

const CONFIG_FILE: &str = ".2faconfig.yaml";

/// Different ways locating or loading the configuration failed.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Read(PathBuf, io::Error),
    /// The file is not a valid YAML account list.
    Parse(serde_yaml::Error),
    /// No home directory to resolve the default path against.
    NoHomeDir,
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(path, err) => write!(
                f,
                "Could not read configuration file \"{}\": {}",
                path.display(),
                err
            ),
            ConfigError::Parse(err) => write!(f, "Could not parse configuration file: {}", err),
            ConfigError::NoHomeDir => write!(
                f,
                "Could not determine the home directory. Set {} to the configuration path",
                CONFIG_ENV
            ),
        }
    }
}

/// One configured account: the issuer name and its shared secret.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub issuer: String,
    pub secret: Secret,
}

/// The loaded account table, in file order. Loaded once and passed around
/// by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Config {
    accounts: Vec<Account>,
}

impl Config {
    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        serde_yaml::from_str(&raw).map_err(ConfigError::Parse)
    }

    /// Resolve the configuration path when no `--config` flag is given:
    /// `$TWO_FA_CONFIG` if set, `~/.2faconfig.yaml` otherwise.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        match dirs::home_dir() {
            Some(home) => Ok(home.join(CONFIG_FILE)),
            None => Err(ConfigError::NoHomeDir),
        }
    }

    /// Configured issuer names, in file order.
    pub fn issuers(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.issuer.as_str())
    }

    /// Every account whose issuer matches `name` case-insensitively.
    /// Duplicate issuers in the file all match; the caller gets one token
    /// per match.
    pub fn matching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Account> {
        self.accounts
            .iter()
            .filter(move |account| account.issuer.eq_ignore_ascii_case(name))
    }
}
