use moneta_util::ResultExt as _;
use serde::{Deserialize, Serialize};

use crate::{
    consts::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_SCHEME_PREFIX},
    uri::is_uri_scheme,
};

/// Scheme and currency settings shared by encode and decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct UriConfig {
    scheme_prefix: String,
    canonical_currency_symbol: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("scheme prefix must not be empty")]
    EmptySchemePrefix,

    #[error("scheme prefix must end with ':', got {0}")]
    MissingSchemeColon(String),

    #[error("invalid scheme {0}, expected a lowercase letter followed by letters, digits, '+', '-' or '.'")]
    InvalidScheme(String),

    #[error("unable to parse config: {0}")]
    Parse(String),
}

/// On disk shape, every field optional
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    scheme_prefix: String,
    canonical_currency_symbol: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            scheme_prefix: DEFAULT_SCHEME_PREFIX.to_string(),
            canonical_currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl TryFrom<ConfigFile> for UriConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        Self::new(file.scheme_prefix, file.canonical_currency_symbol)
    }
}

impl Default for UriConfig {
    fn default() -> Self {
        Self {
            scheme_prefix: DEFAULT_SCHEME_PREFIX.to_string(),
            canonical_currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl UriConfig {
    /// # Errors
    /// Returns a `ConfigError` if the prefix is not a lowercase URI scheme followed by ':'.
    /// Parsed schemes are always lowercase, an uppercase prefix could never match on decode.
    pub fn new(
        scheme_prefix: impl Into<String>,
        canonical_currency_symbol: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let scheme_prefix = scheme_prefix.into();
        if scheme_prefix.is_empty() {
            return Err(ConfigError::EmptySchemePrefix);
        }

        let Some(scheme) = scheme_prefix.strip_suffix(':') else {
            return Err(ConfigError::MissingSchemeColon(scheme_prefix));
        };

        if !is_uri_scheme(scheme) || scheme.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidScheme(scheme.to_string()));
        }

        Ok(Self { scheme_prefix, canonical_currency_symbol: canonical_currency_symbol.into() })
    }

    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON or an invalid scheme prefix
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err_str(ConfigError::Parse)
    }

    /// The scheme including its trailing colon, `monero:`
    pub fn scheme_prefix(&self) -> &str {
        &self.scheme_prefix
    }

    /// The bare scheme, `monero`
    pub fn scheme(&self) -> &str {
        self.scheme_prefix.strip_suffix(':').unwrap_or(&self.scheme_prefix)
    }

    pub fn canonical_currency_symbol(&self) -> &str {
        &self.canonical_currency_symbol
    }

    pub fn is_canonical_currency(&self, symbol: &str) -> bool {
        symbol.to_lowercase() == self.canonical_currency_symbol.to_lowercase()
    }
}
