//! Fund request URIs.
//!
//! ```text
//! monero:[//]<address>[?tx_amount=..][&tx_amount_ccy=..][&tx_description=..][&tx_payment_id=..][&tx_message=..]
//! ```
//!
//! Two flavors exist for the address placement. `monero:ADDRESS` keeps it as the first path
//! component, `monero://ADDRESS` puts it in the authority so text data detectors on client
//! platforms link it. Decoding accepts both, plus bare addresses and OpenAlias names.

mod classify;
mod decode;
mod encode;

pub use encode::QueryParams;

use moneta_types::{MoneroAddressValidator, Network, OpenAliasDetector};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{config::UriConfig, fund_request::FundRequest};

/// Where the address goes in an encoded URI
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    uniffi::Enum,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum UriFlavor {
    /// `monero:ADDRESS`
    #[default]
    AddressAsFirstPathComponent,
    /// `monero://ADDRESS`
    AddressAsAuthority,
}

impl From<UriFlavor> for u8 {
    fn from(flavor: UriFlavor) -> Self {
        match flavor {
            UriFlavor::AddressAsFirstPathComponent => 1,
            UriFlavor::AddressAsAuthority => 2,
        }
    }
}

impl TryFrom<u8> for UriFlavor {
    type Error = FundRequestError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AddressAsFirstPathComponent),
            2 => Ok(Self::AddressAsAuthority),
            _ => Err(FundRequestError::InvalidFlavor(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum FundRequestError {
    #[error("missing address")]
    MissingAddress,

    #[error("illegal uri flavor {0}, expected 1 or 2")]
    InvalidFlavor(u8),

    #[error("unrecognized uri format, query string without a scheme")]
    MalformedBareInput,

    #[error("no request info found in string")]
    UnrecognizedAddress,

    #[error("request uri has wrong protocol {found}, expected {expected}")]
    WrongScheme { expected: String, found: String },

    #[error("unable to parse uri: {0}")]
    UnparsableUri(String),

    #[error("scanned payload is binary data, not text")]
    BinaryPayload,
}

type Error = FundRequestError;
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Encoder and decoder for one scheme.
///
/// The address validator and OpenAlias detector are injected, the defaults check Monero
/// addresses structurally and treat anything with a dot in it as an alias.
#[derive(Debug, Clone)]
pub struct FundRequestCodec<V = MoneroAddressValidator, A = OpenAliasDetector> {
    config: UriConfig,
    validator: V,
    alias_detector: A,
}

impl FundRequestCodec {
    pub fn new(config: UriConfig) -> Self {
        Self::with_collaborators(config, MoneroAddressValidator, OpenAliasDetector)
    }
}

impl Default for FundRequestCodec {
    fn default() -> Self {
        Self::new(UriConfig::default())
    }
}

impl<V, A> FundRequestCodec<V, A> {
    pub const fn with_collaborators(config: UriConfig, validator: V, alias_detector: A) -> Self {
        Self { config, validator, alias_detector }
    }

    pub const fn config(&self) -> &UriConfig {
        &self.config
    }
}

pub(crate) static DEFAULT_CODEC: Lazy<FundRequestCodec> = Lazy::new(FundRequestCodec::default);

/// Encodes with the default `monero:` configuration
///
/// # Errors
/// Returns `FundRequestError::MissingAddress` if the request has no address
pub fn encode(request: &FundRequest, flavor: UriFlavor) -> Result<String> {
    DEFAULT_CODEC.encode(request, flavor)
}

/// Decodes with the default `monero:` configuration and collaborators
///
/// # Errors
/// Returns a `FundRequestError` classifying why the input is not a fund request
pub fn decode(input: &str, network: Network) -> Result<FundRequest> {
    DEFAULT_CODEC.decode(input, network)
}

/// RFC 3986 scheme syntax: a letter followed by letters, digits, `+`, `-` or `.`
pub(crate) fn is_uri_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
