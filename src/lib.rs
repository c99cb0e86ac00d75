pub mod config;
pub mod fund_request;
pub mod logging;
pub mod multi_format;
pub mod uri;

pub(crate) mod consts;
pub(crate) mod ffi;

pub use config::{ConfigError, UriConfig};
pub use fund_request::{FundRequest, RequestParam};
pub use moneta_types::{AddressError, DetectAlias, Network, ValidateAddress};
pub use multi_format::StringOrData;
pub use uri::{FundRequestCodec, FundRequestError, UriFlavor, decode, encode};

uniffi::setup_scaffolding!();
