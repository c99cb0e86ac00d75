uniffi::setup_scaffolding!();

pub mod address;
pub mod network;
pub mod open_alias;

// export the types
pub use address::{AddressError, MoneroAddressValidator, ValidateAddress};
pub use network::Network;
pub use open_alias::{DetectAlias, OpenAliasDetector};
