use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    uniffi::Enum,
    derive_more::Display,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Stagenet,
}

use strum::IntoEnumIterator;

#[uniffi::export]
fn network_to_string(network: Network) -> String {
    network.to_string()
}

#[uniffi::export]
fn all_networks() -> Vec<Network> {
    Network::iter().collect()
}

/// Address prefixes for a network, in the order standard, integrated, subaddress
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressPrefixes {
    pub standard: u8,
    pub integrated: u8,
    pub subaddress: u8,
}

impl AddressPrefixes {
    #[must_use]
    pub const fn contains(&self, prefix: u8) -> bool {
        prefix == self.standard || prefix == self.integrated || prefix == self.subaddress
    }
}

impl Network {
    #[must_use]
    pub const fn address_prefixes(self) -> AddressPrefixes {
        match self {
            Self::Mainnet => AddressPrefixes { standard: 18, integrated: 19, subaddress: 42 },
            Self::Testnet => AddressPrefixes { standard: 53, integrated: 54, subaddress: 63 },
            Self::Stagenet => AddressPrefixes { standard: 24, integrated: 25, subaddress: 36 },
        }
    }

    /// Finds the network an address prefix belongs to
    #[must_use]
    pub fn from_address_prefix(prefix: u8) -> Option<Self> {
        Self::iter().find(|network| network.address_prefixes().contains(prefix))
    }
}

impl From<Network> for u8 {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => 0,
            Network::Testnet => 1,
            Network::Stagenet => 2,
        }
    }
}

impl TryFrom<u8> for Network {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Network::Mainnet),
            1 => Ok(Network::Testnet),
            2 => Ok(Network::Stagenet),
            _ => Err(format!("Unknown network: {value}")),
        }
    }
}

impl TryFrom<&str> for Network {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "mainnet" | "Mainnet" | "monero" | "Monero" => Ok(Network::Mainnet),
            "testnet" | "Testnet" => Ok(Network::Testnet),
            "stagenet" | "Stagenet" => Ok(Network::Stagenet),
            _ => Err(format!("Unknown network: {value}")),
        }
    }
}
