use crate::Network;

/// Length of a base58 encoded standard address or subaddress
pub const STANDARD_ADDRESS_LENGTH: usize = 95;

/// Length of a base58 encoded integrated address (standard address + 8 byte payment id)
pub const INTEGRATED_ADDRESS_LENGTH: usize = 106;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

// monero base58 encodes 8 byte blocks into 11 characters
const FULL_ENCODED_BLOCK_SIZE: usize = 11;

type Error = AddressError;
type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum AddressError {
    #[error("empty address")]
    EmptyAddress,

    #[error("invalid address, contains non base58 characters")]
    InvalidAddress,

    #[error("invalid address length {0}")]
    InvalidLength(u64),

    #[error("address for wrong network, current network is {current}")]
    WrongNetwork { current: Network, valid_for: Network },

    #[error("unknown address prefix {0}")]
    UnknownPrefix(u8),
}

/// Checks whether a string is a usable address on a given network
pub trait ValidateAddress {
    /// # Errors
    /// Returns an `AddressError` describing why the address was rejected
    fn validate_address(&self, address: &str, network: Network) -> Result<()>;
}

impl<F> ValidateAddress for F
where
    F: Fn(&str, Network) -> Result<()>,
{
    fn validate_address(&self, address: &str, network: Network) -> Result<()> {
        self(address, network)
    }
}

/// Structural address check: alphabet, network prefix and length.
///
/// The keccak checksum is not verified, a typo inside the key material passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneroAddressValidator;

impl ValidateAddress for MoneroAddressValidator {
    fn validate_address(&self, address: &str, network: Network) -> Result<()> {
        if address.is_empty() {
            return Err(Error::EmptyAddress);
        }

        let prefix = decode_prefix(address)?;
        let valid_for = Network::from_address_prefix(prefix).ok_or(Error::UnknownPrefix(prefix))?;

        if valid_for != network {
            return Err(Error::WrongNetwork { current: network, valid_for });
        }

        let expected_length = if prefix == network.address_prefixes().integrated {
            INTEGRATED_ADDRESS_LENGTH
        } else {
            STANDARD_ADDRESS_LENGTH
        };

        if address.len() != expected_length {
            return Err(Error::InvalidLength(address.len() as u64));
        }

        Ok(())
    }
}

/// Decodes the first base58 block and returns its leading byte, the varint network prefix
fn decode_prefix(address: &str) -> Result<u8> {
    let bytes = address.as_bytes();
    if !bytes.iter().all(|byte| BASE58_ALPHABET.contains(byte)) {
        return Err(Error::InvalidAddress);
    }

    if bytes.len() < FULL_ENCODED_BLOCK_SIZE {
        return Err(Error::InvalidLength(bytes.len() as u64));
    }

    let block = bytes[..FULL_ENCODED_BLOCK_SIZE]
        .iter()
        .try_fold(0u128, |acc, byte| {
            let digit = BASE58_ALPHABET.iter().position(|c| c == byte)?;
            Some(acc * 58 + digit as u128)
        })
        .ok_or(Error::InvalidAddress)?;

    // 11 characters can hold more than 8 bytes, anything over is not a real block
    let block = u64::try_from(block).map_err(|_| Error::InvalidAddress)?;
    Ok(block.to_be_bytes()[0])
}

#[uniffi::export]
#[allow(clippy::needless_pass_by_value)] // uniffi requires owned String
fn address_is_valid_for_network(address: String, network: Network) -> Result<(), Error> {
    MoneroAddressValidator.validate_address(&address, network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MAINNET: &str = "44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A";
    const MAINNET_SUBADDRESS: &str = "888tNkZrPN6JsEgekjMnABU4TBzc2Dt29EPAvkRxbANsAnjyPbb3iQ1YBRk1UXcdRsiKc9dhwMVgN5S9cQUiyoogDavup3H";
    const TESTNET: &str = "9ujeXrjzf7bfeK3KZdCqnYaMwZVFuXemPU8Ubw335rj2FN1CdMiWNyFV3ksEfMFvRp9L9qum5UxkP5rN9aLcPxbH1au4WAB";
    const STAGENET: &str = "55LTR8KniP4LQGJSPtbYDacR7dz8RBFnsfAKMaMuwUNYX6aQbBcovzDPyrQF9KXF9tVU6Xk3K8no1BywnJX6GvZX8yJsXvt";

    #[test]
    fn test_valid_addresses() {
        let validator = MoneroAddressValidator;
        assert_eq!(validator.validate_address(MAINNET, Network::Mainnet), Ok(()));
        assert_eq!(validator.validate_address(MAINNET_SUBADDRESS, Network::Mainnet), Ok(()));
        assert_eq!(validator.validate_address(TESTNET, Network::Testnet), Ok(()));
        assert_eq!(validator.validate_address(STAGENET, Network::Stagenet), Ok(()));
    }

    #[test]
    fn test_integrated_address_length() {
        // first block decodes to prefix 19, mainnet integrated
        let integrated = format!("4HRwfFBRzuC{}", "1".repeat(95));
        assert_eq!(integrated.len(), INTEGRATED_ADDRESS_LENGTH);
        assert_eq!(MoneroAddressValidator.validate_address(&integrated, Network::Mainnet), Ok(()));

        let too_short = &integrated[..STANDARD_ADDRESS_LENGTH];
        assert_eq!(
            MoneroAddressValidator.validate_address(too_short, Network::Mainnet),
            Err(AddressError::InvalidLength(95))
        );
    }

    #[test]
    fn test_wrong_network() {
        let result = MoneroAddressValidator.validate_address(TESTNET, Network::Mainnet);
        assert_eq!(
            result,
            Err(AddressError::WrongNetwork { current: Network::Mainnet, valid_for: Network::Testnet })
        );
    }

    #[test]
    fn test_invalid_addresses() {
        let validator = MoneroAddressValidator;
        assert_eq!(validator.validate_address("", Network::Mainnet), Err(AddressError::EmptyAddress));
        assert_eq!(
            validator.validate_address("4Abc0OIl", Network::Mainnet),
            Err(AddressError::InvalidAddress)
        );
        assert_eq!(
            validator.validate_address("4Abc", Network::Mainnet),
            Err(AddressError::InvalidLength(4))
        );
        assert_eq!(
            validator.validate_address(&MAINNET[..94], Network::Mainnet),
            Err(AddressError::InvalidLength(94))
        );
        assert_eq!(
            validator.validate_address("bc1q0g0vn4yqyk0zjwxw0zv5pltyy9jm89vclxgsv3f", Network::Mainnet),
            Err(AddressError::InvalidAddress)
        );
    }

    #[test]
    fn test_closure_validator() {
        let reject_all = |_: &str, _: Network| -> Result<()> { Err(AddressError::InvalidAddress) };
        assert_eq!(reject_all.validate_address(MAINNET, Network::Mainnet), Err(AddressError::InvalidAddress));
    }
}
