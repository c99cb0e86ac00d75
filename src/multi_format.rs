use moneta_types::{DetectAlias, Network, ValidateAddress};

use crate::{
    fund_request::FundRequest,
    uri::{FundRequestCodec, FundRequestError, Result},
};

/// A scanned or pasted payload, text when it is valid UTF-8
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum StringOrData {
    String(String),
    Data(Vec<u8>),
}

impl StringOrData {
    pub fn new(data: Vec<u8>) -> Self {
        match String::from_utf8(data) {
            Ok(string) => Self::String(string),
            Err(error) => Self::Data(error.into_bytes()),
        }
    }
}

impl<V, A> FundRequestCodec<V, A>
where
    V: ValidateAddress,
    A: DetectAlias,
{
    /// Decodes a QR code or clipboard payload
    ///
    /// # Errors
    /// Returns `FundRequestError::BinaryPayload` for non text payloads, otherwise the errors of
    /// [`FundRequestCodec::decode`]
    pub fn decode_scanned(&self, payload: StringOrData, network: Network) -> Result<FundRequest> {
        match payload {
            StringOrData::String(string) => self.decode(&string, network),
            StringOrData::Data(_) => Err(FundRequestError::BinaryPayload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A";

    #[test]
    fn test_string_or_data() {
        assert_eq!(
            StringOrData::new(b"monero:4Abc".to_vec()),
            StringOrData::String("monero:4Abc".to_string())
        );
        assert_eq!(StringOrData::new(vec![0xff, 0xfe]), StringOrData::Data(vec![0xff, 0xfe]));
    }

    #[test]
    fn test_decode_scanned_text() {
        let payload = StringOrData::new(format!("monero:{ADDRESS}?tx_amount=2\n").into_bytes());
        let request = <FundRequestCodec>::default().decode_scanned(payload, Network::Mainnet).unwrap();
        assert_eq!(request, FundRequest::new(ADDRESS).with_amount("2"));
    }

    #[test]
    fn test_decode_scanned_binary() {
        let payload = StringOrData::new(vec![0x00, 0x9f, 0x92, 0x96]);
        assert_eq!(
            <FundRequestCodec>::default().decode_scanned(payload, Network::Mainnet),
            Err(FundRequestError::BinaryPayload)
        );
    }
}
