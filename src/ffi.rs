use moneta_types::Network;

use crate::{
    fund_request::FundRequest,
    multi_format::StringOrData,
    uri::{self, FundRequestError, UriFlavor},
};

#[uniffi::export]
#[allow(clippy::needless_pass_by_value)] // uniffi requires owned values
fn encode_fund_request(request: FundRequest, flavor: UriFlavor) -> Result<String, FundRequestError> {
    uri::encode(&request, flavor)
}

#[uniffi::export]
#[allow(clippy::needless_pass_by_value)] // uniffi requires owned String
fn decode_fund_request(input: String, network: Network) -> Result<FundRequest, FundRequestError> {
    uri::decode(&input, network)
}

#[uniffi::export]
fn decode_scanned_fund_request(
    payload: Vec<u8>,
    network: Network,
) -> Result<FundRequest, FundRequestError> {
    uri::DEFAULT_CODEC.decode_scanned(StringOrData::new(payload), network)
}

#[uniffi::export]
fn uri_flavor_from_code(code: u8) -> Result<UriFlavor, FundRequestError> {
    UriFlavor::try_from(code)
}

#[uniffi::export]
fn init_logging() {
    crate::logging::init();
}
