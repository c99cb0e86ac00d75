use moneta_util::encode_uri_component;
use strum::IntoEnumIterator as _;
use tracing::trace;

use super::{Error, FundRequestCodec, Result, UriFlavor};
use crate::{
    config::UriConfig,
    fund_request::{FundRequest, RequestParam},
};

/// The query parameters of an encoded request, in the order they are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams<'a>(Vec<(RequestParam, &'a str)>);

impl<'a> QueryParams<'a> {
    /// Collects the parameters a request encodes to.
    ///
    /// Empty values are left out, so is a currency symbol equal to the canonical one.
    pub fn from_request(request: &'a FundRequest, config: &UriConfig) -> Self {
        let mut params = Self::default();

        for param in RequestParam::iter() {
            let Some(value) = request.param(param) else { continue };

            if param == RequestParam::AmountCcy && config.is_canonical_currency(value) {
                continue;
            }

            params.push(param, value);
        }

        params
    }

    /// Adds a parameter, an empty value is skipped
    pub fn push(&mut self, param: RequestParam, value: &'a str) {
        if !value.is_empty() {
            self.0.push((param, value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequestParam, &'a str)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `?name=value&name=value`, nothing at all when there are no parameters
    pub fn write_to(&self, uri: &mut String) {
        for (index, (param, value)) in self.iter().enumerate() {
            uri.push(if index == 0 { '?' } else { '&' });
            uri.push_str(&param.wire_name());
            uri.push('=');
            uri.push_str(&encode_uri_component(value));
        }
    }
}

impl<V, A> FundRequestCodec<V, A> {
    /// # Errors
    /// Returns `FundRequestError::MissingAddress` if the request has no address
    pub fn encode(&self, request: &FundRequest, flavor: UriFlavor) -> Result<String> {
        if request.address.is_empty() {
            return Err(Error::MissingAddress);
        }

        let mut uri = String::from(self.config.scheme_prefix());
        match flavor {
            UriFlavor::AddressAsFirstPathComponent => {}
            UriFlavor::AddressAsAuthority => uri.push_str("//"),
        }

        // addresses are scheme safe, written as is
        uri.push_str(&request.address);

        QueryParams::from_request(request, &self.config).write_to(&mut uri);

        trace!(%flavor, "encoded fund request: {uri}");
        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ADDRESS: &str = "44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A";

    fn encode(request: &FundRequest, flavor: UriFlavor) -> Result<String> {
        <FundRequestCodec>::default().encode(request, flavor)
    }

    #[test]
    fn test_encode_address_only() {
        let request = FundRequest::new(ADDRESS);

        assert_eq!(
            encode(&request, UriFlavor::AddressAsFirstPathComponent).unwrap(),
            format!("monero:{ADDRESS}")
        );
        assert_eq!(
            encode(&request, UriFlavor::AddressAsAuthority).unwrap(),
            format!("monero://{ADDRESS}")
        );
    }

    #[test]
    fn test_encode_all_params_in_fixed_order() {
        // set in reverse to show insertion order does not matter
        let request = FundRequest::new(ADDRESS)
            .with_message("thanks!")
            .with_payment_id("b8f2a1c3d4e5f607")
            .with_description("Coffee & cake")
            .with_amount_ccy_symbol("USD")
            .with_amount("1.5");

        let uri = encode(&request, UriFlavor::AddressAsFirstPathComponent).unwrap();
        assert_eq!(
            uri,
            format!(
                "monero:{ADDRESS}?tx_amount=1.5&tx_amount_ccy=USD&tx_description=Coffee%20%26%20cake\
                 &tx_payment_id=b8f2a1c3d4e5f607&tx_message=thanks!"
            )
        );
    }

    #[test]
    fn test_encode_first_present_param_gets_question_mark() {
        let request = FundRequest::new(ADDRESS).with_message("hi there");
        let uri = encode(&request, UriFlavor::AddressAsAuthority).unwrap();
        assert_eq!(uri, format!("monero://{ADDRESS}?tx_message=hi%20there"));
    }

    #[test]
    fn test_encode_elides_canonical_currency() {
        for symbol in ["XMR", "xmr", "Xmr"] {
            let request = FundRequest::new(ADDRESS).with_amount("3").with_amount_ccy_symbol(symbol);
            let uri = encode(&request, UriFlavor::AddressAsFirstPathComponent).unwrap();
            assert_eq!(uri, format!("monero:{ADDRESS}?tx_amount=3"));
        }
    }

    #[test]
    fn test_encode_skips_empty_values() {
        let request = FundRequest::new(ADDRESS)
            .with_amount("")
            .with_description("")
            .with_payment_id("abc");

        let uri = encode(&request, UriFlavor::AddressAsFirstPathComponent).unwrap();
        assert_eq!(uri, format!("monero:{ADDRESS}?tx_payment_id=abc"));
    }

    #[test]
    fn test_encode_missing_address() {
        let request = FundRequest::new("").with_amount("1");
        assert_eq!(
            encode(&request, UriFlavor::AddressAsFirstPathComponent),
            Err(Error::MissingAddress)
        );
    }

    #[test]
    fn test_encode_with_custom_scheme() {
        let config = UriConfig::new("wownero:", "WOW").unwrap();
        let codec = FundRequestCodec::new(config);

        let request = FundRequest::new("WW4Abc").with_amount("10").with_amount_ccy_symbol("wow");
        let uri = codec.encode(&request, UriFlavor::AddressAsAuthority).unwrap();
        assert_eq!(uri, "wownero://WW4Abc?tx_amount=10");

        // the monero symbol is not canonical here
        let request = request.with_amount_ccy_symbol("XMR");
        let uri = codec.encode(&request, UriFlavor::AddressAsAuthority).unwrap();
        assert_eq!(uri, "wownero://WW4Abc?tx_amount=10&tx_amount_ccy=XMR");
    }

    #[test]
    fn test_query_params_builder() {
        let request = FundRequest::new(ADDRESS).with_amount("1").with_amount_ccy_symbol("XMR");
        let params = QueryParams::from_request(&request, &UriConfig::default());

        assert_eq!(params.len(), 1);
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![(RequestParam::Amount, "1")]);

        let mut uri = String::new();
        QueryParams::default().write_to(&mut uri);
        assert!(uri.is_empty());
    }
}
