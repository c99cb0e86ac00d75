use moneta_types::{DetectAlias, Network, ValidateAddress};
use moneta_util::ResultExt as _;
use tracing::debug;
use url::Url;

use super::{Error, FundRequestCodec, Result};
use crate::fund_request::FundRequest;

impl<V, A> FundRequestCodec<V, A>
where
    V: ValidateAddress,
    A: DetectAlias,
{
    /// Decodes a full URI, a bare address or an OpenAlias name.
    ///
    /// `network` is only used to validate bare addresses, addresses inside a URI are
    /// returned as they are.
    ///
    /// # Errors
    /// Returns a `FundRequestError` classifying why the input is not a fund request
    pub fn decode(&self, input: &str, network: Network) -> Result<FundRequest> {
        let input = input.trim();

        if input.starts_with(self.config.scheme_prefix()) {
            self.decode_uri(input)
        } else {
            self.decode_bare(input, network)
        }
    }

    fn decode_uri(&self, input: &str) -> Result<FundRequest> {
        let url = Url::parse(input)
            .inspect_err(|error| debug!("unable to parse request uri: {error}"))
            .map_err_str(Error::UnparsableUri)?;

        if url.scheme() != self.config.scheme() {
            return Err(Error::WrongScheme {
                expected: self.config.scheme_prefix().to_string(),
                found: format!("{}:", url.scheme()),
            });
        }

        let mut request = FundRequest::new(address_token(&url));
        for (key, value) in url.query_pairs() {
            request.set_query_pair(&key, value.into_owned());
        }

        // checked last, an `address` query pair can replace the token
        if request.address.is_empty() {
            return Err(Error::MissingAddress);
        }

        Ok(request)
    }
}

/// `scheme:ADDRESS` parses with the address as the path, `scheme://ADDRESS` with an empty
/// path and the address as the host
fn address_token(url: &Url) -> String {
    let token = match (url.path(), url.host_str(), url.port()) {
        ("", Some(host), Some(port)) => format!("{host}:{port}"),
        ("", Some(host), None) => host.to_string(),
        (path, _, _) => path.to_string(),
    };

    match token.strip_prefix("//") {
        Some(address) => address.to_string(),
        None => token,
    }
}
