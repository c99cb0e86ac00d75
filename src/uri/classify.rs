//! Input without the configured scheme is matched against a fixed list of shapes, in order.
//! The first shape that recognizes the input decides the outcome.

use memchr::memchr;
use moneta_types::{DetectAlias, Network, ValidateAddress};
use strum::IntoEnumIterator as _;
use tracing::debug;

use super::{Error, FundRequestCodec, Result, is_uri_scheme};
use crate::fund_request::FundRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub(crate) enum InputShape {
    /// a query string with no scheme, usually a partially typed or pasted uri
    QueryWithoutScheme,
    OpenAlias,
    Address,
    /// a uri for some other scheme, `bitcoin:1Abc..`
    ForeignUri,
}

impl InputShape {
    /// Returns `None` when the input is not of this shape
    fn classify<V, A>(
        self,
        codec: &FundRequestCodec<V, A>,
        input: &str,
        network: Network,
    ) -> Option<Result<FundRequest>>
    where
        V: ValidateAddress,
        A: DetectAlias,
    {
        match self {
            Self::QueryWithoutScheme => {
                memchr(b'?', input.as_bytes()).map(|_| Err(Error::MalformedBareInput))
            }

            // aliases are resolved later, so they skip address validation
            Self::OpenAlias => {
                codec.alias_detector.is_likely_alias(input).then(|| Ok(FundRequest::new(input)))
            }

            Self::Address => match codec.validator.validate_address(input, network) {
                Ok(()) => Some(Ok(FundRequest::new(input))),
                Err(error) => {
                    debug!("not a {network} address: {error}");
                    None
                }
            },

            // `MONERO:` is our own scheme in the wrong case, not some other uri
            Self::ForeignUri => foreign_scheme(input)
                .filter(|scheme| !scheme.eq_ignore_ascii_case(codec.config.scheme()))
                .map(|scheme| {
                    Err(Error::WrongScheme {
                        expected: codec.config.scheme_prefix().to_string(),
                        found: format!("{scheme}:"),
                    })
                }),
        }
    }
}

impl<V, A> FundRequestCodec<V, A>
where
    V: ValidateAddress,
    A: DetectAlias,
{
    pub(super) fn decode_bare(&self, input: &str, network: Network) -> Result<FundRequest> {
        InputShape::iter()
            .find_map(|shape| {
                let result = shape.classify(self, input, network)?;
                debug!(%shape, ok = result.is_ok(), "classified input");
                Some(result)
            })
            .unwrap_or(Err(Error::UnrecognizedAddress))
    }
}

fn foreign_scheme(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once(':')?;
    is_uri_scheme(scheme).then_some(scheme)
}
