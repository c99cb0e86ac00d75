use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::PARAM_PREFIX;

/// A payment intent: where to send and, optionally, how much and why
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct FundRequest {
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    /// Kept as text, never parsed as a number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_ccy_symbol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Decoded query parameters that are not one of the fields above, `tx_` stripped.
    /// Never written by encode.
    #[serde(default, flatten, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
}

/// The optional fields of a request as they appear on the wire.
///
/// Declaration order is the order parameters are encoded in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum RequestParam {
    Amount,
    // also accepts the field name, so no decoded key can shadow a field in `extra`
    #[strum(to_string = "amount_ccy", serialize = "amount_ccy_symbol")]
    AmountCcy,
    Description,
    PaymentId,
    Message,
}

impl RequestParam {
    /// Name of the query parameter, `tx_amount_ccy`
    pub fn wire_name(self) -> String {
        format!("{PARAM_PREFIX}{self}")
    }
}

impl FundRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into(), ..Default::default() }
    }

    #[must_use]
    pub fn with_param(mut self, param: RequestParam, value: impl Into<String>) -> Self {
        *self.param_mut(param) = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_amount(self, amount: impl Into<String>) -> Self {
        self.with_param(RequestParam::Amount, amount)
    }

    #[must_use]
    pub fn with_amount_ccy_symbol(self, symbol: impl Into<String>) -> Self {
        self.with_param(RequestParam::AmountCcy, symbol)
    }

    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_param(RequestParam::Description, description)
    }

    #[must_use]
    pub fn with_payment_id(self, payment_id: impl Into<String>) -> Self {
        self.with_param(RequestParam::PaymentId, payment_id)
    }

    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_param(RequestParam::Message, message)
    }

    pub fn param(&self, param: RequestParam) -> Option<&str> {
        match param {
            RequestParam::Amount => self.amount.as_deref(),
            RequestParam::AmountCcy => self.amount_ccy_symbol.as_deref(),
            RequestParam::Description => self.description.as_deref(),
            RequestParam::PaymentId => self.payment_id.as_deref(),
            RequestParam::Message => self.message.as_deref(),
        }
    }

    fn param_mut(&mut self, param: RequestParam) -> &mut Option<String> {
        match param {
            RequestParam::Amount => &mut self.amount,
            RequestParam::AmountCcy => &mut self.amount_ccy_symbol,
            RequestParam::Description => &mut self.description,
            RequestParam::PaymentId => &mut self.payment_id,
            RequestParam::Message => &mut self.message,
        }
    }

    /// Assigns one decoded query pair.
    ///
    /// The `tx_` prefix is stripped from the key, then the value goes to the field of that
    /// name (`address` included) or into `extra`. A repeated key overwrites the earlier value.
    pub fn set_query_pair(&mut self, key: &str, value: String) {
        let key = key.strip_prefix(PARAM_PREFIX).unwrap_or(key);
        if key == "address" {
            self.address = value;
            return;
        }

        match key.parse::<RequestParam>() {
            Ok(param) => *self.param_mut(param) = Some(value),
            Err(_) => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}
