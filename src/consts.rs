/// Scheme prefix written in front of every encoded request, trailing colon included
pub const DEFAULT_SCHEME_PREFIX: &str = "monero:";

/// Currency an amount is denominated in when the request carries no currency symbol
pub const DEFAULT_CURRENCY_SYMBOL: &str = "XMR";

/// Prefix of every query parameter name on the wire
pub const PARAM_PREFIX: &str = "tx_";
