//! OpenAlias names are human readable aliases (`donate.getmonero.org`) that resolve to an
//! address through a DNS lookup. Recognition here is a heuristic only, nothing is resolved.

/// Recognizes strings that look like an alias for an address rather than an address
pub trait DetectAlias {
    fn is_likely_alias(&self, input: &str) -> bool;
}

impl<F> DetectAlias for F
where
    F: Fn(&str) -> bool,
{
    fn is_likely_alias(&self, input: &str) -> bool {
        self(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAliasDetector;

impl DetectAlias for OpenAliasDetector {
    fn is_likely_alias(&self, input: &str) -> bool {
        if input.chars().any(char::is_whitespace) {
            return false;
        }

        // addresses never contain a period, domains always do
        input.split_once('.').is_some_and(|(name, domain)| !name.is_empty() && !domain.is_empty())
    }
}

#[uniffi::export]
#[allow(clippy::needless_pass_by_value)] // uniffi requires owned String
fn is_likely_open_alias(input: String) -> bool {
    OpenAliasDetector.is_likely_alias(&input)
}
