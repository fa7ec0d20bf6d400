use crate::types::{CardsError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

pub const DEFAULT_IMAGE_SEARCH_URL: &str = "https://www.bing.com/images/search";

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the image search address for `word` as `<base>?q=<word>`.
///
/// The word is percent-encoded like `encodeURIComponent`, so spaces become
/// `%20`. The result stays a string: `Url` would re-escape `'` in the query.
pub fn image_search_url(base: &str, word: &str) -> Result<String> {
    let mut url = parse_search_base(base)?;
    url.set_fragment(None);

    let separator = match url.query() {
        Some(query) if !query.is_empty() => "&",
        Some(_) => "",
        None => "?",
    };
    let encoded = utf8_percent_encode(word, URI_COMPONENT);
    Ok(format!("{}{}q={}", url.as_str(), separator, encoded))
}

/// Check that `base` is an absolute http(s) address
pub fn validate_search_base(base: &str) -> Result<()> {
    parse_search_base(base).map(|_| ())
}

fn parse_search_base(base: &str) -> Result<Url> {
    let url = Url::parse(base)
        .map_err(|e| CardsError::Config(format!("Invalid image search URL '{}': {}", base, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CardsError::Config(format!(
            "Image search URL must use http or https, got '{}'",
            other
        ))),
    }
}
