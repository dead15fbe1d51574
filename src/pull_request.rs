//! GitHub compare links that open a pre-filled pull request form.

use std::fmt::Write;

/// Percent-encode a query component the way `encodeURIComponent` does
pub fn encode_component(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}

/// Link to GitHub's compare view for `current` against `default`, with the
/// pull request form expanded and pre-filled.
pub fn compare_url(web_url: &str, default: &str, current: &str, title: &str, body: &str) -> String {
    format!(
        "{}/compare/{}...{}?expand=1&title={}&body={}",
        web_url.trim_end_matches('/'),
        default,
        current,
        encode_component(title),
        encode_component(body)
    )
}
