//! URL component encoding.
//!
//! Deferred-deep-linking consumers expect the `link` and `afl` query
//! parameters to be encoded exactly like JavaScript's `encodeURIComponent`,
//! so the character set here must stay in sync with that function: every
//! ASCII character is escaped except alphanumerics and `- _ . ! ~ * ' ( )`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a URL query parameter value.
///
/// Non-ASCII input is UTF-8 encoded before escaping.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}
