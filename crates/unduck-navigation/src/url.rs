//! Redirect URL construction

use unduck_bangs::{BangRecord, QUERY_PLACEHOLDER};

/// Characters `encodeURIComponent`-style encoding leaves alone on top of
/// the RFC 3986 unreserved set that `urlencoding` already keeps.
const KEPT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// Percent-encode a query as a URI component, keeping `/` literal so that
/// paths such as `owner/repo` survive templates like `https://github.com/{{{s}}}`.
pub fn encode_query_component(query: &str) -> String {
    let mut encoded = urlencoding::encode(query).into_owned();
    for (escaped, mark) in KEPT_MARKS {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, mark);
        }
    }
    encoded.replace("%2F", "/")
}

/// Build the redirect target for `record`.
///
/// An empty query goes to the engine's home (`https://{domain}`). `None`
/// when the template has no placeholder to fill.
pub fn build(record: &BangRecord, clean_query: &str) -> Option<String> {
    if clean_query.is_empty() {
        return Some(format!("https://{}", record.domain));
    }

    if !record.has_placeholder() {
        tracing::debug!(bang = %record.token, "URL template has no placeholder");
        return None;
    }

    let encoded = encode_query_component(clean_query);
    Some(record.url_template.replacen(QUERY_PLACEHOLDER, &encoded, 1))
}
