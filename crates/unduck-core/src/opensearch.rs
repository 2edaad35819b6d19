//! OpenSearch descriptor, so browsers can add the service as a search engine

/// Escape text for HTML or XML content and attribute values.
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the OpenSearch 1.1 description document for `public_url`.
pub fn opensearch_descriptor(public_url: &str) -> String {
    let base = escape_markup(public_url.trim_end_matches('/'));

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<OpenSearchDescription xmlns="http://a9.com/-/spec/opensearch/1.1/">
    <ShortName>Unduck</ShortName>
    <Description>DuckDuckGo's bang redirects are too slow.</Description>
    <InputEncoding>UTF-8</InputEncoding>
    <Url type="text/html" template="{base}?q={{searchTerms}}"/>
    <Image height="16" width="16">{base}/icon.ico</Image>
</OpenSearchDescription>
"#
    )
}
