//! Bang token extraction
//!
//! Two shapes are recognised, each matched independently over the whole
//! query:
//! - prefix `!gh rust` (the `!` may appear anywhere, first occurrence wins)
//! - suffix `rust gh!`
//!
//! A prefix match always takes priority. Only the chosen match is removed
//! from the query, so `!gh foo w!` keeps `foo w!` as the search text.
//!
//! Whitespace is the set browsers use for regex `\s` and `String.trim()`:
//! it includes U+FEFF but not U+0085, unlike Unicode `White_Space`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex class body matching [`is_query_whitespace`].
const QUERY_SPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `!token` plus any whitespace after it.
static PREFIX_BANG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"!([^{QUERY_SPACE}]+)[{QUERY_SPACE}]*")).expect("prefix bang pattern")
});

/// `token!` plus any whitespace before it.
static SUFFIX_BANG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"[{QUERY_SPACE}]*([^{QUERY_SPACE}]+)!")).expect("suffix bang pattern")
});

pub(crate) fn is_query_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub(crate) fn trim_query(query: &str) -> &str {
    query.trim_matches(is_query_whitespace)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BangForm {
    Prefix,
    Suffix,
}

/// A query split into its bang (if any) and the remaining search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Lowercased token, without the `!`
    pub bang: Option<String>,
    pub form: Option<BangForm>,
    /// Search text with the bang removed, trimmed
    pub clean_query: String,
}

/// Split `query` into a candidate bang token and the clean query.
pub fn extract_bang(query: &str) -> ParsedQuery {
    let query = trim_query(query);

    let prefix = PREFIX_BANG.captures(query);
    let suffix = SUFFIX_BANG.captures(query);

    let (captures, form) = match (prefix, suffix) {
        (Some(captures), _) => (captures, BangForm::Prefix),
        (None, Some(captures)) => (captures, BangForm::Suffix),
        (None, None) => {
            return ParsedQuery {
                bang: None,
                form: None,
                clean_query: query.to_string(),
            }
        }
    };

    let whole = captures.get(0).map_or(0..0, |m| m.range());
    let bang = captures.get(1).map(|m| m.as_str().to_lowercase());

    let mut clean_query = String::with_capacity(query.len());
    clean_query.push_str(&query[..whole.start]);
    clean_query.push_str(&query[whole.end..]);

    ParsedQuery {
        bang,
        form: Some(form),
        clean_query: trim_query(&clean_query).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_bang() {
        let parsed = extract_bang("!gh t3dotgg/unduck");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.form, Some(BangForm::Prefix));
        assert_eq!(parsed.clean_query, "t3dotgg/unduck");
    }

    #[test]
    fn test_prefix_bang_anywhere() {
        let parsed = extract_bang("rust borrow checker !W");
        assert_eq!(parsed.bang.as_deref(), Some("w"));
        assert_eq!(parsed.clean_query, "rust borrow checker");

        let parsed = extract_bang("tokio !docs spawn");
        assert_eq!(parsed.bang.as_deref(), Some("docs"));
        assert_eq!(parsed.clean_query, "tokio spawn");
    }

    #[test]
    fn test_suffix_bang() {
        let parsed = extract_bang("hello world yt!");
        assert_eq!(parsed.bang.as_deref(), Some("yt"));
        assert_eq!(parsed.form, Some(BangForm::Suffix));
        assert_eq!(parsed.clean_query, "hello world");

        let parsed = extract_bang("GH! serde");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.clean_query, "serde");
    }

    #[test]
    fn test_bang_only() {
        let parsed = extract_bang("!gh");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.clean_query, "");

        let parsed = extract_bang("gh!");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.clean_query, "");
    }

    #[test]
    fn test_no_bang() {
        let parsed = extract_bang("  plain text  ");
        assert_eq!(parsed.bang, None);
        assert_eq!(parsed.form, None);
        assert_eq!(parsed.clean_query, "plain text");

        // A lone `!` is not a bang in either position
        let parsed = extract_bang("wow !");
        assert_eq!(parsed.bang, None);
        assert_eq!(parsed.clean_query, "wow !");
    }

    #[test]
    fn test_prefix_wins_and_suffix_shape_is_kept() {
        let parsed = extract_bang("!gh foo w!");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.form, Some(BangForm::Prefix));
        assert_eq!(parsed.clean_query, "foo w!");
    }

    #[test]
    fn test_prefix_wins_even_when_suffix_comes_first() {
        let parsed = extract_bang("yt! cats !w");
        assert_eq!(parsed.bang.as_deref(), Some("w"));
        assert_eq!(parsed.clean_query, "yt! cats");
    }

    #[test]
    fn test_only_first_prefix_removed() {
        let parsed = extract_bang("!gh !w rust");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.clean_query, "!w rust");
    }

    #[test]
    fn test_token_runs_to_whitespace() {
        let parsed = extract_bang("!gh!x query");
        assert_eq!(parsed.bang.as_deref(), Some("gh!x"));
        assert_eq!(parsed.clean_query, "query");
    }

    #[test]
    fn test_unicode_query() {
        let parsed = extract_bang("!w Zürich café");
        assert_eq!(parsed.bang.as_deref(), Some("w"));
        assert_eq!(parsed.clean_query, "Zürich café");
    }

    #[test]
    fn test_next_line_is_part_of_token() {
        let parsed = extract_bang("!gh\u{0085}foo");
        assert_eq!(parsed.bang.as_deref(), Some("gh\u{0085}foo"));
        assert_eq!(parsed.clean_query, "");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        let parsed = extract_bang("\u{FEFF}plain\u{FEFF}");
        assert_eq!(parsed.bang, None);
        assert_eq!(parsed.clean_query, "plain");

        let parsed = extract_bang("!gh\u{FEFF}serde");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.clean_query, "serde");
    }

    #[test]
    fn test_ideographic_space_separates_token() {
        let parsed = extract_bang("!w\u{3000}東京");
        assert_eq!(parsed.bang.as_deref(), Some("w"));
        assert_eq!(parsed.clean_query, "東京");
    }
}
