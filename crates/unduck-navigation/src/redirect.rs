//! Query to redirect URL orchestration

use unduck_bangs::BangTable;

use crate::error::Abstain;
use crate::extract::{extract_bang, trim_query};
use crate::resolver::resolve;
use crate::url::build;

/// Resolve a raw query into a redirect URL, or the reason there is none.
pub fn explain_redirect(
    raw_query: Option<&str>,
    default_token: &str,
    table: &BangTable,
) -> Result<String, Abstain> {
    let query = raw_query.map(trim_query).unwrap_or_default();
    if query.is_empty() {
        return Err(Abstain::NoQuery);
    }

    let parsed = extract_bang(query);
    let record =
        resolve(parsed.bang.as_deref(), default_token, table).ok_or(Abstain::UnresolvedBang)?;
    let url = build(record, &parsed.clean_query).ok_or(Abstain::MalformedTemplate)?;

    tracing::debug!(
        requested = parsed.bang.as_deref().unwrap_or(""),
        resolved = %record.token,
        "Resolved bang"
    );

    Ok(url)
}

/// Resolve a raw query into a redirect URL.
///
/// `None` covers every case where the caller should show its own UI
/// instead of redirecting: no query, no resolvable bang, or a template
/// that cannot be filled.
pub fn get_redirect_url(
    raw_query: Option<&str>,
    default_token: &str,
    table: &BangTable,
) -> Option<String> {
    explain_redirect(raw_query, default_token, table).ok()
}
