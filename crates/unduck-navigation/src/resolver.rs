//! Bang resolution against the table

use unduck_bangs::{BangRecord, BangTable};

/// Pick the engine for a query.
///
/// The candidate token wins when the table knows it; otherwise the default
/// token is tried. Both lookups are case-insensitive. `None` means neither
/// token is in the table.
pub fn resolve<'a>(
    candidate: Option<&str>,
    default_token: &str,
    table: &'a BangTable,
) -> Option<&'a BangRecord> {
    candidate
        .and_then(|token| table.get(token))
        .or_else(|| table.get(default_token))
}
