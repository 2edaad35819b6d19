//! Reasons a query does not produce a redirect

use thiserror::Error;

/// Why resolution abstained from redirecting.
///
/// Callers that only need the URL see every variant as `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abstain {
    #[error("No query")]
    NoQuery,

    #[error("Neither the requested nor the default bang is known")]
    UnresolvedBang,

    #[error("URL template has no query placeholder")]
    MalformedTemplate,
}
