//! Unduck Navigation
//!
//! Turns a raw search query into a redirect target:
//!   1. extract an optional `!bang` / `bang!` token and clean the query
//!   2. resolve the token against the bang table, falling back to the
//!      user's default bang
//!   3. substitute the encoded query into the engine's URL template
//!
//! Everything here is pure: no I/O, no shared mutable state. The default
//! bang is passed in by the caller on every call.

mod error;
mod extract;
mod redirect;
mod resolver;
mod url;

pub use error::Abstain;
pub use extract::{extract_bang, BangForm, ParsedQuery};
pub use redirect::{explain_redirect, get_redirect_url};
pub use resolver::resolve;
pub use url::{build, encode_query_component};

/// Default bang used when the user has not chosen one.
pub const FALLBACK_BANG: &str = "g";
