//! Parser.
//!
//! Each grammar rule of RFC 3986 is a `nom` parser from the remaining input
//! to the rest of the input and its output.

pub(crate) mod char;
mod details;
pub(crate) mod str;

pub(crate) use self::details::{
    fragment, host, ipv4address, ipv6address, path, path_noscheme, port, query, scheme, uri,
    PResult,
};
