//! Validators.
//!
//! Every validator requires the rule to match the whole input.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

use nom::combinator::all_consuming;

use crate::parser::{self, PResult};

/// URI validation error.
///
/// The only failure is "the string does not match the rule"; no position or
/// reason is reported.
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error(());

impl Error {
    /// Creates a new `Error`.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Error(())
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid URI")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl error::Error for Error {}

/// Runs the parser on the whole string and discards the output.
fn validate_with<'a, O>(rule: fn(&'a str) -> PResult<'a, O>, s: &'a str) -> Result<(), Error> {
    match all_consuming(rule)(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::new()),
    }
}

/// Validates [URI][uri].
///
/// This accepts exactly the strings [`parse`](crate::parse) accepts.
///
/// # Examples
///
/// ```
/// use uri_grammar::validate;
///
/// assert!(validate::uri("http://example.com/").is_ok());
/// assert!(validate::uri("mailto:foo@bar.com").is_ok());
/// assert!(validate::uri("//example.com/").is_err());
/// assert!(validate::uri("http://host/%A").is_err());
/// ```
///
/// [uri]: https://tools.ietf.org/html/rfc3986#section-3
pub fn uri(s: &str) -> Result<(), Error> {
    crate::parse(s).map(|_| ())
}

/// Validates [scheme][scheme].
///
/// [scheme]: https://tools.ietf.org/html/rfc3986#section-3.1
pub fn scheme(s: &str) -> Result<(), Error> {
    validate_with(parser::scheme, s)
}

/// Validates [host][host].
///
/// Note that the alternatives are tried in order and the first match is
/// committed: `1.2.3.4x` is rejected although `1.2.3.4x` alone would be a
/// valid registered name, because `1.2.3.4` is taken as an IPv4 address.
///
/// [host]: https://tools.ietf.org/html/rfc3986#section-3.2.2
pub fn host(s: &str) -> Result<(), Error> {
    validate_with(parser::host, s)
}

/// Validates `IPv4address`.
///
/// # Examples
///
/// ```
/// use uri_grammar::validate;
///
/// assert!(validate::ipv4("192.0.2.1").is_ok());
/// assert!(validate::ipv4("192.0.2.256").is_err());
/// assert!(validate::ipv4("192.0.2.01").is_err());
/// ```
pub fn ipv4(s: &str) -> Result<(), Error> {
    validate_with(parser::ipv4address, s)
}

/// Validates `IPv6address`, without brackets.
///
/// # Examples
///
/// ```
/// use uri_grammar::validate;
///
/// assert!(validate::ipv6("2001:db8::1").is_ok());
/// assert!(validate::ipv6("::ffff:192.0.2.1").is_ok());
/// assert!(validate::ipv6("[2001:db8::1]").is_err());
/// assert!(validate::ipv6("1::2::3").is_err());
/// ```
pub fn ipv6(s: &str) -> Result<(), Error> {
    validate_with(parser::ipv6address, s)
}

/// Validates [port][port].
///
/// Only the syntax is checked: any digit string, including an empty one.
///
/// [port]: https://tools.ietf.org/html/rfc3986#section-3.2.3
pub fn port(s: &str) -> Result<(), Error> {
    validate_with(parser::port, s)
}

/// Validates a [path][path] that follows a scheme without an authority.
///
/// This accepts `path-absolute`, `path-rootless` and `path-empty`.
///
/// [path]: https://tools.ietf.org/html/rfc3986#section-3.3
pub fn path(s: &str) -> Result<(), Error> {
    validate_with(parser::path, s)
}

/// Validates [`path-noscheme`][path-noscheme], a path whose first segment has no colon.
///
/// [path-noscheme]: https://tools.ietf.org/html/rfc3986#section-3.3
pub fn path_noscheme(s: &str) -> Result<(), Error> {
    validate_with(parser::path_noscheme, s)
}

/// Validates [query][query].
///
/// Note that the first `?` character in a URI is not a part of a query.
///
/// [query]: https://tools.ietf.org/html/rfc3986#section-3.4
pub fn query(s: &str) -> Result<(), Error> {
    validate_with(parser::query, s)
}

/// Validates [fragment][fragment].
///
/// Note that the first `#` character in a URI is not a part of a fragment.
/// For example, `https://example.com/#foo` has a fragment `foo`, **not** `#foo`.
///
/// [fragment]: https://tools.ietf.org/html/rfc3986#section-3.5
pub fn fragment(s: &str) -> Result<(), Error> {
    validate_with(parser::fragment, s)
}
