//! Grammar rules of RFC 3986.

mod authority;
mod path;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n},
    character::complete::{char as char_, satisfy},
    combinator::{map, opt, recognize},
    multi::{fold_many_m_n, many0_count},
    sequence::{pair, preceded, terminated, tuple},
    IResult, Parser,
};

use crate::components::{AuthorityParts, ParsedUriParts};
use crate::parser::char::{is_pchar_single, is_scheme_continue};

pub(crate) use self::authority::{host, ipv4address, ipv6address, port};
pub(crate) use self::path::{path, path_noscheme};

use self::authority::authority;
use self::path::{path_abempty, path_absolute, path_empty, path_rootless};

/// Result of a grammar rule.
///
/// A mismatch carries no position or reason; callers only try the next
/// alternative.
pub(crate) type PResult<'a, O> = IResult<&'a str, O, ()>;

/// Lifts a byte predicate to characters.
///
/// Non-ASCII characters never match.
fn ascii<P>(pred: P) -> impl Fn(char) -> bool
where
    P: Fn(u8) -> bool,
{
    move |c: char| c.is_ascii() && pred(c as u8)
}

/// `one_of` with predicate (not characters list), returning the matched span.
fn one_is<'a, P>(pred: P) -> impl FnMut(&'a str) -> PResult<'a, &'a str>
where
    P: Fn(u8) -> bool,
{
    recognize(satisfy(ascii(pred)))
}

/// Repeats the embedded parser `n` times or until it fails and returns the number of successful
/// iterations.
///
/// Fails if the embedded parser does not succeed at least `m` times.
fn many_m_n_count<'a, O, F>(m: usize, n: usize, f: F) -> impl FnMut(&'a str) -> PResult<'a, usize>
where
    F: Parser<&'a str, O, ()>,
{
    fold_many_m_n(m, n, f, || 0, |count, _| count + 1)
}

/// Parses `pct-encoded` rule.
///
/// Exactly two hex digits must follow the `%`.
fn pct_encoded(i: &str) -> PResult<'_, &str> {
    recognize(pair(
        char_('%'),
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    ))(i)
}

/// Parses `pchar` rule.
fn pchar(i: &str) -> PResult<'_, &str> {
    alt((one_is(is_pchar_single), pct_encoded))(i)
}

/// Parses `scheme` rule.
pub(crate) fn scheme(i: &str) -> PResult<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(ascii(is_scheme_continue)),
    ))(i)
}

/// Parses `query` rule.
pub(crate) fn query(i: &str) -> PResult<'_, &str> {
    recognize(many0_count(alt((
        pchar,
        one_is(|c| c == b'/' || c == b'?'),
    ))))(i)
}

/// Parses `fragment` rule.
///
/// Same character set as `query`.
pub(crate) fn fragment(i: &str) -> PResult<'_, &str> {
    query(i)
}

/// Parses `hier-part` rule and returns the authority (if any) and the path.
///
/// `"//" authority path-abempty` is tried first; once `//` is seen the
/// authority branch always succeeds, because every part of `authority` may
/// be empty.
fn hier_part(i: &str) -> PResult<'_, (Option<AuthorityParts<'_>>, &str)> {
    // > When authority is not present, the path cannot begin with two slash
    // > characters ("//").
    // >
    // > --- [RFC 3986 section 3](https://tools.ietf.org/html/rfc3986#section-3)
    alt((
        map(
            preceded(tag("//"), pair(authority, path_abempty)),
            |(authority, path)| (Some(authority), path),
        ),
        map(alt((path_absolute, path_rootless, path_empty)), |path| {
            (None, path)
        }),
    ))(i)
}

/// Parses `URI` rule and returns the components.
///
/// The match may stop before the end of the input; callers decide whether
/// the whole input must be consumed.
pub(crate) fn uri(i: &str) -> PResult<'_, ParsedUriParts<'_>> {
    map(
        tuple((
            terminated(scheme, char_(':')),
            hier_part,
            opt(preceded(char_('?'), query)),
            opt(preceded(char_('#'), fragment)),
        )),
        |(scheme, (authority, path), query, fragment)| ParsedUriParts {
            scheme,
            authority,
            path,
            query,
            fragment,
        },
    )(i)
}
