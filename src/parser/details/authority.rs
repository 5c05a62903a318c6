//! Parsers for `authority` and its host forms.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1, take_while_m_n},
    character::complete::{char as char_, satisfy},
    combinator::{consumed, map, not, opt, recognize, verify},
    multi::many0_count,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::components::{AuthorityParts, HostKind, IpLiteralKind};
use crate::parser::char::{is_sub_delim, is_unreserved};

use super::{ascii, many_m_n_count, one_is, pct_encoded, PResult};

/// Parses `userinfo` rule.
fn userinfo(i: &str) -> PResult<'_, &str> {
    recognize(many0_count(alt((
        one_is(|c| is_unreserved(c) || is_sub_delim(c) || c == b':'),
        pct_encoded,
    ))))(i)
}

/// Parses `port` rule.
///
/// Any digit string is accepted, including an empty one.
pub(crate) fn port(i: &str) -> PResult<'_, &str> {
    take_while(|c: char| c.is_ascii_digit())(i)
}

/// Parses `authority` rule.
pub(super) fn authority(i: &str) -> PResult<'_, AuthorityParts<'_>> {
    map(
        tuple((
            opt(terminated(userinfo, char_('@'))),
            host,
            opt(preceded(char_(':'), port)),
        )),
        |(user_info, (host, host_kind), port)| AuthorityParts {
            user_info,
            host,
            host_kind,
            port,
        },
    )(i)
}

/// Parses `host` rule and returns the host with the alternative that matched.
///
/// The alternatives are tried in the order `IP-literal`, `IPv4address`,
/// `reg-name` and the first success is committed.
pub(crate) fn host(i: &str) -> PResult<'_, (&str, HostKind)> {
    alt((
        map(ip_literal, |(host, kind)| (host, HostKind::IpLiteral(kind))),
        map(ipv4address, |host| (host, HostKind::Ipv4)),
        map(reg_name, |host| (host, HostKind::RegName)),
    ))(i)
}

/// Parses `IP-literal` rule.
///
/// The returned span includes the brackets.
fn ip_literal(i: &str) -> PResult<'_, (&str, IpLiteralKind)> {
    consumed(delimited(
        char_('['),
        alt((
            map(ipv6address, |_| IpLiteralKind::Ipv6),
            map(ipvfuture, |_| IpLiteralKind::IpvFuture),
        )),
        char_(']'),
    ))(i)
}

/// Parses `IPvFuture` rule.
///
/// Only a lowercase `v` introduces the version.
fn ipvfuture(i: &str) -> PResult<'_, &str> {
    recognize(tuple((
        char_('v'),
        take_while1(|c: char| c.is_ascii_hexdigit()),
        char_('.'),
        take_while1(ascii(|c| is_unreserved(c) || is_sub_delim(c) || c == b':')),
    )))(i)
}

/// Parses `h16` rule.
fn h16(i: &str) -> PResult<'_, &str> {
    take_while_m_n(1, 4, |c: char| c.is_ascii_hexdigit())(i)
}

/// Parses `ls32` rule.
fn ls32(i: &str) -> PResult<'_, &str> {
    alt((recognize(tuple((h16, char_(':'), h16))), ipv4address))(i)
}

/// Parses exactly `n` repetitions of `h16 ":"`.
fn h16_colons<'a>(n: usize) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    recognize(many_m_n_count(n, n, terminated(h16, char_(':'))))
}

/// Parses `[ *max_extra( h16 ":" ) h16 ] "::"`.
///
/// A group separator is a colon not followed by another colon, so the groups
/// never eat into the `::` marker.
fn compressed_prefix<'a>(max_extra: usize) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    recognize(pair(
        opt(pair(
            h16,
            many_m_n_count(
                0,
                max_extra,
                preceded(terminated(char_(':'), not(char_(':'))), h16),
            ),
        )),
        tag("::"),
    ))
}

/// Parses `IPv6address` rule.
///
/// The alternatives are those of RFC 3986 section 3.2.2, in the same order.
pub(crate) fn ipv6address(i: &str) -> PResult<'_, &str> {
    alt((
        //                          6( h16 ":" ) ls32
        recognize(pair(h16_colons(6), ls32)),
        //                     "::" 5( h16 ":" ) ls32
        recognize(tuple((tag("::"), h16_colons(5), ls32))),
        // [               h16 ] "::" 4( h16 ":" ) ls32
        recognize(tuple((compressed_prefix(0), h16_colons(4), ls32))),
        // [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
        recognize(tuple((compressed_prefix(1), h16_colons(3), ls32))),
        // [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
        recognize(tuple((compressed_prefix(2), h16_colons(2), ls32))),
        // [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
        recognize(tuple((compressed_prefix(3), h16_colons(1), ls32))),
        // [ *4( h16 ":" ) h16 ] "::"              ls32
        recognize(pair(compressed_prefix(4), ls32)),
        // [ *5( h16 ":" ) h16 ] "::"              h16
        recognize(pair(compressed_prefix(5), h16)),
        // [ *6( h16 ":" ) h16 ] "::"
        compressed_prefix(6),
    ))(i)
}

/// Parses `dec-octet` rule.
///
/// Up to three digits are read as one unsigned value, which must fit in
/// `0..=255` and must not have a leading zero.
fn dec_octet(i: &str) -> PResult<'_, &str> {
    preceded(
        not(pair(char_('0'), satisfy(|c| c.is_ascii_digit()))),
        verify(
            take_while_m_n(1, 3, |c: char| c.is_ascii_digit()),
            |digits: &str| digits.parse::<u8>().is_ok(),
        ),
    )(i)
}

/// Parses `IPv4address` rule.
pub(crate) fn ipv4address(i: &str) -> PResult<'_, &str> {
    recognize(tuple((
        terminated(dec_octet, char_('.')),
        terminated(dec_octet, char_('.')),
        terminated(dec_octet, char_('.')),
        dec_octet,
    )))(i)
}

/// Parses `reg-name` rule.
fn reg_name(i: &str) -> PResult<'_, &str> {
    recognize(many0_count(alt((
        one_is(|c| is_unreserved(c) || is_sub_delim(c)),
        pct_encoded,
    ))))(i)
}
