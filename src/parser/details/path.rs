//! Parsers for path segments and paths.

use nom::{
    branch::alt,
    character::complete::char as char_,
    combinator::{opt, recognize},
    multi::{many0_count, many1_count},
    sequence::pair,
};

use crate::parser::char::{is_sub_delim, is_unreserved};

use super::{one_is, pchar, pct_encoded, PResult};

/// Parses `segment` rule.
fn segment(i: &str) -> PResult<'_, &str> {
    recognize(many0_count(pchar))(i)
}

/// Parses `segment-nz` rule.
fn segment_nz(i: &str) -> PResult<'_, &str> {
    recognize(many1_count(pchar))(i)
}

/// Parses `segment-nz-nc` rule.
///
/// This is `segment-nz` without colons.
fn segment_nz_nc(i: &str) -> PResult<'_, &str> {
    recognize(many1_count(alt((
        one_is(|c| is_unreserved(c) || is_sub_delim(c) || c == b'@'),
        pct_encoded,
    ))))(i)
}

/// Parses `*( "/" segment )`.
fn slash_segments(i: &str) -> PResult<'_, &str> {
    recognize(many0_count(pair(char_('/'), segment)))(i)
}

/// Parses `path-abempty` rule.
pub(super) fn path_abempty(i: &str) -> PResult<'_, &str> {
    slash_segments(i)
}

/// Parses `path-absolute` rule.
pub(super) fn path_absolute(i: &str) -> PResult<'_, &str> {
    recognize(pair(char_('/'), opt(pair(segment_nz, slash_segments))))(i)
}

/// Parses `path-noscheme` rule.
pub(crate) fn path_noscheme(i: &str) -> PResult<'_, &str> {
    recognize(pair(segment_nz_nc, slash_segments))(i)
}

/// Parses `path-rootless` rule.
pub(super) fn path_rootless(i: &str) -> PResult<'_, &str> {
    recognize(pair(segment_nz, slash_segments))(i)
}

/// Parses `path-empty` rule.
pub(super) fn path_empty(i: &str) -> PResult<'_, &str> {
    Ok((i, &i[..0]))
}

/// Parses a path that can follow `scheme ":"` without an authority.
///
/// This is `path-absolute / path-rootless / path-empty`.
pub(crate) fn path(i: &str) -> PResult<'_, &str> {
    alt((path_absolute, path_rootless, path_empty))(i)
}
