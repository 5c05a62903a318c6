//! Helpers for characters.
//!
//! URIs are ASCII-only, so all classes work on bytes.

/// Checks if the given byte matches `gen-delims` rule.
#[inline]
#[must_use]
pub fn is_gen_delim(b: u8) -> bool {
    matches!(b, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
}

/// Checks if the given byte matches `sub-delims` rule.
#[inline]
#[must_use]
pub fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given byte matches `reserved` rule.
#[inline]
#[must_use]
pub fn is_reserved(b: u8) -> bool {
    is_gen_delim(b) || is_sub_delim(b)
}

/// Checks if the given byte matches `unreserved` rule.
#[inline]
#[must_use]
pub fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given byte is a single-byte `pchar`, i.e. `pchar` without `pct-encoded`.
#[inline]
#[must_use]
pub(crate) fn is_pchar_single(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':' || b == b'@'
}

/// Checks if the given byte may continue a `scheme` after its first letter.
#[inline]
#[must_use]
pub(crate) fn is_scheme_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_is_union_of_delims() {
        for b in 0..=0x7f_u8 {
            assert_eq!(
                is_reserved(b),
                b":/?#[]@!$&'()*+,;=".contains(&b),
                "byte={:?}",
                b as char
            );
        }
    }

    #[test]
    fn unreserved_and_reserved_are_disjoint() {
        for b in 0..=0x7f_u8 {
            assert!(!(is_unreserved(b) && is_reserved(b)), "byte={:?}", b as char);
        }
    }

    #[test]
    fn percent_is_not_a_single_pchar() {
        assert!(!is_pchar_single(b'%'));
        assert!(is_pchar_single(b':'));
        assert!(is_pchar_single(b'@'));
        assert!(!is_pchar_single(b'/'));
        assert!(!is_pchar_single(b'?'));
    }
}
