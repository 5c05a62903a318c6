//! Functions for common string operations.

/// Returns the index of the first occurrence of the byte.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
pub(crate) fn find_byte(s: &str, b: u8) -> Option<usize> {
    memchr::memchr(b, s.as_bytes())
}

/// Returns the index of the first occurrence of the byte.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
pub(crate) fn find_byte(s: &str, b: u8) -> Option<usize> {
    s.bytes().position(|c| c == b)
}

/// Returns `true` if the string contains the byte.
#[inline]
#[must_use]
pub(crate) fn contains_byte(s: &str, b: u8) -> bool {
    find_byte(s, b).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(find_byte("a:b:c", b':'), Some(1));
        assert_eq!(find_byte("abc", b':'), None);
        assert_eq!(find_byte("", b':'), None);
        assert!(contains_byte("\u{E9}:", b':'));
    }
}
