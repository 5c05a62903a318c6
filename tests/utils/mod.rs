//! Utilities for tests.
#![allow(dead_code)]

/// Strings that are valid URIs.
const POSITIVE: &[&str] = &[
    // RFC 3986 section 1.1.2.
    "ftp://ftp.is.co.za/rfc/rfc1808.txt",
    "http://www.ietf.org/rfc/rfc2396.txt",
    "ldap://[2001:db8::7]/c=GB?objectClass?one",
    "mailto:John.Doe@example.com",
    "news:comp.infosystems.www.servers.unix",
    "tel:+1-816-555-1212",
    "telnet://192.0.2.16:80/",
    "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
    // RFC 3986 section 3.
    "foo://example.com:8042/over/there?name=ferret#nose",
    "urn:example:animal:ferret:nose",
    // RFC 3986 section 6.2.2.
    "example://a/b/c/%7Bfoo%7D",
    "eXAMPLE://a/./b/../b/%63/%7bfoo%7d",
    // RFC 3986 section 6.2.3.
    "http://example.com",
    "http://example.com/",
    "http://example.com:/",
    "http://example.com:80/",
    "http://example.com/?",
    // RFC 3986 section 6.2.4.
    "ftp://cnn.example.com&story=breaking_news@10.0.0.1/top_story.htm",
    // Empty components.
    "foo:",
    "foo:/",
    "foo://",
    "foo:///",
    "foo:////",
    "foo:?",
    "foo:#",
    "foo://@:?#",
    // Host forms.
    "http://[::]/",
    "http://[::ffff:192.0.2.1]:8080/",
    "http://[v1.fe80::a+en1]/",
    "http://999.1.1.1/",
    "http://01.1.1.1/",
    "http://1.1.1/",
    "http://%65xample.com/",
    // Ports are not range-checked.
    "http://example.com:99999999/",
];

/// Strings that are not valid URIs.
const NEGATIVE: &[&str] = &[
    // No scheme.
    "",
    ":",
    "//example.com/",
    "/a/b",
    "example.com",
    // Invalid scheme.
    "1http://example.com/",
    "+http://example.com/",
    "ht_tp://example.com/",
    // Invalid percent encoding.
    "http://host/%A",
    "http://host/%",
    "http://host/%GG",
    "http://host/?%0",
    "http://host/#%zz",
    "http://ho%st/",
    // Invalid characters.
    "http://host/a b",
    "http://host/<a>",
    "http://host/a#b#c",
    "http://host/\u{E9}",
    "http://h\u{E9}st/",
    // Invalid hosts.
    "http://[::1/",
    "http://[::1:]/",
    "http://[1::2::3]/",
    "http://[v.x]/",
    "http://[vF.]/",
    // `IPvFuture` starts with a lowercase `v` only.
    "http://[V7.x]/",
    "http://1.2.3.4abc/",
    "http://1.2.3.2555/",
    "http://a[b]/",
    // Invalid ports.
    "http://host:80a/",
    "http://host:-1/",
    "http://user@host@host/",
];

/// Returns valid URIs.
pub fn positive() -> impl Iterator<Item = &'static str> {
    POSITIVE.iter().copied()
}

/// Returns invalid URIs.
pub fn negative() -> impl Iterator<Item = &'static str> {
    NEGATIVE.iter().copied()
}
