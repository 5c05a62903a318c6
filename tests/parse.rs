//! Parse and validate.

use uri_grammar::validate;

mod utils;

#[test]
fn uri() {
    for s in utils::positive() {
        assert!(uri_grammar::parse(s).is_ok(), "{:?}", s);
        assert!(validate::uri(s).is_ok(), "{:?}", s);
    }
}

#[test]
fn not_uri() {
    for s in utils::negative() {
        assert!(uri_grammar::parse(s).is_err(), "{:?}", s);
        assert!(validate::uri(s).is_err(), "{:?}", s);
    }
}

#[test]
fn valid_prefix_with_trailing_garbage() {
    for s in utils::positive() {
        for garbage in [" ", "<", "%", "%4", "\u{E9}", "#a#"] {
            let input = format!("{}{}", s, garbage);
            assert!(uri_grammar::parse(&input).is_err(), "{:?}", input);
        }
    }
}

#[test]
fn display_is_lossless() {
    for s in utils::positive() {
        let parts = uri_grammar::parse(s).expect("should be valid");
        assert_eq!(parts.to_string(), s);
    }
}
