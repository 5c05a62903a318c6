//! Character classes of RFC 3986.
//!
//! These are the classes the parser itself uses. They are exposed for code
//! that post-processes the raw components, e.g. to decide whether a
//! percent-encoded octet is safe to decode during normalization.
//!
//! ```
//! use uri_grammar::char_class::{is_reserved, is_unreserved};
//!
//! assert!(is_unreserved(b'~'));
//! assert!(is_reserved(b'/'));
//! assert!(!is_reserved(b'%') && !is_unreserved(b'%'));
//! ```

pub use crate::parser::char::{is_gen_delim, is_reserved, is_sub_delim, is_unreserved};
