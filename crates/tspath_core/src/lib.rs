//! Public library API for time-series path expressions and page encryption.

/// Symmetric encryptors applied to serialized pages.
pub mod encrypt;
/// Path lexing, two-pass parsing, node extraction, and re-escaping.
pub mod path;
