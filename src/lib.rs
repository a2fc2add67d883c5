//! # abnf-validate — Byte-oriented ABNF rule validation
//!
//! A validation engine for ABNF rules (RFC 5234) extended with RFC 7405
//! case-sensitivity markers on string literals: `%s"..."` is case-sensitive,
//! `%i"..."` and bare `"..."` are case-insensitive (ASCII letters only).
//! Given a rule tree of terminals, sequences, and alternations, [`validate`]
//! decides whether a byte sequence is accepted and reports a typed,
//! offset-carrying rejection when it is not.
//!
//! ## Grammar model
//!
//! - **Terminal**: byte (`%x41`), inclusive byte range (`%x41-5A`), or
//!   string literal with a case-sensitivity flag
//! - **Sequence**: ordered concatenation; every child must match
//!   consecutively
//! - **Alternation**: ordered choice; the first matching child wins
//! - **Rule**: a named element, the unit a caller validates against
//!
//! Textual ABNF parsing, repetition operators (`*`, `1*`, `[...]`), and the
//! core-rule library (DIGIT, ALPHA, ...) live outside this crate; they feed
//! it rule trees through the same constructors.
//!
//! ## Usage
//!
//! ```
//! use abnf_validate::{validate, Element, Rule, Terminal};
//!
//! // request-start = %s"GET" SP %i"http"
//! let rule = Rule::new(
//!     "request-start",
//!     Element::sequence(vec![
//!         Element::terminal(Terminal::case_sensitive_string("GET")),
//!         Element::terminal(Terminal::byte(0x20)),
//!         Element::terminal(Terminal::case_insensitive_string("http")),
//!     ]),
//! );
//!
//! assert!(validate(b"GET http", &rule).is_ok());
//! assert!(validate(b"GET HTTP", &rule).is_ok());
//! assert!(validate(b"get http", &rule).is_err()); // %s"GET" is exact
//! ```
//!
//! Validation is a pure function of `(bytes, rule)`: no I/O, no shared
//! state, safe to run concurrently over one immutable rule tree.

pub mod ast;
pub mod validator;

pub use ast::{Element, Rule, Terminal};
pub use validator::{validate, ValidationError};
