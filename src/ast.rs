//! Grammar tree for ABNF rules: terminals, elements, named rules.
//!
//! A [`Rule`] is a named [`Element`]; an element is either a [`Terminal`]
//! (byte, byte range, string literal) or an ordered combination of child
//! elements (sequence, alternation). Rule trees are built here (or by an
//! external ABNF text parser producing these same types) and handed to the
//! [validator](crate::validator). Nothing in this module mutates after
//! construction, so trees can be shared freely across threads.

/// Atomic matcher operating directly on bytes.
///
/// String literals carry a case-sensitivity flag per RFC 7405: `%s"..."`
/// is case-sensitive, `%i"..."` and bare `"..."` are case-insensitive
/// (ASCII letters only; all other byte values always compare exactly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    /// Exactly one input byte equal to the value.
    Byte(u8),
    /// Exactly one input byte within the inclusive range `low..=high`.
    ByteRange { low: u8, high: u8 },
    /// A run of input bytes compared element-wise against the literal.
    Literal { bytes: Vec<u8>, case_sensitive: bool },
}

impl Terminal {
    /// Single-byte terminal (ABNF `%xNN`). A byte value has no case.
    pub fn byte(value: u8) -> Self {
        Terminal::Byte(value)
    }

    /// Inclusive byte-range terminal (ABNF `%xNN-MM`).
    ///
    /// # Panics
    ///
    /// Panics if `low > high`; an inverted range is a construction-time
    /// contract violation, not a runtime validation failure.
    pub fn byte_range(low: u8, high: u8) -> Self {
        assert!(
            low <= high,
            "byte_range: low 0x{low:02X} exceeds high 0x{high:02X}"
        );
        Terminal::ByteRange { low, high }
    }

    /// Default string literal (bare `"..."`): case-insensitive per RFC 5234.
    pub fn string(s: &str) -> Self {
        Terminal::Literal {
            bytes: s.as_bytes().to_vec(),
            case_sensitive: false,
        }
    }

    /// Explicit case-insensitive literal (RFC 7405 `%i"..."`).
    ///
    /// Equivalent to [`Terminal::string`]; RFC 7405 only adds an explicit
    /// spelling for what RFC 5234 already does by default.
    pub fn case_insensitive_string(s: &str) -> Self {
        Self::string(s)
    }

    /// Case-sensitive literal (RFC 7405 `%s"..."`): byte-exact match.
    pub fn case_sensitive_string(s: &str) -> Self {
        Terminal::Literal {
            bytes: s.as_bytes().to_vec(),
            case_sensitive: true,
        }
    }
}

/// Grammar node: a terminal, or an ordered combination of child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Terminal(Terminal),
    /// All children must match consecutively, in order. An empty sequence
    /// matches the empty span.
    Sequence(Vec<Element>),
    /// Ordered choice: children are tried strictly in declaration order and
    /// the first success wins. An empty alternation always fails.
    Alternation(Vec<Element>),
}

impl Element {
    pub fn terminal(terminal: Terminal) -> Self {
        Element::Terminal(terminal)
    }

    pub fn sequence(children: Vec<Element>) -> Self {
        Element::Sequence(children)
    }

    pub fn alternation(children: Vec<Element>) -> Self {
        Element::Alternation(children)
    }
}

impl From<Terminal> for Element {
    fn from(terminal: Terminal) -> Self {
        Element::Terminal(terminal)
    }
}

/// A named element, the unit a caller validates against.
///
/// The name is descriptive only (error reporting, logging by callers); it
/// never affects matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub element: Element,
}

impl Rule {
    pub fn new(name: impl Into<String>, element: Element) -> Self {
        Rule {
            name: name.into(),
            element,
        }
    }
}
