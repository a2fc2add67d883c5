//! Validator: walks a rule's element tree against a complete byte sequence.
//!
//! Matching is a recursive descent over the tree with a running byte offset.
//! Backtracking happens only at alternation boundaries: a terminal match is
//! all-or-nothing, and a sequence aborts on its first failing child. The
//! input must be consumed in full; a rule that matches only a strict prefix
//! fails with [`ValidationError::TrailingInput`].
//!
//! No state persists across calls. Each [`validate`] call owns its traversal
//! state, so concurrent validations of a shared rule tree need no locking.

use crate::ast::{Element, Rule, Terminal};

/// Why a byte sequence was rejected. Every variant carries the byte offset
/// at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A terminal needed more bytes than remained.
    #[error("unexpected end of input at offset {offset}: {needed} more byte(s) required")]
    UnexpectedEndOfInput { offset: usize, needed: usize },
    /// A byte terminal's exact-value check failed.
    #[error("unexpected byte at offset {offset}: expected 0x{expected:02X}, found 0x{found:02X}")]
    UnexpectedByte {
        offset: usize,
        expected: u8,
        found: u8,
    },
    /// A byte-range terminal's bound check failed.
    #[error(
        "byte out of range at offset {offset}: expected 0x{low:02X}..=0x{high:02X}, found 0x{found:02X}"
    )]
    ByteOutOfRange {
        offset: usize,
        low: u8,
        high: u8,
        found: u8,
    },
    /// A literal terminal's element-wise comparison failed.
    #[error(
        "literal mismatch at offset {offset}: expected {} ({})",
        literal_preview(.expected),
        case_label(.case_sensitive)
    )]
    LiteralMismatch {
        /// Offset of the first byte that failed to compare.
        offset: usize,
        expected: Vec<u8>,
        case_sensitive: bool,
    },
    /// Every child of an alternation failed at this offset.
    #[error(
        "no alternative matched at offset {offset}: all {} candidate(s) failed",
        .errors.len()
    )]
    AllAlternativesFailed {
        offset: usize,
        /// One failure per child, in declaration order.
        errors: Vec<ValidationError>,
    },
    /// The rule matched a strict prefix but input bytes remained.
    #[error("trailing input at offset {offset}: rule matched only a prefix")]
    TrailingInput { offset: usize },
}

impl ValidationError {
    /// Byte offset at which the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            ValidationError::UnexpectedEndOfInput { offset, .. }
            | ValidationError::UnexpectedByte { offset, .. }
            | ValidationError::ByteOutOfRange { offset, .. }
            | ValidationError::LiteralMismatch { offset, .. }
            | ValidationError::AllAlternativesFailed { offset, .. }
            | ValidationError::TrailingInput { offset } => *offset,
        }
    }
}

fn literal_preview(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => format!("{s:?}"),
        Err(_) => format!("{bytes:02X?}"),
    }
}

fn case_label(case_sensitive: &bool) -> &'static str {
    if *case_sensitive {
        "case-sensitive"
    } else {
        "case-insensitive"
    }
}

/// Validate a complete byte sequence against a rule.
///
/// Succeeds iff the rule's element consumes every byte starting at offset 0.
/// Trailing unconsumed bytes are a failure: this validates whole inputs, not
/// prefixes.
pub fn validate(bytes: &[u8], rule: &Rule) -> Result<(), ValidationError> {
    let end = match_element(bytes, 0, &rule.element)?;
    if end != bytes.len() {
        return Err(ValidationError::TrailingInput { offset: end });
    }
    Ok(())
}

impl Rule {
    /// Convenience for [`validate`] with the rule as receiver.
    pub fn validate(&self, bytes: &[u8]) -> Result<(), ValidationError> {
        validate(bytes, self)
    }
}

/// Match one element at `pos`; on success returns the offset just past the
/// consumed span.
fn match_element(data: &[u8], pos: usize, element: &Element) -> Result<usize, ValidationError> {
    match element {
        Element::Terminal(terminal) => match_terminal(data, pos, terminal),
        Element::Sequence(children) => {
            let mut cur = pos;
            for child in children {
                cur = match_element(data, cur, child)?;
            }
            Ok(cur)
        }
        Element::Alternation(children) => {
            let mut errors = Vec::with_capacity(children.len());
            for child in children {
                match match_element(data, pos, child) {
                    Ok(next) => return Ok(next),
                    Err(e) => errors.push(e),
                }
            }
            Err(ValidationError::AllAlternativesFailed {
                offset: pos,
                errors,
            })
        }
    }
}

fn match_terminal(data: &[u8], pos: usize, terminal: &Terminal) -> Result<usize, ValidationError> {
    match terminal {
        Terminal::Byte(expected) => {
            let found = next_byte(data, pos)?;
            if found == *expected {
                Ok(pos + 1)
            } else {
                Err(ValidationError::UnexpectedByte {
                    offset: pos,
                    expected: *expected,
                    found,
                })
            }
        }
        Terminal::ByteRange { low, high } => {
            let found = next_byte(data, pos)?;
            if (*low..=*high).contains(&found) {
                Ok(pos + 1)
            } else {
                Err(ValidationError::ByteOutOfRange {
                    offset: pos,
                    low: *low,
                    high: *high,
                    found,
                })
            }
        }
        Terminal::Literal {
            bytes,
            case_sensitive,
        } => {
            let end = pos + bytes.len();
            if end > data.len() {
                return Err(ValidationError::UnexpectedEndOfInput {
                    offset: data.len(),
                    needed: end - data.len(),
                });
            }
            for (i, (&want, &got)) in bytes.iter().zip(&data[pos..end]).enumerate() {
                if !bytes_equal(want, got, *case_sensitive) {
                    return Err(ValidationError::LiteralMismatch {
                        offset: pos + i,
                        expected: bytes.clone(),
                        case_sensitive: *case_sensitive,
                    });
                }
            }
            Ok(end)
        }
    }
}

fn next_byte(data: &[u8], pos: usize) -> Result<u8, ValidationError> {
    data.get(pos)
        .copied()
        .ok_or(ValidationError::UnexpectedEndOfInput {
            offset: pos,
            needed: 1,
        })
}

/// RFC 7405 comparison: exact, or ASCII-only case folding when insensitive.
/// Folding applies to `A-Z`/`a-z` only; high-bit and non-letter bytes always
/// compare exactly.
fn bytes_equal(a: u8, b: u8, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.to_ascii_lowercase() == b.to_ascii_lowercase()
    }
}
