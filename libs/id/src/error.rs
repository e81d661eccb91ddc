//! Error types for GUID parsing.

use thiserror::Error;

/// Errors that can occur when parsing a textual GUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input string is empty.
    #[error("GUID cannot be empty")]
    Empty,

    /// Only one of the surrounding braces is present.
    #[error("GUID has an unbalanced brace")]
    UnbalancedBraces,

    /// The unbraced input is not 36 characters long.
    #[error("invalid GUID length: expected 36 characters, got {len}")]
    InvalidLength { len: usize },

    /// A hyphen-separated group has the wrong length or a hyphen is misplaced.
    #[error("invalid GUID group {index}: expected {expected} hex digits, got {actual}")]
    InvalidGroup {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A character in a group is not a hexadecimal digit.
    #[error("invalid GUID digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

impl FormatError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, FormatError::Empty)
    }
}
