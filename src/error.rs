//! Error types for wireview.
//!
//! Two kinds of failure exist:
//!
//! - [`ParseError`] is checked. It is raised by `parse` against external
//!   bytes and is propagated unchanged from the innermost leaf to the caller.
//! - [`WrongLength`] is fatal. It signals that an owned value broke an
//!   invariant the caller was responsible for, and is raised as a panic.

use thiserror::Error;

/// Checked failure raised while parsing external bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// The buffer ended before the bytes a value needs were available.
    #[error("not enough data")]
    NotEnoughData,

    /// The bytes are present but violate a structural constraint
    /// (invalid tag, invalid enum value, unsatisfiable count).
    #[error("malformed data")]
    Malformed,
}

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// An owned fixed-length array does not hold exactly its declared length.
///
/// Never produced by parsing. Raised as a panic by
/// [`ArrayType::serialize_into`](crate::seq::ArrayType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wrong array length: expected {expected}, got {actual}")]
pub struct WrongLength {
    /// Declared array length.
    pub expected: usize,
    /// Length of the owned value.
    pub actual: usize,
}

/// Check that `needed` bytes are available at `offset`.
///
/// Returns the end offset on success.
#[inline]
pub(crate) fn ensure_available(buf: &[u8], offset: usize, needed: usize) -> Result<usize> {
    match offset.checked_add(needed) {
        Some(end) if end <= buf.len() => Ok(end),
        _ => Err(ParseError::NotEnoughData),
    }
}
