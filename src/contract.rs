//! The contracts every wire type implements.
//!
//! A wire type is a small descriptor value (often zero-sized) that knows how
//! to move a value between its two representations:
//!
//! - a **view** (`View<'a>`), bound to a borrowed buffer and an offset, which
//!   interprets bytes lazily and is reused across parses;
//! - an **owned** value (`Owned`), materialized and independent of any buffer.
//!
//! ```text
//!  buffer ──parse/render──► View<'a> ──build──► Owned
//!  buffer ◄──────────────serialize_into──────── Owned
//! ```
//!
//! Three layers exist:
//!
//! - [`WireType`]: conversion, owned serialization, sizing, deep copy.
//! - [`SelfSized`]: view-based parse and render that return or know the
//!   next offset. Values whose size depends on their content (unions,
//!   strings) implement this.
//! - [`ConstSized`]: a value-independent byte length, so that element `i`
//!   of a sequence lives at `base + i * size`.
//!
//! Runtime-length sequences ([`VectorType`](crate::seq::VectorType),
//! [`ListType`](crate::seq::ListType)) only implement [`WireType`]: their
//! element count comes from a sibling field of the enclosing type and is
//! passed to their own `parse`/`render`.
//!
//! # Reuse
//!
//! Views are mutable and meant to be created once per call site. A view
//! must not be shared between two parses running at the same time, and a
//! reference into a view is invalidated by the next parse of that view.
//! The borrow checker enforces both.

use crate::error::Result;

/// Value contract: owned/view conversion, serialization, sizing, deep copy.
pub trait WireType {
    /// Buffer-bound view of a value.
    type View<'a>;
    /// Materialized, buffer-independent value.
    type Owned;

    /// A fresh, unbound view.
    fn new_view<'a>(&self) -> Self::View<'a>;

    /// A fresh owned value holding defaults.
    fn new_owned(&self) -> Self::Owned;

    /// Materialize `src` into `dst`, overwriting it.
    fn build(&self, dst: &mut Self::Owned, src: &Self::View<'_>);

    /// Write `owned` at `offset` and return the offset just past it.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than `offset + self.size_bytes(owned)`.
    /// Callers size the buffer with [`size_bytes`](Self::size_bytes).
    fn serialize_into(&self, owned: &Self::Owned, buf: &mut [u8], offset: usize) -> usize;

    /// Number of bytes `serialize_into` writes for `owned`.
    fn size_bytes(&self, owned: &Self::Owned) -> usize;

    /// Deep copy `src` into `dst`, reusing the structure `dst` already has.
    fn clone_owned_into(&self, dst: &mut Self::Owned, src: &Self::Owned);
}

/// Self-describing-size contract: the value's extent is found by parsing it.
pub trait SelfSized: WireType {
    /// Bind `view` to `buf` at `offset` without validating anything.
    ///
    /// Only valid on bytes that an earlier `parse` accepted.
    ///
    /// # Panics
    ///
    /// May panic if the bytes are truncated.
    fn render<'a>(&self, view: &mut Self::View<'a>, buf: &'a [u8], offset: usize);

    /// Bind `view` to `buf` at `offset`, validating as it goes.
    ///
    /// Returns the offset just past the value.
    ///
    /// # Errors
    ///
    /// - [`ParseError::NotEnoughData`](crate::ParseError::NotEnoughData) if
    ///   the buffer ends before a required byte.
    /// - [`ParseError::Malformed`](crate::ParseError::Malformed) if a
    ///   discriminant or enum value is outside its valid set.
    fn parse<'a>(&self, view: &mut Self::View<'a>, buf: &'a [u8], offset: usize) -> Result<usize>;
}

/// Constant-size contract: every value has the same encoded length.
pub trait ConstSized: SelfSized {
    /// Encoded length of any value of this type.
    fn const_size_bytes(&self) -> usize;
}
