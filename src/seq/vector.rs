//! Runtime-length sequences of constant-size elements.
//!
//! The element count is supplied by the caller on every `parse`/`render`;
//! element `i` is addressed directly at `offset + i * element_size`.
//!
//! # Example
//!
//! ```
//! use wireview::scalar::U8;
//! use wireview::seq::VectorType;
//! use wireview::WireType;
//!
//! let ty = VectorType::new(U8::new());
//! let buf = [3, 10, 20, 30];
//!
//! // The count comes from a sibling field, here the first byte.
//! let mut view = ty.new_view();
//! let end = ty.parse(&mut view, &buf, 1, buf[0] as usize).unwrap();
//! assert_eq!(end, 4);
//! assert_eq!(view.len(), 3);
//!
//! let mut owned = ty.new_owned();
//! ty.build(&mut owned, &view);
//! assert_eq!(owned, vec![10, 20, 30]);
//! ```

use crate::contract::{ConstSized, WireType};
use crate::error::{ensure_available, ParseError, Result};

use super::{build_elements, clone_elements, serialize_elements, DEFAULT_MAX_ELEMENTS};

/// Wire type of a runtime-length vector of `T`.
#[derive(Debug, Clone, Copy)]
pub struct VectorType<T> {
    inner: T,
    max_len: usize,
}

impl<T> VectorType<T> {
    /// Create with the default element limit ([`DEFAULT_MAX_ELEMENTS`]).
    pub const fn new(inner: T) -> Self {
        Self::with_max_len(inner, DEFAULT_MAX_ELEMENTS)
    }

    /// Create with a custom element limit.
    ///
    /// `parse` rejects larger counts as [`ParseError::Malformed`].
    pub const fn with_max_len(inner: T, max_len: usize) -> Self {
        Self { inner, max_len }
    }

    /// The element type.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Maximum count accepted by `parse`.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

/// View of a vector.
///
/// `len()` is the count of the last parse/render. The slot storage behind
/// it keeps its peak size (`capacity()`), so re-parsing at a smaller count
/// does not reallocate.
pub struct VectorView<'a, T: WireType> {
    slots: Vec<T::View<'a>>,
    len: usize,
    offset: usize,
}

impl<'a, T: WireType> VectorView<'a, T> {
    /// Child view at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T::View<'a>> {
        self.slots[..self.len].get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of child views allocated so far.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Offset the vector was last bound at.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T::View<'a>> {
        self.slots[..self.len].iter()
    }
}

impl<T: ConstSized> VectorType<T> {
    /// Bind `view` to `count` elements at `offset` without validating.
    ///
    /// # Panics
    ///
    /// May panic if the elements are truncated.
    pub fn render<'a>(&self, view: &mut VectorView<'a, T>, buf: &'a [u8], offset: usize, count: usize) {
        self.reserve_slots(view, count);
        let stride = self.inner.const_size_bytes();
        view.offset = offset;
        for (i, slot) in view.slots[..count].iter_mut().enumerate() {
            self.inner.render(slot, buf, offset + i * stride);
        }
        view.len = count;
    }

    /// Bind `view` to `count` elements at `offset`, validating each one.
    ///
    /// Returns `offset + count * element_size`. On error the view is left
    /// empty.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Malformed`] if `count` exceeds [`max_len`](Self::max_len)
    ///   or its byte length overflows, or if an element is malformed.
    /// - [`ParseError::NotEnoughData`] if fewer than `count * element_size`
    ///   bytes remain. This is checked before any slot is allocated.
    pub fn parse<'a>(
        &self,
        view: &mut VectorView<'a, T>,
        buf: &'a [u8],
        offset: usize,
        count: usize,
    ) -> Result<usize> {
        view.len = 0;
        let stride = self.inner.const_size_bytes();
        let total = match count.checked_mul(stride) {
            Some(total) if count <= self.max_len => total,
            _ => {
                tracing::trace!(count, max_len = self.max_len, "vector count rejected");
                return Err(ParseError::Malformed);
            }
        };

        if let Err(err) = ensure_available(buf, offset, total) {
            tracing::trace!(count, offset, available = buf.len(), "vector extends past buffer");
            return Err(err);
        }

        self.reserve_slots(view, count);
        view.offset = offset;
        for (i, slot) in view.slots[..count].iter_mut().enumerate() {
            if let Err(err) = self.inner.parse(slot, buf, offset + i * stride) {
                tracing::trace!(index = i, count, error = %err, "vector element failed to parse");
                return Err(err);
            }
        }
        view.len = count;
        Ok(offset + total)
    }

    fn reserve_slots<'a>(&self, view: &mut VectorView<'a, T>, count: usize) {
        if view.slots.len() < count {
            tracing::debug!(from = view.slots.len(), to = count, "growing vector view slots");
            view.slots.resize_with(count, || self.inner.new_view());
        }
    }
}

impl<T: ConstSized> WireType for VectorType<T> {
    type View<'a> = VectorView<'a, T>;
    type Owned = Vec<T::Owned>;

    fn new_view<'a>(&self) -> VectorView<'a, T> {
        VectorView {
            slots: Vec::new(),
            len: 0,
            offset: 0,
        }
    }

    fn new_owned(&self) -> Vec<T::Owned> {
        Vec::new()
    }

    fn build(&self, dst: &mut Vec<T::Owned>, src: &VectorView<'_, T>) {
        build_elements(&self.inner, dst, &src.slots[..src.len]);
    }

    fn serialize_into(&self, owned: &Vec<T::Owned>, buf: &mut [u8], offset: usize) -> usize {
        serialize_elements(&self.inner, owned, buf, offset)
    }

    #[inline]
    fn size_bytes(&self, owned: &Vec<T::Owned>) -> usize {
        owned.len() * self.inner.const_size_bytes()
    }

    fn clone_owned_into(&self, dst: &mut Vec<T::Owned>, src: &Vec<T::Owned>) {
        clone_elements(&self.inner, dst, src);
    }
}
