//! Runtime-length sequences of self-describing-size elements.
//!
//! Each element's extent is only known once it has been parsed, so the list
//! is walked front to back: element `i + 1` starts where element `i` ended.

use crate::contract::{SelfSized, WireType};
use crate::error::{ParseError, Result};

use super::{build_elements, clone_elements, serialize_elements, DEFAULT_MAX_ELEMENTS};

/// Wire type of a runtime-length list of `T`.
#[derive(Debug, Clone, Copy)]
pub struct ListType<T> {
    inner: T,
    max_len: usize,
}

impl<T> ListType<T> {
    /// Create with the default element limit ([`DEFAULT_MAX_ELEMENTS`]).
    pub const fn new(inner: T) -> Self {
        Self::with_max_len(inner, DEFAULT_MAX_ELEMENTS)
    }

    /// Create with a custom element limit.
    pub const fn with_max_len(inner: T, max_len: usize) -> Self {
        Self { inner, max_len }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Maximum count accepted by `parse`.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

/// View of a list. Same slot discipline as [`VectorView`](super::VectorView).
pub struct ListView<'a, T: WireType> {
    slots: Vec<T::View<'a>>,
    len: usize,
    offset: usize,
    end: usize,
}

impl<'a, T: WireType> ListView<'a, T> {
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

    /// Offset the list was last bound at.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset just past the last element.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T::View<'a>> {
        self.slots[..self.len].iter()
    }
}

impl<T: SelfSized> ListType<T> {
    /// Bind `view` to `count` elements at `offset` on bytes already known
    /// to be valid.
    ///
    /// The walk still runs every element's `parse`, since nothing else
    /// yields the element boundaries. The element limit is not applied.
    ///
    /// # Panics
    ///
    /// Panics if the bytes do not hold `count` valid elements.
    pub fn render<'a>(&self, view: &mut ListView<'a, T>, buf: &'a [u8], offset: usize, count: usize) {
        if let Err(err) = self.walk(view, buf, offset, count) {
            panic!("list rendered over bytes that do not parse: {err}");
        }
    }

    /// Bind `view` to `count` elements at `offset`, walking and validating
    /// each one.
    ///
    /// Returns the offset just past the last element. On error the view is
    /// left empty.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Malformed`] if `count` exceeds [`max_len`](Self::max_len)
    ///   or an element is malformed.
    /// - [`ParseError::NotEnoughData`] if the buffer ends first.
    ///
    /// Slots are allocated only for elements the walk reaches, so the
    /// view's [`capacity`](ListView::capacity) is bounded by the input.
    pub fn parse<'a>(
        &self,
        view: &mut ListView<'a, T>,
        buf: &'a [u8],
        offset: usize,
        count: usize,
    ) -> Result<usize> {
        if count > self.max_len {
            view.len = 0;
            tracing::trace!(count, max_len = self.max_len, "list count rejected");
            return Err(ParseError::Malformed);
        }
        self.walk(view, buf, offset, count)
    }

    fn walk<'a>(
        &self,
        view: &mut ListView<'a, T>,
        buf: &'a [u8],
        offset: usize,
        count: usize,
    ) -> Result<usize> {
        view.len = 0;
        view.offset = offset;
        let grown_from = view.slots.len();
        let mut cursor = offset;
        for i in 0..count {
            // Grow on demand: at most one slot past the last parsed element.
            if i == view.slots.len() {
                view.slots.push(self.inner.new_view());
            }
            cursor = match self.inner.parse(&mut view.slots[i], buf, cursor) {
                Ok(next) => next,
                Err(err) => {
                    tracing::trace!(index = i, count, at = cursor, error = %err, "list element failed to parse");
                    return Err(err);
                }
            };
        }
        if view.slots.len() > grown_from {
            tracing::debug!(from = grown_from, to = view.slots.len(), "grew list view slots");
        }
        view.len = count;
        view.end = cursor;
        Ok(cursor)
    }
}

impl<T: SelfSized> WireType for ListType<T> {
    type View<'a> = ListView<'a, T>;
    type Owned = Vec<T::Owned>;

    fn new_view<'a>(&self) -> ListView<'a, T> {
        ListView {
            slots: Vec::new(),
            len: 0,
            offset: 0,
            end: 0,
        }
    }

    fn new_owned(&self) -> Vec<T::Owned> {
        Vec::new()
    }

    fn build(&self, dst: &mut Vec<T::Owned>, src: &ListView<'_, T>) {
        build_elements(&self.inner, dst, &src.slots[..src.len]);
    }

    fn serialize_into(&self, owned: &Vec<T::Owned>, buf: &mut [u8], offset: usize) -> usize {
        serialize_elements(&self.inner, owned, buf, offset)
    }

    fn size_bytes(&self, owned: &Vec<T::Owned>) -> usize {
        owned
            .iter()
            .map(|element| self.inner.size_bytes(element))
            .sum()
    }

    fn clone_owned_into(&self, dst: &mut Vec<T::Owned>, src: &Vec<T::Owned>) {
        clone_elements(&self.inner, dst, src);
    }
}
