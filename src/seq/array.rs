//! Fixed-length arrays of constant-size elements.
//!
//! Elements are laid out contiguously with no padding, so element `i` of an
//! array at `offset` starts at `offset + i * element_size`.
//!
//! # Example
//!
//! ```
//! use wireview::scalar::U16Be;
//! use wireview::seq::ArrayType;
//! use wireview::{SelfSized, WireType};
//!
//! let ty = ArrayType::<_, 3>::new(U16Be::new());
//! let buf = [0, 1, 0, 2, 0, 3];
//!
//! let mut view = ty.new_view();
//! assert_eq!(ty.parse(&mut view, &buf, 0).unwrap(), 6);
//! assert_eq!(view.get(1).unwrap().get(), 2);
//!
//! let mut owned = ty.new_owned();
//! ty.build(&mut owned, &view);
//! assert_eq!(owned, vec![1, 2, 3]);
//! ```

use crate::contract::{ConstSized, SelfSized, WireType};
use crate::error::{Result, WrongLength};

use super::{build_elements, clone_elements, serialize_elements};

/// Wire type of an `N`-element array of `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayType<T, const N: usize> {
    inner: T,
}

impl<T, const N: usize> ArrayType<T, N> {
    /// Create the descriptor over an element type.
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// The element type.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

/// View of an array: exactly `N` child views, created once.
pub struct ArrayView<'a, T: WireType, const N: usize> {
    slots: Vec<T::View<'a>>,
    offset: usize,
}

impl<'a, T: WireType, const N: usize> ArrayView<'a, T, N> {
    /// Child view at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T::View<'a>> {
        self.slots.get(index)
    }

    /// Always `N`.
    #[inline]
    pub fn len(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Offset the array was last bound at.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T::View<'a>> {
        self.slots.iter()
    }
}

impl<T: ConstSized, const N: usize> WireType for ArrayType<T, N> {
    type View<'a> = ArrayView<'a, T, N>;
    type Owned = Vec<T::Owned>;

    fn new_view<'a>(&self) -> ArrayView<'a, T, N> {
        ArrayView {
            slots: (0..N).map(|_| self.inner.new_view()).collect(),
            offset: 0,
        }
    }

    fn new_owned(&self) -> Vec<T::Owned> {
        (0..N).map(|_| self.inner.new_owned()).collect()
    }

    fn build(&self, dst: &mut Vec<T::Owned>, src: &ArrayView<'_, T, N>) {
        build_elements(&self.inner, dst, &src.slots);
    }

    /// # Panics
    ///
    /// Panics with [`WrongLength`] if `owned.len() != N`, in addition to the
    /// buffer-size panic of [`WireType::serialize_into`].
    fn serialize_into(&self, owned: &Vec<T::Owned>, buf: &mut [u8], offset: usize) -> usize {
        check_len::<N>(owned.len());
        serialize_elements(&self.inner, owned, buf, offset)
    }

    #[inline]
    fn size_bytes(&self, _owned: &Vec<T::Owned>) -> usize {
        self.const_size_bytes()
    }

    /// `dst` is resized to `N` if needed.
    ///
    /// # Panics
    ///
    /// Panics with [`WrongLength`] if `src.len() != N`.
    fn clone_owned_into(&self, dst: &mut Vec<T::Owned>, src: &Vec<T::Owned>) {
        check_len::<N>(src.len());
        clone_elements(&self.inner, dst, src);
    }
}

/// Panic with [`WrongLength`] unless an owned array holds `N` elements.
fn check_len<const N: usize>(actual: usize) {
    if actual != N {
        let err = WrongLength {
            expected: N,
            actual,
        };
        tracing::error!(expected = N, actual, "owned array has wrong length");
        panic!("{err}");
    }
}

impl<T: ConstSized, const N: usize> SelfSized for ArrayType<T, N> {
    fn render<'a>(&self, view: &mut ArrayView<'a, T, N>, buf: &'a [u8], offset: usize) {
        let stride = self.inner.const_size_bytes();
        view.offset = offset;
        for (i, slot) in view.slots.iter_mut().enumerate() {
            self.inner.render(slot, buf, offset + i * stride);
        }
    }

    fn parse<'a>(
        &self,
        view: &mut ArrayView<'a, T, N>,
        buf: &'a [u8],
        offset: usize,
    ) -> Result<usize> {
        let stride = self.inner.const_size_bytes();
        view.offset = offset;
        for (i, slot) in view.slots.iter_mut().enumerate() {
            if let Err(err) = self.inner.parse(slot, buf, offset + i * stride) {
                tracing::trace!(index = i, len = N, error = %err, "array element failed to parse");
                return Err(err);
            }
        }
        Ok(offset + N * stride)
    }
}

impl<T: ConstSized, const N: usize> ConstSized for ArrayType<T, N> {
    #[inline]
    fn const_size_bytes(&self) -> usize {
        N * self.inner.const_size_bytes()
    }
}
