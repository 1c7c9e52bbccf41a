//! Sequence adaptors.
//!
//! | Adaptor        | Length          | Element contract | Addressing        |
//! |----------------|-----------------|------------------|-------------------|
//! | [`ArrayType`]  | const `N`       | [`ConstSized`]   | `base + i * size` |
//! | [`VectorType`] | runtime `count` | [`ConstSized`]   | `base + i * size` |
//! | [`ListType`]   | runtime `count` | [`SelfSized`]    | sequential walk   |
//!
//! None of them read a length prefix: runtime-length adaptors are handed
//! their count by the enclosing type, which stores it in a sibling field.
//!
//! Views keep a scratch collection of child views. For vectors and lists it
//! only ever grows: a shorter re-parse lowers `len()`, never `capacity()`.
//! Owned values are plain `Vec`s and are resized exactly by `clone_owned_into`.
//!
//! [`ConstSized`]: crate::contract::ConstSized
//! [`SelfSized`]: crate::contract::SelfSized

mod array;
mod list;
mod vector;

pub use array::{ArrayType, ArrayView};
pub use list::{ListType, ListView};
pub use vector::{VectorType, VectorView};

use crate::contract::WireType;

/// Default maximum element count accepted by `parse` on runtime-length
/// sequences (16 Mi).
pub const DEFAULT_MAX_ELEMENTS: usize = 16 * 1024 * 1024;

/// Replace `dst` with freshly built copies of `views`.
pub(crate) fn build_elements<'a, T: WireType>(
    inner: &T,
    dst: &mut Vec<T::Owned>,
    views: &[T::View<'a>],
) {
    dst.clear();
    dst.reserve(views.len());
    for view in views {
        let mut built = inner.new_owned();
        inner.build(&mut built, view);
        dst.push(built);
    }
}

/// Serialize every element back to back, returning the end offset.
pub(crate) fn serialize_elements<T: WireType>(
    inner: &T,
    elements: &[T::Owned],
    buf: &mut [u8],
    mut offset: usize,
) -> usize {
    for element in elements {
        offset = inner.serialize_into(element, buf, offset);
    }
    offset
}

/// Resize `dst` to `src.len()` then deep-copy element-wise.
///
/// Elements already present in `dst` are reused.
pub(crate) fn clone_elements<T: WireType>(inner: &T, dst: &mut Vec<T::Owned>, src: &[T::Owned]) {
    dst.truncate(src.len());
    dst.reserve(src.len() - dst.len());
    while dst.len() < src.len() {
        dst.push(inner.new_owned());
    }
    for (out, element) in dst.iter_mut().zip(src) {
        inner.clone_owned_into(out, element);
    }
}
