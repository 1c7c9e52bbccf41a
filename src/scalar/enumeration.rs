//! Enumerations checked against a declared set of valid values.
//!
//! Generated enum types are newtypes over their raw representation, so that
//! an out-of-range value obtained through `render` can still be held and
//! inspected:
//!
//! ```
//! use wireview::scalar::{Enumeration, LittleEndian, WireEnum};
//! use wireview::{ParseError, SelfSized, WireType};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
//! struct Mode(u8);
//!
//! impl Mode {
//!     const OFF: Mode = Mode(0);
//!     const ON: Mode = Mode(1);
//! }
//!
//! impl WireEnum for Mode {
//!     type Repr = u8;
//!     type Order = LittleEndian;
//!     const VALUES: &'static [Self] = &[Mode::OFF, Mode::ON];
//!     fn from_raw(raw: u8) -> Self { Mode(raw) }
//!     fn to_raw(self) -> u8 { self.0 }
//! }
//!
//! let ty = Enumeration::<Mode>::new();
//! let mut view = ty.new_view();
//! assert_eq!(ty.parse(&mut view, &[7], 0), Err(ParseError::Malformed));
//! ty.render(&mut view, &[7], 0);
//! assert_eq!(view.get(), Mode(7));
//! ```

use std::fmt;
use std::marker::PhantomData;

use byteorder::ByteOrder;

use super::primitive::{Primitive, Scalar, ScalarView};
use crate::contract::{ConstSized, SelfSized, WireType};
use crate::error::{ParseError, Result};

/// An enum with a raw scalar representation and a closed set of valid values.
pub trait WireEnum: Copy + PartialEq + Default + fmt::Debug + 'static {
    /// Underlying scalar.
    type Repr: Scalar;
    /// Byte order of the underlying scalar.
    type Order: ByteOrder;

    /// Every valid value.
    const VALUES: &'static [Self];

    /// Wrap a raw value without checking it.
    fn from_raw(raw: Self::Repr) -> Self;

    /// The raw value.
    fn to_raw(self) -> Self::Repr;

    /// Whether the value is one of [`VALUES`](Self::VALUES).
    fn is_valid(self) -> bool {
        Self::VALUES.contains(&self)
    }
}

/// Lazy view of an enumeration.
pub struct EnumView<'a, E: WireEnum> {
    raw: ScalarView<'a, E::Repr, E::Order>,
}

impl<E: WireEnum> EnumView<'_, E> {
    /// Decode the value. Out-of-range values are returned as-is.
    #[inline]
    pub fn get(&self) -> E {
        E::from_raw(self.raw.get())
    }
}

impl<E: WireEnum> fmt::Debug for EnumView<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumView").field(&self.get()).finish()
    }
}

/// Wire type of a [`WireEnum`].
pub struct Enumeration<E: WireEnum> {
    raw: Primitive<E::Repr, E::Order>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: WireEnum> Enumeration<E> {
    /// Create the descriptor.
    pub const fn new() -> Self {
        Self {
            raw: Primitive::new(),
            _marker: PhantomData,
        }
    }
}

impl<E: WireEnum> Default for Enumeration<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum> Clone for Enumeration<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E: WireEnum> Copy for Enumeration<E> {}

impl<E: WireEnum> fmt::Debug for Enumeration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Enumeration<{}>", std::any::type_name::<E>())
    }
}

impl<E: WireEnum> WireType for Enumeration<E> {
    type View<'a> = EnumView<'a, E>;
    type Owned = E;

    fn new_view<'a>(&self) -> EnumView<'a, E> {
        EnumView {
            raw: self.raw.new_view(),
        }
    }

    fn new_owned(&self) -> E {
        E::default()
    }

    #[inline]
    fn build(&self, dst: &mut E, src: &EnumView<'_, E>) {
        *dst = src.get();
    }

    #[inline]
    fn serialize_into(&self, owned: &E, buf: &mut [u8], offset: usize) -> usize {
        self.raw.serialize_into(&owned.to_raw(), buf, offset)
    }

    #[inline]
    fn size_bytes(&self, _owned: &E) -> usize {
        E::Repr::SIZE
    }

    #[inline]
    fn clone_owned_into(&self, dst: &mut E, src: &E) {
        *dst = *src;
    }
}

impl<E: WireEnum> SelfSized for Enumeration<E> {
    #[inline]
    fn render<'a>(&self, view: &mut EnumView<'a, E>, buf: &'a [u8], offset: usize) {
        self.raw.render(&mut view.raw, buf, offset);
    }

    fn parse<'a>(&self, view: &mut EnumView<'a, E>, buf: &'a [u8], offset: usize) -> Result<usize> {
        let end = self.raw.parse(&mut view.raw, buf, offset)?;
        if !view.get().is_valid() {
            tracing::trace!(raw = ?view.raw.get(), offset, "enum value outside valid set");
            return Err(ParseError::Malformed);
        }
        Ok(end)
    }
}

impl<E: WireEnum> ConstSized for Enumeration<E> {
    #[inline]
    fn const_size_bytes(&self) -> usize {
        E::Repr::SIZE
    }
}
