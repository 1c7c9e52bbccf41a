//! Fixed-width scalars in either byte order.
//!
//! # Example
//!
//! ```
//! use wireview::scalar::{U16Be, U16Le};
//! use wireview::{SelfSized, WireType};
//!
//! let buf = [0x01, 0x02];
//! let be = U16Be::new();
//! let mut view = be.new_view();
//! assert_eq!(be.parse(&mut view, &buf, 0).unwrap(), 2);
//! assert_eq!(view.get(), 0x0102);
//!
//! let le = U16Le::new();
//! let mut view = le.new_view();
//! le.parse(&mut view, &buf, 0).unwrap();
//! assert_eq!(view.get(), 0x0201);
//! ```

use std::fmt;
use std::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::contract::{ConstSized, SelfSized, WireType};
use crate::error::{ensure_available, Result};

/// Backing bytes of an unbound view. Long enough for any scalar.
const UNBOUND: &[u8] = &[0u8; 8];

/// A fixed-width value with a byte-order-parameterized encoding.
pub trait Scalar: Copy + Default + PartialEq + fmt::Debug {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Decode from the first `SIZE` bytes of `bytes`.
    fn read_from<E: ByteOrder>(bytes: &[u8]) -> Self;

    /// Encode into the first `SIZE` bytes of `bytes`.
    fn write_to<E: ByteOrder>(self, bytes: &mut [u8]);
}

impl Scalar for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn read_from<E: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn write_to<E: ByteOrder>(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
}

impl Scalar for i8 {
    const SIZE: usize = 1;

    #[inline]
    fn read_from<E: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    #[inline]
    fn write_to<E: ByteOrder>(self, bytes: &mut [u8]) {
        bytes[0] = self as u8;
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl Scalar for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn read_from<E: ByteOrder>(bytes: &[u8]) -> Self {
                    E::$read(bytes)
                }

                #[inline]
                fn write_to<E: ByteOrder>(self, bytes: &mut [u8]) {
                    E::$write(bytes, self)
                }
            }
        )*
    };
}

impl_scalar! {
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    u64 => read_u64, write_u64;
    i64 => read_i64, write_i64;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

/// Lazy view of a scalar: holds its bytes, decodes on [`get`](Self::get).
pub struct ScalarView<'a, T, E> {
    bytes: &'a [u8],
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<'a, T: Scalar, E: ByteOrder> ScalarView<'a, T, E> {
    fn unbound() -> Self {
        Self {
            bytes: UNBOUND,
            _marker: PhantomData,
        }
    }

    /// Decode the value. An unbound view reads as zero.
    #[inline]
    pub fn get(&self) -> T {
        T::read_from::<E>(self.bytes)
    }

    /// The encoded bytes this view is bound to.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..T::SIZE]
    }
}

impl<T, E> Clone for ScalarView<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for ScalarView<'_, T, E> {}

impl<T: Scalar, E: ByteOrder> fmt::Debug for ScalarView<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScalarView").field(&self.get()).finish()
    }
}

/// Wire type of a scalar `T` encoded in byte order `E`.
pub struct Primitive<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Primitive<T, E> {
    /// Create the descriptor.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, E> Default for Primitive<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Primitive<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Primitive<T, E> {}

impl<T, E> fmt::Debug for Primitive<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Primitive<{}>", std::any::type_name::<T>())
    }
}

impl<T: Scalar, E: ByteOrder> WireType for Primitive<T, E> {
    type View<'a> = ScalarView<'a, T, E>;
    type Owned = T;

    fn new_view<'a>(&self) -> ScalarView<'a, T, E> {
        ScalarView::unbound()
    }

    fn new_owned(&self) -> T {
        T::default()
    }

    #[inline]
    fn build(&self, dst: &mut T, src: &ScalarView<'_, T, E>) {
        *dst = src.get();
    }

    #[inline]
    fn serialize_into(&self, owned: &T, buf: &mut [u8], offset: usize) -> usize {
        let end = offset + T::SIZE;
        owned.write_to::<E>(&mut buf[offset..end]);
        end
    }

    #[inline]
    fn size_bytes(&self, _owned: &T) -> usize {
        T::SIZE
    }

    #[inline]
    fn clone_owned_into(&self, dst: &mut T, src: &T) {
        *dst = *src;
    }
}

impl<T: Scalar, E: ByteOrder> SelfSized for Primitive<T, E> {
    #[inline]
    fn render<'a>(&self, view: &mut ScalarView<'a, T, E>, buf: &'a [u8], offset: usize) {
        view.bytes = &buf[offset..offset + T::SIZE];
    }

    #[inline]
    fn parse<'a>(
        &self,
        view: &mut ScalarView<'a, T, E>,
        buf: &'a [u8],
        offset: usize,
    ) -> Result<usize> {
        let end = ensure_available(buf, offset, T::SIZE)?;
        view.bytes = &buf[offset..end];
        Ok(end)
    }
}

impl<T: Scalar, E: ByteOrder> ConstSized for Primitive<T, E> {
    #[inline]
    fn const_size_bytes(&self) -> usize {
        T::SIZE
    }
}

pub type U8 = Primitive<u8, LittleEndian>;
pub type I8 = Primitive<i8, LittleEndian>;
pub type U16Le = Primitive<u16, LittleEndian>;
pub type U16Be = Primitive<u16, BigEndian>;
pub type I16Le = Primitive<i16, LittleEndian>;
pub type I16Be = Primitive<i16, BigEndian>;
pub type U32Le = Primitive<u32, LittleEndian>;
pub type U32Be = Primitive<u32, BigEndian>;
pub type I32Le = Primitive<i32, LittleEndian>;
pub type I32Be = Primitive<i32, BigEndian>;
pub type U64Le = Primitive<u64, LittleEndian>;
pub type U64Be = Primitive<u64, BigEndian>;
pub type I64Le = Primitive<i64, LittleEndian>;
pub type I64Be = Primitive<i64, BigEndian>;
pub type F32Le = Primitive<f32, LittleEndian>;
pub type F32Be = Primitive<f32, BigEndian>;
pub type F64Le = Primitive<f64, LittleEndian>;
pub type F64Be = Primitive<f64, BigEndian>;
