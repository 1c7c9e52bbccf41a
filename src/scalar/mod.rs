//! Leaf wire types shipped with the runtime.
//!
//! - [`Primitive`] - fixed-width integers and floats in either byte order
//! - [`Enumeration`] - enums validated against a declared set of values
//!
//! Both are constant-size, so they can be elements of arrays and vectors.
//! [`EnumSet`] holds a set of enum values as a bitset.
//! Generated code may define further leaves; anything implementing the
//! [`contract`](crate::contract) traits composes the same way.

mod enum_set;
mod enumeration;
mod primitive;

pub use byteorder::{BigEndian, ByteOrder, LittleEndian};
pub use enum_set::{EnumBound, EnumRepr, EnumSet};
pub use enumeration::{EnumView, Enumeration, WireEnum};
pub use primitive::{
    Primitive, Scalar, ScalarView, F32Be, F32Le, F64Be, F64Le, I16Be, I16Le, I32Be, I32Le, I64Be,
    I64Le, I8, U16Be, U16Le, U32Be, U32Le, U64Be, U64Le, U8,
};
