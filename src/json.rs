//! JSON interchange for owned values.
//!
//! Conversions go through [`serde_json::Value`]. Reading is checked: a JSON
//! value of the wrong shape, a number out of range, or an invalid enum value
//! is [`ParseError::Malformed`]. Writing is total.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wireview::scalar::U8;
//! use wireview::seq::VectorType;
//! use wireview::{JsonType, ParseError};
//!
//! let ty = VectorType::new(U8::new());
//! assert_eq!(ty.from_json(&json!([1, 2, 255])).unwrap(), vec![1, 2, 255]);
//! assert_eq!(ty.from_json(&json!([256])), Err(ParseError::Malformed));
//! assert_eq!(ty.to_json(&vec![7]), json!([7]));
//! ```

use byteorder::ByteOrder;
use serde_json::Value;

use crate::contract::{ConstSized, SelfSized, WireType};
use crate::error::{ParseError, Result};
use crate::scalar::{Enumeration, Primitive, Scalar, WireEnum};
use crate::seq::{ArrayType, ListType, VectorType};

/// Conversion of an owned value to and from JSON.
pub trait JsonType: WireType {
    /// Read an owned value from JSON.
    ///
    /// # Errors
    ///
    /// [`ParseError::Malformed`] if `value` does not describe a valid value.
    fn from_json(&self, value: &Value) -> Result<Self::Owned>;

    /// Write an owned value as JSON.
    fn to_json(&self, owned: &Self::Owned) -> Value;
}

/// A scalar with a JSON number representation.
pub trait JsonScalar: Scalar {
    /// `None` if `value` is not a number representable as `Self`.
    fn from_json_value(value: &Value) -> Option<Self>;

    fn to_json_value(self) -> Value;
}

macro_rules! impl_json_scalar {
    ($via:ident => $($ty:ty),*) => {
        $(
            impl JsonScalar for $ty {
                fn from_json_value(value: &Value) -> Option<Self> {
                    value.$via().and_then(|n| <$ty>::try_from(n).ok())
                }

                fn to_json_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_json_scalar!(as_u64 => u8, u16, u32, u64);
impl_json_scalar!(as_i64 => i8, i16, i32, i64);

/// JSON has no NaN or infinity. Non-finite floats are written as `null`,
/// and numbers that are not finite in the target type are rejected.
impl JsonScalar for f32 {
    fn from_json_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|n| n as f32).filter(|n| n.is_finite())
    }

    fn to_json_value(self) -> Value {
        Value::from(self)
    }
}

impl JsonScalar for f64 {
    fn from_json_value(value: &Value) -> Option<Self> {
        value.as_f64().filter(|n| n.is_finite())
    }

    fn to_json_value(self) -> Value {
        Value::from(self)
    }
}

impl<T: JsonScalar, E: ByteOrder> JsonType for Primitive<T, E> {
    fn from_json(&self, value: &Value) -> Result<T> {
        T::from_json_value(value).ok_or(ParseError::Malformed)
    }

    fn to_json(&self, owned: &T) -> Value {
        owned.to_json_value()
    }
}

impl<E> JsonType for Enumeration<E>
where
    E: WireEnum,
    E::Repr: JsonScalar,
{
    fn from_json(&self, value: &Value) -> Result<E> {
        let raw = E::Repr::from_json_value(value).ok_or(ParseError::Malformed)?;
        let parsed = E::from_raw(raw);
        if parsed.is_valid() {
            Ok(parsed)
        } else {
            Err(ParseError::Malformed)
        }
    }

    fn to_json(&self, owned: &E) -> Value {
        owned.to_raw().to_json_value()
    }
}

/// Read a JSON array of at most `max_len` elements.
fn elements_from_json<T: JsonType>(inner: &T, value: &Value, max_len: usize) -> Result<Vec<T::Owned>> {
    let items = value.as_array().ok_or(ParseError::Malformed)?;
    if items.len() > max_len {
        return Err(ParseError::Malformed);
    }
    items.iter().map(|item| inner.from_json(item)).collect()
}

fn elements_to_json<T: JsonType>(inner: &T, elements: &[T::Owned]) -> Value {
    Value::Array(elements.iter().map(|e| inner.to_json(e)).collect())
}

impl<T: ConstSized + JsonType, const N: usize> JsonType for ArrayType<T, N> {
    fn from_json(&self, value: &Value) -> Result<Vec<T::Owned>> {
        let elements = elements_from_json(self.inner(), value, N)?;
        if elements.len() != N {
            return Err(ParseError::Malformed);
        }
        Ok(elements)
    }

    fn to_json(&self, owned: &Vec<T::Owned>) -> Value {
        elements_to_json(self.inner(), owned)
    }
}

impl<T: ConstSized + JsonType> JsonType for VectorType<T> {
    fn from_json(&self, value: &Value) -> Result<Vec<T::Owned>> {
        elements_from_json(self.inner(), value, self.max_len())
    }

    fn to_json(&self, owned: &Vec<T::Owned>) -> Value {
        elements_to_json(self.inner(), owned)
    }
}

impl<T: SelfSized + JsonType> JsonType for ListType<T> {
    fn from_json(&self, value: &Value) -> Result<Vec<T::Owned>> {
        elements_from_json(self.inner(), value, self.max_len())
    }

    fn to_json(&self, owned: &Vec<T::Owned>) -> Value {
        elements_to_json(self.inner(), owned)
    }
}
