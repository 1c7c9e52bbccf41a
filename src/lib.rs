//! # wireview
//!
//! Runtime for schema-generated binary message types.
//!
//! A schema compiler emits one wire type per message; this crate supplies the
//! generic machinery those types are built from: the view/owned contracts,
//! the leaf scalars, and the three sequence adaptors.
//!
//! ## Architecture
//!
//! - **Views** are bound to a borrowed buffer and decode lazily. They are
//!   reused across parses to avoid per-message allocation.
//! - **Owned values** are materialized from views with `build` and written
//!   back with `serialize_into`.
//! - **Errors** are [`ParseError::NotEnoughData`] or [`ParseError::Malformed`],
//!   passed through unchanged from the innermost element.
//!
//! ## Example
//!
//! ```
//! use wireview::scalar::U16Le;
//! use wireview::seq::VectorType;
//! use wireview::{ParseError, WireType};
//!
//! let ty = VectorType::new(U16Le::new());
//! let owned = vec![1, 2, 3];
//!
//! let mut buf = vec![0u8; ty.size_bytes(&owned)];
//! assert_eq!(ty.serialize_into(&owned, &mut buf, 0), 6);
//!
//! // The count is carried by the enclosing message, not the vector.
//! let mut view = ty.new_view();
//! ty.parse(&mut view, &buf, 0, 3).unwrap();
//! assert_eq!(view.get(2).unwrap().get(), 3);
//!
//! assert_eq!(ty.parse(&mut view, &buf, 0, 4), Err(ParseError::NotEnoughData));
//! ```

pub mod codec;
pub mod contract;
pub mod error;
pub mod json;
pub mod scalar;
pub mod seq;

pub use codec::WireCodec;
pub use contract::{ConstSized, SelfSized, WireType};
pub use error::{ParseError, Result, WrongLength};
pub use json::{JsonScalar, JsonType};
