//! Whole-value helpers on top of the wire type contracts.
//!
//! [`WireCodec`] covers the common top-level calls: serialize an owned value
//! into a right-sized buffer, decode a buffer straight to an owned value, and
//! deep-copy an owned value.
//!
//! # Example
//!
//! ```
//! use wireview::scalar::U32Be;
//! use wireview::seq::ArrayType;
//! use wireview::WireCodec;
//!
//! let ty = ArrayType::<_, 2>::new(U32Be::new());
//! let bytes = WireCodec::encode(&ty, &vec![1, 2]);
//! assert_eq!(&bytes[..], &[0, 0, 0, 1, 0, 0, 0, 2]);
//!
//! let decoded = WireCodec::decode(&ty, &bytes).unwrap();
//! assert_eq!(decoded, vec![1, 2]);
//! ```

use bytes::{Bytes, BytesMut};

use crate::contract::{SelfSized, WireType};
use crate::error::Result;

/// Top-level encode/decode helpers.
///
/// A marker struct with associated functions, so that the wire type is
/// chosen at compile time.
pub struct WireCodec;

impl WireCodec {
    /// Serialize `owned` into a new buffer of exactly `size_bytes` bytes.
    pub fn encode<T: WireType>(ty: &T, owned: &T::Owned) -> Bytes {
        let mut buf = BytesMut::zeroed(ty.size_bytes(owned));
        let end = ty.serialize_into(owned, &mut buf[..], 0);
        debug_assert_eq!(end, buf.len(), "size_bytes disagrees with serialize_into");
        buf.freeze()
    }

    /// Append `owned` to `out`. Returns the number of bytes written.
    pub fn encode_into<T: WireType>(ty: &T, owned: &T::Owned, out: &mut BytesMut) -> usize {
        let start = out.len();
        let size = ty.size_bytes(owned);
        out.resize(start + size, 0);
        let end = ty.serialize_into(owned, &mut out[..], start);
        debug_assert_eq!(end, start + size, "size_bytes disagrees with serialize_into");
        size
    }

    /// Parse a value at the start of `buf` and materialize it.
    ///
    /// Bytes after the value are ignored; use
    /// [`decode_prefix`](Self::decode_prefix) to learn where it ended.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`](crate::ParseError) raised by `parse`.
    pub fn decode<T: SelfSized>(ty: &T, buf: &[u8]) -> Result<T::Owned> {
        Self::decode_prefix(ty, buf).map(|(owned, _)| owned)
    }

    /// Like [`decode`](Self::decode), also returning the bytes consumed.
    pub fn decode_prefix<T: SelfSized>(ty: &T, buf: &[u8]) -> Result<(T::Owned, usize)> {
        let mut view = ty.new_view();
        let end = ty.parse(&mut view, buf, 0)?;
        let mut owned = ty.new_owned();
        ty.build(&mut owned, &view);
        Ok((owned, end))
    }

    /// Deep copy through [`WireType::clone_owned_into`].
    pub fn duplicate<T: WireType>(ty: &T, owned: &T::Owned) -> T::Owned {
        let mut copy = ty.new_owned();
        ty.clone_owned_into(&mut copy, owned);
        copy
    }
}
