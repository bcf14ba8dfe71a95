//! The codec contract shared by every element and format.

use crate::{Cursor, Error};
use bytes::{BufMut, Bytes, BytesMut};

/// A named strategy that maps one logical value to and from a byte range.
///
/// Codecs are zero-sized marker types: every parameter (byte order, width,
/// padding policy, length encoding) is fixed in the type at definition time,
/// so the wire layout is known before any value is presented. Tuples of
/// codecs implement `Codec` as well, composing element encodings into a
/// single record format.
///
/// `write` and `read` are mutual inverses on the values `write` accepts,
/// except where a codec documents a lossy transform (padded strings) or is a
/// pseudo-codec ([`Position`](crate::Position)).
pub trait Codec {
    /// The decoded value type.
    type Value;

    /// Serializes `value` into `buf`.
    ///
    /// Fails with [`Error::InvalidInput`] if `value` violates the codec's
    /// precondition; nothing is written in that case beyond what preceding
    /// codecs of an enclosing format already emitted.
    fn write(value: &Self::Value, buf: &mut impl BufMut) -> Result<(), Error>;

    /// Returns the exact number of bytes `write` emits for `value`.
    ///
    /// Only meaningful for values `write` accepts; for rejected values the
    /// result is a best-effort estimate.
    fn size(value: &Self::Value) -> usize;

    /// Deserializes a value, advancing `cursor` past the consumed bytes.
    fn read(cursor: &mut Cursor<'_>) -> Result<Self::Value, Error>;

    /// Packs `value` into a freshly allocated byte string.
    ///
    /// No partial output is retained on failure.
    fn pack(value: &Self::Value) -> Result<Bytes, Error> {
        let size = Self::size(value);
        let mut buf = BytesMut::with_capacity(size);
        Self::write(value, &mut buf)?;
        assert_eq!(buf.len(), size);
        Ok(buf.freeze())
    }

    /// Unpacks a value from `buf`, requiring full consumption.
    ///
    /// Fails with [`Error::IncompleteParse`] if bytes remain after the value
    /// has been decoded.
    fn unpack(buf: &[u8]) -> Result<Self::Value, Error> {
        let mut cursor = Cursor::new(buf);
        let value = Self::read(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(Error::IncompleteParse(cursor.position(), buf.len()));
        }
        Ok(value)
    }

    /// Unpacks a value from the front of `buf`, returning it together with
    /// the position one past the last byte consumed.
    fn unpack_prefix(buf: &[u8]) -> Result<(Self::Value, usize), Error> {
        let mut cursor = Cursor::new(buf);
        let value = Self::read(&mut cursor)?;
        let end = cursor.position();
        Ok((value, end))
    }
}
