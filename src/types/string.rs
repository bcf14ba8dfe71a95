//! Byte string codecs.
//!
//! Strings are opaque byte sequences; no character encoding is assumed.
//! Decoded values are copied out of the input buffer into owned [Bytes].

use crate::{
    padding::{Exact, Padding},
    varint::{UInt, UPrim},
    Codec, Cursor, Error,
};
use bytes::{BufMut, Bytes};
use std::marker::PhantomData;

const FIXED_LABEL: &str = "fixed string";
const VARCHAR_LABEL: &str = "varchar";

/// Fixed-length string codec.
///
/// Occupies exactly `N` bytes on the wire; the padding strategy `P` decides
/// how shorter values are extended and how decoded bytes are trimmed. With
/// the default [Exact] strategy, only values of exactly `N` bytes are
/// accepted and decoding returns all `N` bytes untouched.
pub struct FixedString<const N: usize, P = Exact>(PhantomData<P>);

impl<const N: usize, P: Padding> Codec for FixedString<N, P> {
    type Value = Bytes;

    fn write(value: &Bytes, buf: &mut impl BufMut) -> Result<(), Error> {
        P::pad(value, N, buf)
    }

    fn size(_: &Bytes) -> usize {
        N
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Bytes, Error> {
        let raw = cursor.take(N, FIXED_LABEL)?;
        Ok(Bytes::copy_from_slice(P::strip(raw)))
    }
}

/// Length-prefixed string codec.
///
/// `L` encodes the byte count and may be any codec with an unsigned integer
/// value, compressed or fixed-width.
pub struct Varchar<L = UInt<u64>>(PhantomData<L>);

impl<L: Codec> Codec for Varchar<L>
where
    L::Value: UPrim,
{
    type Value = Bytes;

    fn write(value: &Bytes, buf: &mut impl BufMut) -> Result<(), Error> {
        let Some(len) = L::Value::from_usize(value.len()) else {
            let limit = L::Value::MAX.to_usize().unwrap_or(usize::MAX);
            return Err(Error::InvalidInput(VARCHAR_LABEL, value.len(), limit));
        };
        L::write(&len, buf)?;
        buf.put_slice(value);
        Ok(())
    }

    fn size(value: &Bytes) -> usize {
        let len = L::Value::from_usize(value.len()).unwrap_or(L::Value::MAX);
        L::size(&len) + value.len()
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Bytes, Error> {
        let len = L::read(cursor)?;
        // A count that does not fit a usize cannot fit the buffer either.
        let Some(len) = len.to_usize() else {
            return Err(Error::OutOfBounds(VARCHAR_LABEL));
        };
        let raw = cursor.take(len, VARCHAR_LABEL)?;
        Ok(Bytes::copy_from_slice(raw))
    }
}
