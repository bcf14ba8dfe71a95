//! Fixed-width integer codec.

use crate::{
    order::{Big, ByteOrder, FixedInt},
    Codec, Cursor, Error,
};
use bytes::BufMut;
use std::marker::PhantomData;

/// Error label for truncated reads.
const LABEL: &str = "integer";

/// Fixed-width two's-complement integer codec.
///
/// Emits exactly `T::SIZE` bytes in the declared byte order `O` (big-endian
/// by default). Packing is infallible; unpacking fails only when fewer than
/// `T::SIZE` bytes remain.
pub struct Integral<T, O = Big>(PhantomData<(T, O)>);

impl<T: FixedInt, O: ByteOrder> Codec for Integral<T, O> {
    type Value = T;

    fn write(value: &T, buf: &mut impl BufMut) -> Result<(), Error> {
        O::put(*value, buf);
        Ok(())
    }

    fn size(_: &T) -> usize {
        T::SIZE
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<T, Error> {
        let raw = cursor.take(T::SIZE, LABEL)?;
        Ok(O::get(raw))
    }
}
