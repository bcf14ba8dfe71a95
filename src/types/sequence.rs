//! Length-prefixed sequence codec.

use crate::{
    varint::{UInt, UPrim},
    Codec, Cursor, Error,
};
use bytes::BufMut;
use std::marker::PhantomData;

const LABEL: &str = "sequence";

/// Length-prefixed homogeneous sequence codec.
///
/// `L` encodes the element count, `E` each element; elements are decoded
/// eagerly, in order, into a `Vec`. Any element failure propagates
/// unchanged.
pub struct Sequence<E, L = UInt<u64>>(PhantomData<(E, L)>);

impl<E: Codec, L: Codec> Codec for Sequence<E, L>
where
    L::Value: UPrim,
{
    type Value = Vec<E::Value>;

    fn write(value: &Vec<E::Value>, buf: &mut impl BufMut) -> Result<(), Error> {
        let Some(len) = L::Value::from_usize(value.len()) else {
            let limit = L::Value::MAX.to_usize().unwrap_or(usize::MAX);
            return Err(Error::InvalidInput(LABEL, value.len(), limit));
        };
        L::write(&len, buf)?;
        for item in value {
            E::write(item, buf)?;
        }
        Ok(())
    }

    fn size(value: &Vec<E::Value>) -> usize {
        let len = L::Value::from_usize(value.len()).unwrap_or(L::Value::MAX);
        L::size(&len) + value.iter().map(E::size).sum::<usize>()
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<Vec<E::Value>, Error> {
        let len = L::read(cursor)?;
        let Some(len) = len.to_usize() else {
            return Err(Error::OutOfBounds(LABEL));
        };
        // Preallocation is capped at what the buffer could possibly hold.
        let mut items = Vec::with_capacity(len.min(cursor.remaining()));
        for _ in 0..len {
            items.push(E::read(cursor)?);
        }
        Ok(items)
    }
}
