//! Cursor-position pseudo-codec.

use crate::{Codec, Cursor, Error};
use bytes::BufMut;

/// Yields the read position without consuming bytes.
///
/// Packing contributes nothing (the input value is ignored); unpacking
/// returns the cursor's current offset from the start of the buffer. Placed
/// as the trailing member of a format, it reports how many bytes the record
/// consumed, which is how a caller resumes parsing or verifies termination.
///
/// As a pseudo-codec it is exempt from the round-trip law.
pub struct Position;

impl Codec for Position {
    type Value = usize;

    fn write(_: &usize, _: &mut impl BufMut) -> Result<(), Error> {
        Ok(())
    }

    fn size(_: &usize) -> usize {
        0
    }

    fn read(cursor: &mut Cursor<'_>) -> Result<usize, Error> {
        Ok(cursor.position())
    }
}
