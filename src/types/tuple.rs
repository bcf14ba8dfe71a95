//! Format combinator: tuples of codecs acting as one record codec.
//!
//! A tuple `(C0, …, Ck)` of codecs is itself a codec whose value is the
//! tuple of member values. Members are applied strictly left-to-right in
//! both directions; there is no lookahead, and each member commits the
//! cursor as it consumes. Arity and per-slot value types are fixed in the
//! type, so a mismatched pack argument is a compile error.

use crate::{Codec, Cursor, Error};
use bytes::BufMut;
use paste::paste;

// The empty format packs to the empty byte string.
impl Codec for () {
    type Value = ();

    fn write(_: &(), _: &mut impl BufMut) -> Result<(), Error> {
        Ok(())
    }

    fn size(_: &()) -> usize {
        0
    }

    fn read(_: &mut Cursor<'_>) -> Result<(), Error> {
        Ok(())
    }
}

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<C $index>]: Codec ),*> Codec for ( $( [<C $index>], )* ) {
                type Value = ( $( [<C $index>]::Value, )* );

                fn write(value: &Self::Value, buf: &mut impl BufMut) -> Result<(), Error> {
                    $( [<C $index>]::write(&value.$index, buf)?; )*
                    Ok(())
                }

                fn size(value: &Self::Value) -> usize {
                    0 $( + [<C $index>]::size(&value.$index) )*
                }

                fn read(cursor: &mut Cursor<'_>) -> Result<Self::Value, Error> {
                    Ok(( $( [<C $index>]::read(cursor)?, )* ))
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

#[cfg(test)]
mod tests {
    use crate::{
        order::Big,
        padding::Space,
        types::{FixedString, Integral, Varchar},
        varint::UInt,
        Codec, Error,
    };
    use bytes::Bytes;

    type Record = (
        Integral<u16, Big>,
        FixedString<2, Space>,
        UInt<u64>,
        Varchar<UInt<u64>>,
    );

    #[test]
    fn test_conformity() {
        let value = (
            1u16,
            Bytes::from_static(b"a"),
            300u64,
            Bytes::from_static(b"abc"),
        );
        let packed = Record::pack(&value).unwrap();
        assert_eq!(
            &packed[..],
            &[0x00, 0x01, 0x61, 0x20, 0xAC, 0x02, 0x03, 0x61, 0x62, 0x63]
        );
        assert_eq!(Record::unpack(&packed).unwrap(), value);
    }

    #[test]
    fn test_left_to_right() {
        // The second member starts exactly where the first one stopped.
        type C = (UInt<u64>, Integral<u8, Big>);
        let packed = C::pack(&(300, 7)).unwrap();
        assert_eq!(&packed[..], &[0xAC, 0x02, 0x07]);
        assert_eq!(C::unpack(&packed).unwrap(), (300, 7));
    }

    #[test]
    fn test_nested() {
        type C = (Integral<u8, Big>, (Integral<u8, Big>, Integral<u8, Big>));
        let packed = C::pack(&(1, (2, 3))).unwrap();
        assert_eq!(&packed[..], &[0x01, 0x02, 0x03]);
        assert_eq!(C::unpack(&packed).unwrap(), (1, (2, 3)));
    }

    #[test]
    fn test_empty() {
        let packed = <()>::pack(&()).unwrap();
        assert!(packed.is_empty());
        <()>::unpack(&packed).unwrap();
    }

    #[test]
    fn test_member_error_position() {
        // The first member consumes two bytes, then the varchar length
        // overruns the buffer.
        type C = (Integral<u16, Big>, Varchar<UInt<u64>>);
        assert_eq!(
            C::unpack(&[0x00, 0x01, 0x05, 0x61]),
            Err(Error::OutOfBounds("varchar"))
        );
    }

    #[test]
    fn test_single() {
        type C = (UInt<u32>,);
        let packed = C::pack(&(128,)).unwrap();
        assert_eq!(&packed[..], &[0x80, 0x01]);
        assert_eq!(C::unpack(&packed).unwrap(), (128,));
    }
}
