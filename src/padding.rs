//! Padding strategies for fixed-length strings.

use crate::Error;
use bytes::BufMut;

/// Error label shared with the fixed-length string codec.
const LABEL: &str = "fixed string";

/// A policy for fitting a value into a declared fixed length.
///
/// `pad` and `strip` are inverses except where a strategy documents a lossy
/// case ([Fill] on values whose trailing bytes equal the pad byte).
pub trait Padding {
    /// Writes `value` extended to exactly `len` bytes.
    ///
    /// Fails with [`Error::InvalidInput`] if `value` cannot fit.
    fn pad(value: &[u8], len: usize, buf: &mut impl BufMut) -> Result<(), Error>;

    /// Removes padding from a decoded slice.
    fn strip(raw: &[u8]) -> &[u8];
}

/// No padding: the value's length must equal the declared length.
pub struct Exact;

impl Padding for Exact {
    fn pad(value: &[u8], len: usize, buf: &mut impl BufMut) -> Result<(), Error> {
        if value.len() != len {
            return Err(Error::InvalidInput(LABEL, value.len(), len));
        }
        buf.put_slice(value);
        Ok(())
    }

    fn strip(raw: &[u8]) -> &[u8] {
        raw
    }
}

/// Right-pads with the byte `B`; decoding strips the maximal trailing run
/// of `B`.
///
/// A value whose own trailing bytes equal `B` therefore does not round-trip.
pub struct Fill<const B: u8>;

impl<const B: u8> Padding for Fill<B> {
    fn pad(value: &[u8], len: usize, buf: &mut impl BufMut) -> Result<(), Error> {
        if value.len() > len {
            return Err(Error::InvalidInput(LABEL, value.len(), len));
        }
        buf.put_slice(value);
        buf.put_bytes(B, len - value.len());
        Ok(())
    }

    fn strip(raw: &[u8]) -> &[u8] {
        let end = raw.iter().rposition(|&b| b != B).map_or(0, |i| i + 1);
        &raw[..end]
    }
}

/// Pads with `0x00`.
pub type Null = Fill<0>;

/// Pads with ASCII space.
pub type Space = Fill<{ b' ' }>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let mut buf = Vec::new();
        Exact::pad(b"abcd", 4, &mut buf).unwrap();
        assert_eq!(buf, b"abcd");
        assert_eq!(Exact::strip(b"ab  "), b"ab  ");

        assert_eq!(
            Exact::pad(b"abc", 4, &mut buf),
            Err(Error::InvalidInput("fixed string", 3, 4))
        );
        assert_eq!(
            Exact::pad(b"abcde", 4, &mut buf),
            Err(Error::InvalidInput("fixed string", 5, 4))
        );
    }

    #[test]
    fn test_fill() {
        let mut buf = Vec::new();
        Space::pad(b"ab", 4, &mut buf).unwrap();
        assert_eq!(buf, b"ab  ");
        assert_eq!(Space::strip(b"ab  "), b"ab");

        assert_eq!(
            Space::pad(b"abcde", 4, &mut Vec::new()),
            Err(Error::InvalidInput("fixed string", 5, 4))
        );
    }

    #[test]
    fn test_fill_strips_all() {
        assert_eq!(Null::strip(&[0, 0, 0]), b"");
        assert_eq!(Null::strip(&[1, 0, 2]), &[1, 0, 2]);
        assert_eq!(Null::strip(&[1, 0, 0]), &[1]);
    }

    #[test]
    fn test_fill_exact_length() {
        let mut buf = Vec::new();
        Null::pad(b"abcd", 4, &mut buf).unwrap();
        assert_eq!(buf, b"abcd");
    }
}
