//! Pack heterogeneous values into compact byte strings.
//!
//! # Overview
//!
//! A binary packing library built around a small codec algebra:
//! - Every codec is a zero-sized marker type whose parameters (byte order,
//!   width, padding policy, length encoding) are fixed at definition time.
//! - Tuples of codecs form a record format: packing zips the codecs with a
//!   matching tuple of values into one concatenated byte string, and
//!   unpacking walks a read cursor across the bytes to rebuild the tuple.
//!
//! There are no type tags, separators, or headers on the wire; the layout is
//! exactly the concatenation of each member's encoding.
//!
//! # Supported Codecs
//!
//! - [Integral]: fixed-width integers in a declared byte order
//! - [varint::UInt] / [varint::SInt]: variable-length integers with a
//!   continuation bit, in either digit order, signed via ZigZag
//! - [FixedString]: fixed-length byte strings with a pluggable
//!   [padding](crate::padding) strategy
//! - [Varchar]: length-prefixed byte strings
//! - [Sequence]: length-prefixed homogeneous lists of any codec
//! - [Position]: a pseudo-codec reporting the cursor offset, for resuming
//!   partial parses
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use wirepack::{Big, Codec, FixedString, Integral, Space, UInt, Varchar};
//!
//! // A record layout, declared once as a type.
//! type Record = (
//!     Integral<u16, Big>,
//!     FixedString<2, Space>,
//!     UInt<u64>,
//!     Varchar<UInt<u64>>,
//! );
//!
//! let value = (
//!     1u16,
//!     Bytes::from_static(b"a"),
//!     300u64,
//!     Bytes::from_static(b"abc"),
//! );
//! let packed = Record::pack(&value)?;
//! assert_eq!(
//!     &packed[..],
//!     &[0x00, 0x01, 0x61, 0x20, 0xAC, 0x02, 0x03, 0x61, 0x62, 0x63],
//! );
//!
//! // Strict unpacking requires the buffer to be fully consumed.
//! assert_eq!(Record::unpack(&packed)?, value);
//! # Ok::<(), wirepack::Error>(())
//! ```

pub mod codec;
pub mod cursor;
pub mod error;
pub mod order;
pub mod padding;
pub mod types;
pub mod varint;

// Re-export main types and traits
pub use codec::Codec;
pub use cursor::Cursor;
pub use error::Error;
pub use order::{Big, ByteOrder, Little, Native};
pub use padding::{Exact, Fill, Null, Padding, Space};
pub use types::{FixedString, Integral, Position, Sequence, Varchar};
pub use varint::{SInt, UInt};
