//! Error types that can occur when packing or unpacking.

use thiserror::Error;

/// Error type for packing and unpacking operations.
///
/// Every failure is reported at its point of detection and surfaced to the
/// caller unchanged; there is no local recovery. After an unpack error the
/// cursor position is unspecified and partial results must not be trusted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A value handed to pack violates its codec's length precondition.
    ///
    /// Carries the codec name, the observed value length, and the limit the
    /// codec can represent.
    #[error("{0}: invalid value length {1} (limit {2})")]
    InvalidInput(&'static str, usize, usize),

    /// An unpack required more bytes than remain in the buffer.
    ///
    /// Carries the name of the codec that was being decoded.
    #[error("end of buffer while reading {0}")]
    OutOfBounds(&'static str),

    /// A variable-length integer decodes to a value exceeding its declared
    /// bit-width.
    #[error("compressed integer exceeds {0} bits")]
    Overlong(u32),

    /// A strict unpack left bytes unconsumed.
    ///
    /// Carries the number of bytes consumed and the total buffer length.
    #[error("incomplete parse: consumed {0} of {1} bytes")]
    IncompleteParse(usize, usize),
}
