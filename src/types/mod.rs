//! The element codecs and the tuple format combinator.

pub mod integral;
pub mod position;
pub mod sequence;
pub mod string;
pub mod tuple;

pub use integral::Integral;
pub use position::Position;
pub use sequence::Sequence;
pub use string::{FixedString, Varchar};
