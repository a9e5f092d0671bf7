//! Binary formats embedded into zobj files
//!
//! POD layouts with fixed offsets and fixed-width, zero-padded text fields.
//! Layout constants for the host file itself live in [`crate::ZOBJ_FORMAT`].
//!
//! Records implement the [`BinarySerializable`] trait for consistent
//! serialization/deserialization.

pub mod field;
pub mod model_info;
mod serialization;

pub use field::*;
pub use model_info::*;
pub use serialization::BinarySerializable;
