//! Shared types for zobj metadata tooling
//!
//! A zobj is an opaque game-asset binary produced by an external toolchain.
//! ModLoader64 reserves a region at a fixed offset inside it; this crate
//! describes that region and the player model info record that lives there.
//!
//! - [`ZOBJ_FORMAT`] - the layout constants (sizes, offsets, signature)
//! - [`formats`] - the [`EmbeddedRecord`] and the fixed-width field writer
//! - [`host`] - validation of host buffers and in-place record patching
//! - [`fs`] - size-capped file reading

pub mod formats;
pub mod fs;
pub mod host;
pub mod zobj_format;

pub use formats::{BinarySerializable, EmbeddedRecord, write_field};
pub use host::{HostError, read_record, validate_host, write_record};
pub use zobj_format::{ZOBJ_FORMAT, ZobjFormat};
