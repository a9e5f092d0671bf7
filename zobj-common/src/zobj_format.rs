//! Zobj layout specification for ModLoader64 player models.
//!
//! This module defines the `ZobjFormat` struct which serves as the single source of truth
//! for every offset, size and signature the embedder relies on.
//!
//! # Example
//!
//! ```
//! use zobj_common::ZOBJ_FORMAT;
//!
//! assert_eq!(ZOBJ_FORMAT.min_size, 0x5800);
//! assert_eq!(ZOBJ_FORMAT.ml64_signature, b"MODLOADER64");
//! assert_eq!(ZOBJ_FORMAT.model_info_offset(), 0x5500);
//! ```

/// Layout of the ModLoader64-reserved region inside a zobj.
///
/// The offsets are absolute positions in the zobj file. Nothing here is
/// relocatable: the upstream toolchain always places the ML64 header at the
/// same address, and the model info record lives at a fixed distance from it.
#[derive(Debug, Clone, Copy)]
pub struct ZobjFormat {
    /// Smallest file that can hold the ML64 region (also the host/descriptor size threshold)
    pub min_size: usize,

    /// Absolute offset of the ML64 header
    pub ml64_header_offset: usize,

    /// Signature expected at the start of the ML64 header (no terminator)
    pub ml64_signature: &'static [u8; 11],

    /// Distance from the ML64 header to the model info record
    pub model_info_from_ml64: usize,

    /// Size of the ML64 object pool that follows the header
    pub ml64_object_pool_size: usize,
}

impl ZobjFormat {
    /// Create a new zobj layout specification.
    pub const fn new(
        min_size: usize,
        ml64_header_offset: usize,
        ml64_signature: &'static [u8; 11],
        model_info_from_ml64: usize,
        ml64_object_pool_size: usize,
    ) -> Self {
        Self {
            min_size,
            ml64_header_offset,
            ml64_signature,
            model_info_from_ml64,
            ml64_object_pool_size,
        }
    }

    /// Absolute offset of the embedded model info record.
    pub const fn model_info_offset(&self) -> usize {
        self.ml64_header_offset + self.model_info_from_ml64
    }

    /// Byte range of the ML64 signature.
    pub const fn signature_range(&self) -> std::ops::Range<usize> {
        self.ml64_header_offset..self.ml64_header_offset + self.ml64_signature.len()
    }
}

/// ModLoader64 zobj layout.
///
/// - ML64 header at `0x5000`, signature `MODLOADER64`
/// - Object pool of `0x800` bytes, so a valid zobj is at least `0x5800` bytes
/// - Player model info record at `0x5500`
pub const ZOBJ_FORMAT: ZobjFormat = ZobjFormat::new(0x5800, 0x5000, b"MODLOADER64", 0x500, 0x800);
