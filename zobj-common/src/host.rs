//! Host zobj validation and in-place record patching
//!
//! The record offset is hard-coded relative to the region ModLoader64
//! reserves, so a buffer is only patched after it has been shown to carry
//! that region. Writing into a file without it would overwrite unrelated
//! model data.

use crate::ZOBJ_FORMAT;
use crate::formats::BinarySerializable;

/// Reasons a buffer is not a usable host zobj
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Buffer cannot hold the ML64 region
    #[error("zobj is too small ({len:#x} bytes, need at least {min:#x})")]
    TooSmall { len: usize, min: usize },

    /// ML64 signature not found at its fixed offset
    #[error("did not find ModLoader64 header in zobj (expected \"MODLOADER64\" at {offset:#x})")]
    MissingSignature { offset: usize },
}

/// Check that `buffer` is a zobj carrying the ModLoader64 region.
pub fn validate_host(buffer: &[u8]) -> Result<(), HostError> {
    if buffer.len() < ZOBJ_FORMAT.min_size {
        return Err(HostError::TooSmall {
            len: buffer.len(),
            min: ZOBJ_FORMAT.min_size,
        });
    }

    if &buffer[ZOBJ_FORMAT.signature_range()] != ZOBJ_FORMAT.ml64_signature {
        return Err(HostError::MissingSignature {
            offset: ZOBJ_FORMAT.ml64_header_offset,
        });
    }

    Ok(())
}

/// Overwrite the model info region of `buffer` with `record`.
///
/// Validates the host first; on success exactly `T::SIZE` bytes starting at
/// the model info offset change and the length is untouched.
pub fn write_record<T: BinarySerializable>(buffer: &mut [u8], record: &T) -> Result<(), HostError> {
    validate_host(buffer)?;

    let start = ZOBJ_FORMAT.model_info_offset();
    let end = start + T::SIZE;
    if end > buffer.len() {
        return Err(HostError::TooSmall {
            len: buffer.len(),
            min: end,
        });
    }
    buffer[start..end].copy_from_slice(&record.serialize());

    tracing::debug!("Wrote {} byte model info record at {:#x}", T::SIZE, start);
    Ok(())
}

/// Read the model info record back out of a host buffer.
///
/// Returns `None` if the buffer is not a valid host or the region does not
/// hold a record of type `T`.
pub fn read_record<T: BinarySerializable>(buffer: &[u8]) -> Option<T> {
    validate_host(buffer).ok()?;
    T::deserialize(&buffer[ZOBJ_FORMAT.model_info_offset()..])
}
