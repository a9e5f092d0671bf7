//! Player model info record (embed version 1)
//!
//! Written into the ModLoader64 region of a zobj so loaders can identify the
//! model without parsing it. POD layout, no padding between fields.
//!
//! # Layout
//! ```text
//! 0x00: tag           [u8; 15]  "PLAYERMODELINFO" (no terminator)
//! 0x0F: embed_version u8        1
//! 0x10: internal_name [u8; 64]  zero-padded
//! 0x50: display_name  [u8; 32]  zero-padded
//! 0x70: author_name   [u8; 64]  zero-padded
//! 0xB0: end (176 bytes)
//! ```

use std::borrow::Cow;

use super::field::{read_field, write_field};

/// Tag at the start of the record
pub const MODEL_INFO_TAG: &[u8; 15] = b"PLAYERMODELINFO";

/// The only record layout currently defined
pub const CURRENT_EMBED_VERSION: u8 = 1;

pub const INTERNAL_NAME_FIELD_SIZE: usize = 64;
pub const DISPLAY_NAME_FIELD_SIZE: usize = 32;
pub const AUTHOR_NAME_FIELD_SIZE: usize = 64;

/// Longest text accepted per field (one byte of each field stays zero)
pub const MAX_INTERNAL_NAME_LEN: usize = INTERNAL_NAME_FIELD_SIZE - 1;
pub const MAX_DISPLAY_NAME_LEN: usize = DISPLAY_NAME_FIELD_SIZE - 1;
pub const MAX_AUTHOR_NAME_LEN: usize = AUTHOR_NAME_FIELD_SIZE - 1;

const TAG_OFFSET: usize = 0;
const VERSION_OFFSET: usize = TAG_OFFSET + MODEL_INFO_TAG.len();
const INTERNAL_NAME_OFFSET: usize = VERSION_OFFSET + 1;
const DISPLAY_NAME_OFFSET: usize = INTERNAL_NAME_OFFSET + INTERNAL_NAME_FIELD_SIZE;
const AUTHOR_NAME_OFFSET: usize = DISPLAY_NAME_OFFSET + DISPLAY_NAME_FIELD_SIZE;

/// Embedded player model info record (176 bytes)
///
/// The tag is implied by the type and is not stored. Name fields hold their
/// on-disk representation: text followed by zeros to the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedRecord {
    pub embed_version: u8,
    pub internal_name: [u8; INTERNAL_NAME_FIELD_SIZE],
    pub display_name: [u8; DISPLAY_NAME_FIELD_SIZE],
    pub author_name: [u8; AUTHOR_NAME_FIELD_SIZE],
}

impl EmbeddedRecord {
    pub const SIZE: usize = AUTHOR_NAME_OFFSET + AUTHOR_NAME_FIELD_SIZE;

    /// Build a current-version record from already validated text.
    ///
    /// Each value should fit its field (see the `MAX_*_LEN` constants).
    /// Longer text is cut to the field width on a character boundary, and
    /// then has no trailing zero byte.
    pub fn new(internal_name: &str, display_name: &str, author_name: &str) -> Self {
        let mut record = Self {
            embed_version: CURRENT_EMBED_VERSION,
            internal_name: [0; INTERNAL_NAME_FIELD_SIZE],
            display_name: [0; DISPLAY_NAME_FIELD_SIZE],
            author_name: [0; AUTHOR_NAME_FIELD_SIZE],
        };
        write_field(&mut record.internal_name, internal_name);
        write_field(&mut record.display_name, display_name);
        write_field(&mut record.author_name, author_name);
        record
    }

    pub fn internal_name(&self) -> Cow<'_, str> {
        read_field(&self.internal_name)
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        read_field(&self.display_name)
    }

    pub fn author_name(&self) -> Cow<'_, str> {
        read_field(&self.author_name)
    }

    /// Write record to bytes, fields in layout order
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[TAG_OFFSET..VERSION_OFFSET].copy_from_slice(MODEL_INFO_TAG);
        bytes[VERSION_OFFSET] = self.embed_version;
        bytes[INTERNAL_NAME_OFFSET..DISPLAY_NAME_OFFSET].copy_from_slice(&self.internal_name);
        bytes[DISPLAY_NAME_OFFSET..AUTHOR_NAME_OFFSET].copy_from_slice(&self.display_name);
        bytes[AUTHOR_NAME_OFFSET..Self::SIZE].copy_from_slice(&self.author_name);
        bytes
    }

    /// Read record from bytes
    ///
    /// Returns `None` if the slice is too short, the tag is missing, or the
    /// embed version is not one this crate knows the layout of.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        if &bytes[TAG_OFFSET..VERSION_OFFSET] != MODEL_INFO_TAG {
            return None;
        }
        let embed_version = bytes[VERSION_OFFSET];
        if embed_version != CURRENT_EMBED_VERSION {
            return None;
        }

        let mut record = Self {
            embed_version,
            internal_name: [0; INTERNAL_NAME_FIELD_SIZE],
            display_name: [0; DISPLAY_NAME_FIELD_SIZE],
            author_name: [0; AUTHOR_NAME_FIELD_SIZE],
        };
        record
            .internal_name
            .copy_from_slice(&bytes[INTERNAL_NAME_OFFSET..DISPLAY_NAME_OFFSET]);
        record
            .display_name
            .copy_from_slice(&bytes[DISPLAY_NAME_OFFSET..AUTHOR_NAME_OFFSET]);
        record
            .author_name
            .copy_from_slice(&bytes[AUTHOR_NAME_OFFSET..Self::SIZE]);
        Some(record)
    }
}
