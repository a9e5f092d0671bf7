//! Binary serialization trait for embedded records.
//!
//! [`crate::host::write_record`] and [`crate::host::read_record`] patch and
//! read any record through this trait, so a future embed version only needs
//! a new type, not new patching code.

/// Fixed-size record that can live in the model info region of a zobj.
///
/// Returns `Vec<u8>` rather than `[u8; Self::SIZE]` because associated
/// consts cannot size arrays in generic code yet. Use the type-specific
/// `to_bytes()` when the concrete type is known.
///
/// # Example
///
/// ```
/// use zobj_common::{BinarySerializable, EmbeddedRecord, ZOBJ_FORMAT, read_record, write_record};
///
/// let mut zobj = vec![0u8; ZOBJ_FORMAT.min_size];
/// zobj[ZOBJ_FORMAT.signature_range()].copy_from_slice(ZOBJ_FORMAT.ml64_signature);
///
/// let record = EmbeddedRecord::new("Mario", "Mario", "N/A");
/// write_record(&mut zobj, &record).unwrap();
///
/// let stored: EmbeddedRecord = read_record(&zobj).unwrap();
/// assert_eq!(stored, record);
/// assert_eq!(stored.serialize().len(), EmbeddedRecord::SIZE);
/// ```
pub trait BinarySerializable: Sized {
    /// Size of the serialized record in bytes.
    const SIZE: usize;

    fn serialize(&self) -> Vec<u8>;

    /// Returns `None` if the slice is too short or does not hold this record.
    fn deserialize(bytes: &[u8]) -> Option<Self>;
}

impl BinarySerializable for super::EmbeddedRecord {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}
