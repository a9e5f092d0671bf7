//! Embedding pipeline
//!
//! Validate the host, validate the descriptor, build the record, patch it in.
//! Everything here happens in memory; persisting the result is up to the caller.

use zobj_common::{EmbeddedRecord, HostError, validate_host, write_record};

use crate::descriptor::{DescriptorError, parse_descriptor, validate_descriptor};

/// Failure of the in-memory embedding pipeline
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("invalid zobj: {0}")]
    InvalidHost(#[from] HostError),

    #[error("invalid json: {0}")]
    InvalidDescriptor(#[from] DescriptorError),
}

/// Embed the descriptor into `host`, returning the patched buffer.
///
/// The returned buffer always has the same length as the input.
pub fn embed(mut host: Vec<u8>, descriptor_text: &str) -> Result<Vec<u8>, EmbedError> {
    embed_in_place(&mut host, descriptor_text)?;
    Ok(host)
}

/// Embed the descriptor into `host` in place, returning the record written.
///
/// `host` is untouched unless every validation step passes.
pub fn embed_in_place(host: &mut [u8], descriptor_text: &str) -> Result<EmbeddedRecord, EmbedError> {
    validate_host(host)?;

    let json = parse_descriptor(descriptor_text)?;
    let info = validate_descriptor(&json)?;
    tracing::debug!(
        "Descriptor: internal_name={:?} display_name={:?} author={:?}",
        info.internal_name,
        info.display_name,
        info.author
    );

    let record = info.to_record();
    write_record(host, &record)?;
    Ok(record)
}
