//! End-to-end run: classify inputs, read, embed, write back
//!
//! All validation happens before the zobj is opened for writing. The write
//! itself truncates and rewrites the original file in place.

use std::path::{Path, PathBuf};

use zobj_common::fs::{MAX_ZOBJ_BYTES, read_file_with_limit};
use zobj_common::{EmbeddedRecord, read_record};

use crate::embed::{EmbedError, embed_in_place};
use crate::inputs::{InputError, classify_inputs};

/// Process exit codes, one per failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ReturnCode {
    Ok = 0,
    TooManyArgs = 1,
    TooFewArgs = 2,
    InvalidZobj = 3,
    InvalidJson = 4,
    NoZobj = 5,
    NoJson = 6,
    InvalidFile = 7,
}

impl ReturnCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("could not read zobj {}: {source}", path.display())]
    ReadZobj {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read json {}: {source}", path.display())]
    ReadDescriptor {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error("could not write zobj {}: {source}", path.display())]
    WriteZobj {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RunError {
    pub fn return_code(&self) -> ReturnCode {
        match self {
            RunError::Input(InputError::TooManyArgs(_)) => ReturnCode::TooManyArgs,
            RunError::Input(InputError::TooFewArgs(_)) => ReturnCode::TooFewArgs,
            RunError::Input(InputError::NotAFile { .. }) => ReturnCode::InvalidFile,
            RunError::Input(InputError::NoZobj { .. }) => ReturnCode::NoZobj,
            RunError::Input(InputError::NoDescriptor { .. }) => ReturnCode::NoJson,
            RunError::ReadZobj { .. } | RunError::WriteZobj { .. } => ReturnCode::InvalidZobj,
            RunError::Embed(EmbedError::InvalidHost(_)) => ReturnCode::InvalidZobj,
            RunError::ReadDescriptor { .. } => ReturnCode::InvalidJson,
            RunError::Embed(EmbedError::InvalidDescriptor(_)) => ReturnCode::InvalidJson,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Validate and build the record, but leave the zobj on disk untouched
    pub dry_run: bool,
}

/// What a successful run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub zobj: PathBuf,
    pub descriptor: PathBuf,
    pub record: EmbeddedRecord,
    pub written: bool,
}

/// Embed the descriptor named on the command line into the zobj named there.
pub fn run(paths: &[PathBuf], options: &RunOptions) -> Result<RunSummary, RunError> {
    let inputs = classify_inputs(paths)?;

    let mut zobj = read_file_with_limit(&inputs.zobj, MAX_ZOBJ_BYTES).map_err(|source| {
        RunError::ReadZobj {
            path: inputs.zobj.clone(),
            source,
        }
    })?;
    let descriptor_text =
        std::fs::read_to_string(&inputs.descriptor).map_err(|source| RunError::ReadDescriptor {
            path: inputs.descriptor.clone(),
            source,
        })?;

    tracing::info!(
        "Embedding {:?} into {:?} ({:#x} bytes)",
        inputs.descriptor,
        inputs.zobj,
        zobj.len()
    );
    let record = embed_in_place(&mut zobj, &descriptor_text)?;

    if let Some(stored) = read_record::<EmbeddedRecord>(&zobj) {
        tracing::info!(
            "Model info: internal_name={:?} display_name={:?} author={:?}",
            stored.internal_name(),
            stored.display_name(),
            stored.author_name()
        );
    }

    let written = if options.dry_run {
        tracing::info!("Dry run, {:?} left unchanged", inputs.zobj);
        false
    } else {
        write_zobj(&inputs.zobj, &zobj)?;
        true
    };

    Ok(RunSummary {
        zobj: inputs.zobj,
        descriptor: inputs.descriptor,
        record,
        written,
    })
}

fn write_zobj(path: &Path, bytes: &[u8]) -> Result<(), RunError> {
    std::fs::write(path, bytes).map_err(|source| RunError::WriteZobj {
        path: path.to_path_buf(),
        source,
    })
}
