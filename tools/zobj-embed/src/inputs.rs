//! Command line input classification
//!
//! The tool takes a zobj and a json descriptor in either order and tells them
//! apart by size: the zobj is the file of at least `ZOBJ_FORMAT.min_size`
//! bytes, the descriptor is the one below it. Exactly one of each is required.

use std::path::{Path, PathBuf};

use zobj_common::ZOBJ_FORMAT;

pub const EXPECTED_NUM_ARGS: usize = 2;

/// Problems with the paths given on the command line
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("too many arguments passed in (expected 2, got {0})")]
    TooManyArgs(usize),

    #[error("too few arguments passed in (expected 2, got {0})")]
    TooFewArgs(usize),

    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("did not pass in a valid zobj (neither file is >= {min:#x} bytes in size)")]
    NoZobj { min: usize },

    #[error("did not pass in a valid json (both files are >= {min:#x} bytes in size)")]
    NoDescriptor { min: usize },
}

/// The two input paths, sorted by role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub zobj: PathBuf,
    pub descriptor: PathBuf,
}

/// Which of two files is the zobj
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZobjPosition {
    First,
    Second,
}

/// Sort the command line paths into zobj and descriptor.
pub fn classify_inputs(paths: &[PathBuf]) -> Result<Inputs, InputError> {
    if paths.len() > EXPECTED_NUM_ARGS {
        return Err(InputError::TooManyArgs(paths.len()));
    }
    if paths.len() < EXPECTED_NUM_ARGS {
        return Err(InputError::TooFewArgs(paths.len()));
    }

    let (a, b) = (&paths[0], &paths[1]);
    let a_size = file_size(a)?;
    let b_size = file_size(b)?;

    let inputs = match classify_sizes(a_size, b_size)? {
        ZobjPosition::First => Inputs {
            zobj: a.clone(),
            descriptor: b.clone(),
        },
        ZobjPosition::Second => Inputs {
            zobj: b.clone(),
            descriptor: a.clone(),
        },
    };

    tracing::debug!(
        "Classified inputs: zobj={:?} descriptor={:?}",
        inputs.zobj,
        inputs.descriptor
    );
    Ok(inputs)
}

/// Decide which of two file sizes belongs to the zobj.
pub fn classify_sizes(a_size: u64, b_size: u64) -> Result<ZobjPosition, InputError> {
    let min = ZOBJ_FORMAT.min_size;
    let qualifies = |size: u64| size >= min as u64;

    match (qualifies(a_size), qualifies(b_size)) {
        (true, false) => Ok(ZobjPosition::First),
        (false, true) => Ok(ZobjPosition::Second),
        (false, false) => Err(InputError::NoZobj { min }),
        (true, true) => Err(InputError::NoDescriptor { min }),
    }
}

fn file_size(path: &Path) -> Result<u64, InputError> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata.len()),
        _ => Err(InputError::NotAFile {
            path: path.to_path_buf(),
        }),
    }
}
