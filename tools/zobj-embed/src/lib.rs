//! zobj-embed library
//!
//! Embeds player model info from a json descriptor into a ModLoader64 zobj.
//! The binary is a thin wrapper around [`run::run`]; [`embed::embed`] is the
//! in-memory core for callers that already hold both inputs.

pub mod descriptor;
pub mod embed;
pub mod inputs;
pub mod run;

pub use descriptor::{DescriptorError, ModelInfo, load_descriptor, validate_descriptor};
pub use embed::{EmbedError, embed, embed_in_place};
pub use inputs::{InputError, Inputs, classify_inputs};
pub use run::{ReturnCode, RunError, RunOptions, RunSummary, run};
