//! Boundary to the generation engine
//!
//! The resolution core only needs one question answered by the engine: which
//! artifacts of a given kind are valid for a parsed input. [`GenerationEngine`]
//! captures that contract; [`ContextEngine`] is the declarative trigger
//! context the binary ships with.

pub mod context;

pub use context::{ContextEngine, ContextError, InputFormat, ParsedInput};

use crate::artifact::{Artifact, ArtifactKind};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading or evaluating an input
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Could not read input file {path}: {source}")]
    InputRead { path: PathBuf, source: io::Error },

    #[error("The file {path} is not a valid input: {reason}")]
    InvalidInput { path: PathBuf, reason: String },
}

/// The engine query used by input resolution
///
/// Implementations return artifacts in their own stable order; duplicates are
/// allowed and dropped by the catalog.
pub trait GenerationEngine {
    type Input;

    fn matching_artifacts_for(
        &self,
        input: &Self::Input,
        kind: ArtifactKind,
    ) -> Result<Vec<Artifact>, EngineError>;
}

