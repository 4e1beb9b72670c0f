//! Narrowing the artifact catalog down to what every input supports
//!
//! Each input is resolved against the engine on its own ([`InputResolver`]);
//! [`CrossInputReducer`] folds those results into one catalog by repeated
//! intersection, keeping the order in which the first input reported them.

pub mod input;
pub mod reducer;

pub use input::{InputMatches, InputResolver};
pub use reducer::{resolve_for_inputs, CrossInputReducer};

use crate::artifact::ArtifactKind;
use crate::engine::{EngineError, InputFormat};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A single input matched nothing on its own
    #[error("Input '{input}' is not valid as input for any generation purpose. It does not match any {kind}.")]
    NoMatchingArtifacts {
        input: String,
        position: usize,
        kind: ArtifactKind,
    },

    /// Every input matched something, but nothing is shared by all of them
    #[error("There is no {kind} matching the combination of all your input files")]
    NoCommonArtifacts { kind: ArtifactKind, inputs: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ResolveError {
    /// Returns a user-friendly error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            ResolveError::NoMatchingArtifacts { input, kind, .. } => {
                let hint = match InputFormat::from_path(Path::new(input)) {
                    InputFormat::Java => {
                        "Help: Check that your Java input file follows the naming conventions\n\
                        expected by the trigger context (for example an entity class named\n\
                        '<Name>Entity' inside an 'entity' package)."
                    }
                    InputFormat::Yaml => {
                        "Help: Validate your OpenAPI specification and check that it follows\n\
                        the OpenAPI 3.0 standard."
                    }
                    _ => {
                        "Help: Check the triggers declared in your context file\n\
                        (GENPICK_CONTEXT or --context) and whether one of them covers this file type."
                    }
                };
                format!(
                    "Error: Your input file '{}' does not match any {}\n\n{}",
                    input, kind, hint
                )
            }
            ResolveError::NoCommonArtifacts { kind, inputs } => {
                format!(
                    "Error: There is no {} matching the combination of all your input files\n\n\
                    Help: Each of the {} input file(s) matched something on its own, but no {}\n\
                    is valid for all of them. Try generating for fewer input files at once.",
                    kind, inputs, kind
                )
            }
            ResolveError::Engine(err) => {
                format!(
                    "Error: Invalid input, please check your input file\n\n\
                    Details: {}",
                    err
                )
            }
        }
    }
}
