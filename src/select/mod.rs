//! Picking artifacts out of a reduced catalog
//!
//! [`SelectionResolver`] handles explicit selectors and the interactive
//! listing, [`FuzzyMatcher`] handles free-text search.

pub mod fuzzy;
pub mod prompt;
pub mod selector;

pub use fuzzy::{jaccard_distance, search, FuzzyMatch, FuzzyMatcher, DEFAULT_THRESHOLD};
pub use prompt::{ConsolePrompt, Prompt};
pub use selector::{select, SelectionResolver};

use crate::artifact::ArtifactKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Could not find {kind} for selector '{selector}'")]
    SelectorNotFound {
        kind: ArtifactKind,
        selector: String,
        suggestion: Option<String>,
    },

    #[error("No {0}s available for generation")]
    EmptyCatalog(ArtifactKind),

    #[error("Failed to read selection: {0}")]
    Prompt(#[from] std::io::Error),
}

impl SelectionError {
    pub fn help_message(&self) -> String {
        match self {
            SelectionError::SelectorNotFound {
                kind, suggestion, ..
            } => {
                let mut help = format!(
                    "Use the {}'s id, its number from the listing, or 'all'.",
                    kind
                );
                if let Some(candidate) = suggestion {
                    help.push_str(&format!(" Did you mean '{}'?", candidate));
                }
                help
            }
            SelectionError::EmptyCatalog(kind) => format!(
                "None of the given inputs can be used to generate a {}.",
                kind
            ),
            SelectionError::Prompt(_) => {
                "Pass the selection on the command line to run without a terminal.".to_string()
            }
        }
    }
}
