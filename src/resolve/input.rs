use crate::artifact::{ArtifactCatalog, ArtifactKind};
use crate::engine::{EngineError, GenerationEngine};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::debug;

/// Artifacts the engine reported for a single input
#[derive(Debug, Clone)]
pub struct InputMatches {
    pub catalog: ArtifactCatalog,
    /// Number of artifacts the engine returned, before deduplication
    pub count: usize,
}

/// Asks the engine which artifacts of a kind are valid for one input
pub struct InputResolver<'e, E> {
    engine: &'e E,
}

impl<'e, E> InputResolver<'e, E>
where
    E: GenerationEngine,
    E::Input: Display,
{
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    pub fn resolve(&self, input: &E::Input, kind: ArtifactKind) -> Result<InputMatches, EngineError> {
        let artifacts = self.engine.matching_artifacts_for(input, kind)?;
        if let Some(stray) = artifacts.iter().find(|artifact| artifact.kind() != kind) {
            return Err(EngineError::InvalidInput {
                path: PathBuf::from(input.to_string()),
                reason: format!(
                    "engine returned {} '{}' when asked for {}s",
                    stray.kind(),
                    stray.id(),
                    kind
                ),
            });
        }
        let count = artifacts.len();
        let catalog = ArtifactCatalog::from_artifacts(kind, artifacts);

        debug!(
            input = %input,
            kind = %kind,
            matches = count,
            distinct = catalog.len(),
            "Resolved matching artifacts"
        );

        Ok(InputMatches { catalog, count })
    }
}
