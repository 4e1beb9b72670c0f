use super::{InputResolver, ResolveError};
use crate::artifact::{ArtifactCatalog, ArtifactKind};
use crate::engine::GenerationEngine;
use std::fmt::Display;
use tracing::{debug, error};

/// Folds per-input matches into the catalog valid for every input
///
/// Inputs are processed strictly in order: the first input seeds the running
/// catalog, each further input intersects it. An input that matches nothing on
/// its own aborts the fold right away, even if the running catalog is still
/// non-empty.
pub struct CrossInputReducer<'e, E> {
    resolver: InputResolver<'e, E>,
}

impl<'e, E> CrossInputReducer<'e, E>
where
    E: GenerationEngine,
    E::Input: Display,
{
    pub fn new(engine: &'e E) -> Self {
        Self {
            resolver: InputResolver::new(engine),
        }
    }

    pub fn resolve_for_inputs(
        &self,
        inputs: &[E::Input],
        kind: ArtifactKind,
    ) -> Result<ArtifactCatalog, ResolveError> {
        let mut running = ArtifactCatalog::new(kind);

        for (position, input) in inputs.iter().enumerate() {
            let matches = self.resolver.resolve(input, kind)?;

            if matches.count == 0 {
                error!(
                    input = %input,
                    "Input is not valid for any generation purpose, it does not match any {}",
                    kind
                );
                return Err(ResolveError::NoMatchingArtifacts {
                    input: input.to_string(),
                    position,
                    kind,
                });
            }

            if position == 0 {
                running.add_all(matches.catalog);
            } else {
                running.intersect(&matches.catalog);
            }
            debug!(
                input = %input,
                remaining = running.len(),
                "Intersected {} catalog",
                kind
            );
        }

        if running.is_empty() {
            return Err(ResolveError::NoCommonArtifacts {
                kind,
                inputs: inputs.len(),
            });
        }

        Ok(running)
    }
}

/// Resolves the catalog of `kind` artifacts shared by all `inputs`
pub fn resolve_for_inputs<E>(
    engine: &E,
    inputs: &[E::Input],
    kind: ArtifactKind,
) -> Result<ArtifactCatalog, ResolveError>
where
    E: GenerationEngine,
    E::Input: Display,
{
    CrossInputReducer::new(engine).resolve_for_inputs(inputs, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Artifact;
    use crate::engine::EngineError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockEngine {
        matches: HashMap<String, Vec<Artifact>>,
        calls: RefCell<Vec<String>>,
    }

    impl MockEngine {
        fn with(mut self, input: &str, ids: &[&str]) -> Self {
            self.matches.insert(
                input.to_string(),
                ids.iter().map(|id| Artifact::template(*id)).collect(),
            );
            self
        }
    }

    impl GenerationEngine for MockEngine {
        type Input = String;

        fn matching_artifacts_for(
            &self,
            input: &String,
            _kind: ArtifactKind,
        ) -> Result<Vec<Artifact>, EngineError> {
            self.calls.borrow_mut().push(input.clone());
            self.matches
                .get(input)
                .cloned()
                .ok_or_else(|| EngineError::InputRead {
                    path: PathBuf::from(input),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }
    }

    fn inputs(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn ids(catalog: &ArtifactCatalog) -> Vec<&str> {
        catalog.ids().collect()
    }

    #[test]
    fn test_single_input_keeps_engine_order() {
        let engine = MockEngine::default().with("A", &["T3", "T1", "T2", "T1"]);
        let catalog = resolve_for_inputs(&engine, &inputs(&["A"]), ArtifactKind::Template).unwrap();
        assert_eq!(ids(&catalog), vec!["T3", "T1", "T2"]);
    }

    #[test]
    fn test_two_inputs_intersect_in_first_input_order() {
        let engine = MockEngine::default()
            .with("A", &["T1", "T2", "T3"])
            .with("B", &["T4", "T3", "T2"]);
        let catalog =
            resolve_for_inputs(&engine, &inputs(&["A", "B"]), ArtifactKind::Template).unwrap();
        assert_eq!(ids(&catalog), vec!["T2", "T3"]);
    }

    #[test]
    fn test_three_inputs_keep_only_common_members() {
        let engine = MockEngine::default()
            .with("A", &["T1", "T2", "T3", "T4"])
            .with("B", &["T2", "T3", "T4"])
            .with("C", &["T4", "T2", "T9"]);
        let catalog =
            resolve_for_inputs(&engine, &inputs(&["A", "B", "C"]), ArtifactKind::Template)
                .unwrap();
        assert_eq!(ids(&catalog), vec!["T2", "T4"]);
    }

    #[test]
    fn test_artifact_of_wrong_kind_is_an_engine_error() {
        let engine = MockEngine::default().with("A", &["T1"]);
        let err = resolve_for_inputs(&engine, &inputs(&["A"]), ArtifactKind::Increment)
            .unwrap_err();

        match err {
            ResolveError::Engine(EngineError::InvalidInput { path, reason }) => {
                assert_eq!(path, PathBuf::from("A"));
                assert_eq!(reason, "engine returned template 'T1' when asked for increments");
            }
            other => panic!("Expected Engine error, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_first_input_fails_before_next_input() {
        let engine = MockEngine::default()
            .with("A", &[])
            .with("B", &["T1"]);
        let err = resolve_for_inputs(&engine, &inputs(&["A", "B"]), ArtifactKind::Template)
            .unwrap_err();

        match err {
            ResolveError::NoMatchingArtifacts {
                input,
                position,
                kind,
            } => {
                assert_eq!(input, "A");
                assert_eq!(position, 0);
                assert_eq!(kind, ArtifactKind::Template);
            }
            other => panic!("Expected NoMatchingArtifacts, got {:?}", other),
        }
        assert_eq!(*engine.calls.borrow(), vec!["A".to_string()]);
    }

    #[test]
    fn test_unmatched_later_input_fails_even_with_running_matches() {
        let engine = MockEngine::default()
            .with("A", &["T1", "T2"])
            .with("B", &[])
            .with("C", &["T1"]);
        let err = resolve_for_inputs(&engine, &inputs(&["A", "B", "C"]), ArtifactKind::Template)
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::NoMatchingArtifacts { position: 1, .. }
        ));
        assert_eq!(engine.calls.borrow().len(), 2);
    }

    #[test]
    fn test_disjoint_inputs_fail_with_no_common_artifacts() {
        let engine = MockEngine::default()
            .with("A", &["T1", "T2"])
            .with("B", &["T3"]);
        let err = resolve_for_inputs(&engine, &inputs(&["A", "B"]), ArtifactKind::Template)
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::NoCommonArtifacts {
                kind: ArtifactKind::Template,
                inputs: 2
            }
        ));
    }

    #[test]
    fn test_engine_error_is_propagated() {
        let engine = MockEngine::default().with("A", &["T1"]);
        let err = resolve_for_inputs(&engine, &inputs(&["A", "missing"]), ArtifactKind::Template)
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Engine(EngineError::InputRead { .. })
        ));
    }

    #[test]
    fn test_no_inputs_yield_no_common_artifacts() {
        let engine = MockEngine::default();
        let err = resolve_for_inputs(&engine, &[], ArtifactKind::Increment).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NoCommonArtifacts { inputs: 0, .. }
        ));
    }
}
