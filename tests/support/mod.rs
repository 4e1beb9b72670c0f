//! Shared helpers for integration tests

#![allow(dead_code)]

use genpick::{Artifact, ArtifactKind, EngineError, GenerationEngine};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Engine answering from fixed tables and recording every call
#[derive(Default)]
pub struct MockEngine {
    increments: HashMap<String, Vec<Artifact>>,
    templates: HashMap<String, Vec<Artifact>>,
    pub calls: RefCell<Vec<(String, ArtifactKind)>>,
}

impl MockEngine {
    pub fn with_increments(mut self, input: &str, entries: &[(&str, &str)]) -> Self {
        self.increments.insert(
            input.to_string(),
            entries
                .iter()
                .map(|(id, description)| Artifact::increment(*id, *description))
                .collect(),
        );
        self
    }

    pub fn with_templates(mut self, input: &str, ids: &[&str]) -> Self {
        self.templates.insert(
            input.to_string(),
            ids.iter().map(|id| Artifact::template(*id)).collect(),
        );
        self
    }

    pub fn calls_for(&self, kind: ArtifactKind) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(_, called_kind)| *called_kind == kind)
            .map(|(input, _)| input.clone())
            .collect()
    }
}

impl GenerationEngine for MockEngine {
    type Input = String;

    fn matching_artifacts_for(
        &self,
        input: &String,
        kind: ArtifactKind,
    ) -> Result<Vec<Artifact>, EngineError> {
        self.calls.borrow_mut().push((input.clone(), kind));
        let table = match kind {
            ArtifactKind::Increment => &self.increments,
            ArtifactKind::Template => &self.templates,
        };
        table
            .get(input)
            .cloned()
            .ok_or_else(|| EngineError::InvalidInput {
                path: PathBuf::from(input),
                reason: "unknown to the mock engine".to_string(),
            })
    }
}

pub fn inputs(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn ids(artifacts: &[Artifact]) -> Vec<&str> {
    artifacts.iter().map(Artifact::id).collect()
}

/// Trigger context shared by the binary tests
pub const CONTEXT: &str = r#"
[[templates]]
id = "Entity.ftl"

[[templates]]
id = "Repository.ftl"

[[templates]]
id = "Service.ftl"

[[templates]]
id = "Dto.ftl"

[[increments]]
id = "dataaccess"
description = "CRUD data access"
templates = ["Entity.ftl", "Repository.ftl"]

[[increments]]
id = "logic"
description = "Use case logic"
templates = ["Service.ftl"]

[[increments]]
id = "tos"
description = "Transfer objects"
templates = ["Dto.ftl"]

[[triggers]]
id = "entity"
formats = ["java"]
path_pattern = "Entity\\.java$"
increments = ["dataaccess", "logic", "tos"]

[[triggers]]
id = "service"
formats = ["java"]
path_pattern = "Service\\.java$"
increments = ["logic"]
"#;

/// Writes `content` to `dir/relative`, creating parent directories
pub fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}
