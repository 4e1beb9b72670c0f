//! Declarative trigger context
//!
//! A context file lists the templates and increments on offer and the
//! triggers that decide which of them apply to an input file:
//!
//! ```toml
//! [[templates]]
//! id = "Entity.ftl"
//!
//! [[increments]]
//! id = "dataaccess"
//! description = "CRUD data access layer"
//! templates = ["Entity.ftl"]
//!
//! [[triggers]]
//! id = "java-entity"
//! formats = ["java"]
//! path_pattern = "Entity\\.java$"
//! increments = ["dataaccess"]
//! ```
//!
//! Files ending in `.yml`/`.yaml` are read as YAML with the same layout.

use super::{EngineError, GenerationEngine};
use crate::artifact::{Artifact, ArtifactKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to read context file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid TOML context: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid YAML context: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Duplicate {what} id '{id}' in context")]
    DuplicateId { what: &'static str, id: String },
    #[error("'{owner}' references unknown {kind} '{id}'")]
    UnknownReference {
        owner: String,
        kind: ArtifactKind,
        id: String,
    },
    #[error("Trigger '{trigger}' has an invalid pattern: {source}")]
    InvalidPattern {
        trigger: String,
        source: regex::Error,
    },
}

/// Input format derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Java,
    Yaml,
    Xml,
    Other,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "java" => InputFormat::Java,
            "yml" | "yaml" => InputFormat::Yaml,
            "xml" => InputFormat::Xml,
            _ => InputFormat::Other,
        }
    }
}

/// An input file read into memory and classified
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub path: PathBuf,
    pub format: InputFormat,
    pub content: String,
}

impl ParsedInput {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            format: InputFormat::from_path(&path),
            path,
            content: content.into(),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Display for ParsedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ContextFile {
    #[serde(default)]
    templates: Vec<TemplateEntry>,
    #[serde(default)]
    increments: Vec<IncrementEntry>,
    #[serde(default)]
    triggers: Vec<TriggerEntry>,
}

#[derive(Debug, Deserialize)]
struct TemplateEntry {
    id: String,
}

#[derive(Debug, Deserialize)]
struct IncrementEntry {
    id: String,
    description: String,
    #[serde(default)]
    templates: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TriggerEntry {
    id: String,
    #[serde(default)]
    formats: Vec<InputFormat>,
    path_pattern: Option<String>,
    content_pattern: Option<String>,
    #[serde(default)]
    increments: Vec<String>,
    #[serde(default)]
    templates: Vec<String>,
}

#[derive(Debug)]
struct Trigger {
    id: String,
    formats: Vec<InputFormat>,
    path_pattern: Option<Regex>,
    content_pattern: Option<Regex>,
    increments: Vec<String>,
    templates: Vec<String>,
}

impl Trigger {
    fn matches(&self, input: &ParsedInput) -> bool {
        if !self.formats.is_empty() && !self.formats.contains(&input.format) {
            return false;
        }
        if let Some(pattern) = &self.path_pattern {
            if !pattern.is_match(&input.file_name()) {
                return false;
            }
        }
        if let Some(pattern) = &self.content_pattern {
            if !pattern.is_match(&input.content) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug)]
pub struct ContextEngine {
    templates: HashSet<String>,
    increments: HashMap<String, IncrementEntry>,
    triggers: Vec<Trigger>,
}

impl ContextEngine {
    /// Loads a context file, choosing YAML or TOML from its extension
    pub fn load(path: &Path) -> Result<Self, ContextError> {
        let content = fs::read_to_string(path).map_err(|source| ContextError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let engine = match InputFormat::from_path(path) {
            InputFormat::Yaml => Self::from_yaml_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        debug!(
            path = %path.display(),
            templates = engine.templates.len(),
            increments = engine.increments.len(),
            triggers = engine.triggers.len(),
            "Loaded trigger context"
        );
        Ok(engine)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ContextError> {
        let file: ContextFile = toml::from_str(content)?;
        Self::build(file)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ContextError> {
        let file: ContextFile = serde_yaml::from_str(content)?;
        Self::build(file)
    }

    fn build(file: ContextFile) -> Result<Self, ContextError> {
        let mut templates = HashSet::new();
        for template in file.templates {
            if !templates.insert(template.id.clone()) {
                return Err(ContextError::DuplicateId {
                    what: "template",
                    id: template.id,
                });
            }
        }

        let mut increments = HashMap::new();
        for increment in file.increments {
            check_references(&increment.id, ArtifactKind::Template, &increment.templates, |id| {
                templates.contains(id)
            })?;
            if increments.contains_key(&increment.id) {
                return Err(ContextError::DuplicateId {
                    what: "increment",
                    id: increment.id,
                });
            }
            increments.insert(increment.id.clone(), increment);
        }

        let mut trigger_ids = HashSet::new();
        let mut triggers = Vec::with_capacity(file.triggers.len());
        for entry in file.triggers {
            if !trigger_ids.insert(entry.id.clone()) {
                return Err(ContextError::DuplicateId {
                    what: "trigger",
                    id: entry.id,
                });
            }
            check_references(&entry.id, ArtifactKind::Increment, &entry.increments, |id| {
                increments.contains_key(id)
            })?;
            check_references(&entry.id, ArtifactKind::Template, &entry.templates, |id| {
                templates.contains(id)
            })?;

            let path_pattern = compile(&entry.id, entry.path_pattern.as_deref())?;
            let content_pattern = compile(&entry.id, entry.content_pattern.as_deref())?;
            triggers.push(Trigger {
                id: entry.id,
                formats: entry.formats,
                path_pattern,
                content_pattern,
                increments: entry.increments,
                templates: entry.templates,
            });
        }

        Ok(Self {
            templates,
            increments,
            triggers,
        })
    }

    /// Reads an input file and classifies its format
    pub fn read_input(&self, path: &Path) -> Result<ParsedInput, EngineError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                EngineError::InvalidInput {
                    path: path.to_path_buf(),
                    reason: "content is not valid UTF-8".to_string(),
                }
            } else {
                EngineError::InputRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(ParsedInput::new(path, content))
    }

    fn increment_artifact(&self, id: &str) -> Option<Artifact> {
        self.increments
            .get(id)
            .map(|increment| Artifact::increment(&increment.id, &increment.description))
    }
}

impl GenerationEngine for ContextEngine {
    type Input = ParsedInput;

    fn matching_artifacts_for(
        &self,
        input: &ParsedInput,
        kind: ArtifactKind,
    ) -> Result<Vec<Artifact>, EngineError> {
        let mut artifacts = Vec::new();
        for trigger in self.triggers.iter().filter(|trigger| trigger.matches(input)) {
            debug!(trigger = %trigger.id, input = %input, "Trigger matched");
            match kind {
                ArtifactKind::Increment => {
                    artifacts.extend(
                        trigger
                            .increments
                            .iter()
                            .filter_map(|id| self.increment_artifact(id)),
                    );
                }
                ArtifactKind::Template => {
                    artifacts.extend(trigger.templates.iter().map(Artifact::template));
                    artifacts.extend(
                        trigger
                            .increments
                            .iter()
                            .filter_map(|id| self.increments.get(id))
                            .flat_map(|increment| increment.templates.iter())
                            .map(Artifact::template),
                    );
                }
            }
        }
        Ok(artifacts)
    }
}

fn check_references(
    owner: &str,
    kind: ArtifactKind,
    ids: &[String],
    known: impl Fn(&str) -> bool,
) -> Result<(), ContextError> {
    match ids.iter().find(|id| !known(id)) {
        Some(id) => Err(ContextError::UnknownReference {
            owner: owner.to_string(),
            kind,
            id: id.clone(),
        }),
        None => Ok(()),
    }
}

fn compile(trigger: &str, pattern: Option<&str>) -> Result<Option<Regex>, ContextError> {
    pattern
        .map(Regex::new)
        .transpose()
        .map_err(|source| ContextError::InvalidPattern {
            trigger: trigger.to_string(),
            source,
        })
}
