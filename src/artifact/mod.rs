//! Generable artifacts and the catalog that holds them
//!
//! An artifact is something the generation engine can produce for an input:
//! either an increment (a described bundle of templates) or a single template.
//! Artifacts are immutable values; the [`ArtifactCatalog`] owns them for the
//! duration of one command run.

pub mod catalog;

pub use catalog::{ArtifactCatalog, CatalogError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of generable artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Increment,
    Template,
}

impl ArtifactKind {
    /// Lower-case name used in user-facing messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ArtifactKind::Increment => "increment",
            ArtifactKind::Template => "template",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A named bundle of templates with a human-readable description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Increment {
    pub id: String,
    pub description: String,
}

/// A single generation unit, identified only by its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Artifact {
    Increment(Increment),
    Template(Template),
}

impl Artifact {
    pub fn increment(id: impl Into<String>, description: impl Into<String>) -> Self {
        Artifact::Increment(Increment {
            id: id.into(),
            description: description.into(),
        })
    }

    pub fn template(id: impl Into<String>) -> Self {
        Artifact::Template(Template { id: id.into() })
    }

    /// Stable, case-sensitive identifier, unique within a catalog
    pub fn id(&self) -> &str {
        match self {
            Artifact::Increment(increment) => &increment.id,
            Artifact::Template(template) => &template.id,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Increment(_) => ArtifactKind::Increment,
            Artifact::Template(_) => ArtifactKind::Template,
        }
    }

    /// Description of an increment; templates have none
    pub fn description(&self) -> Option<&str> {
        match self {
            Artifact::Increment(increment) => Some(&increment.description),
            Artifact::Template(_) => None,
        }
    }

    /// Title shown when listing artifacts to the user
    pub fn title(&self) -> String {
        match self {
            Artifact::Increment(increment) => {
                format!("{} ({})", increment.id, increment.description)
            }
            Artifact::Template(template) => template.id.clone(),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}
