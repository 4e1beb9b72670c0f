use super::{Artifact, ArtifactKind};
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No {0}s available for generation")]
    EmptyCatalog(ArtifactKind),
    #[error("Invalid index {index} - has to be in the range from 1 to {size}")]
    OutOfRange { index: usize, size: usize },
}

/// Ordered, deduplicating container of artifacts of one kind
///
/// Entries are keyed by [`Artifact::id`]. Lookups by id are O(1), iteration
/// follows insertion order and positional access is 1-based so it lines up
/// with the numbers shown to the user. Both views live in a single
/// [`IndexMap`], so removal can never leave a stale position behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCatalog {
    kind: ArtifactKind,
    entries: IndexMap<String, Artifact>,
}

impl ArtifactCatalog {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    pub fn from_artifacts(kind: ArtifactKind, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        let mut catalog = Self::new(kind);
        catalog.add_all(artifacts);
        catalog
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Inserts the artifact unless an entry with the same id is present
    ///
    /// Returns `false` for duplicates and for artifacts of another kind, which
    /// leave the catalog untouched.
    pub fn add(&mut self, artifact: Artifact) -> bool {
        if artifact.kind() != self.kind || self.entries.contains_key(artifact.id()) {
            return false;
        }
        self.entries.insert(artifact.id().to_string(), artifact);
        true
    }

    /// Adds every artifact, returning how many were actually inserted
    pub fn add_all(&mut self, artifacts: impl IntoIterator<Item = Artifact>) -> usize {
        artifacts
            .into_iter()
            .map(|artifact| self.add(artifact))
            .filter(|added| *added)
            .count()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Artifact> {
        self.entries.get(id)
    }

    /// Looks up an artifact by its 1-based position
    pub fn get_by_index(&self, index: usize) -> Result<&Artifact, CatalogError> {
        let size = self.entries.len();
        if size == 0 {
            return Err(CatalogError::EmptyCatalog(self.kind));
        }
        if index < 1 || index > size {
            return Err(CatalogError::OutOfRange { index, size });
        }
        self.entries
            .get_index(index - 1)
            .map(|(_, artifact)| artifact)
            .ok_or(CatalogError::OutOfRange { index, size })
    }

    /// True if an entry with the same id exists; other fields are not compared
    pub fn contains(&self, artifact: &Artifact) -> bool {
        self.contains_id(artifact.id())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Removes the entry with the artifact's id, keeping the order of the rest
    pub fn remove(&mut self, artifact: &Artifact) -> bool {
        self.entries.shift_remove(artifact.id()).is_some()
    }

    /// Keeps only the entries whose id is also present in `other`
    pub fn intersect(&mut self, other: &ArtifactCatalog) {
        self.entries.retain(|id, _| other.contains_id(id));
    }

    pub fn intersect_with(&mut self, artifacts: impl IntoIterator<Item = Artifact>) {
        let other = Self::from_artifacts(self.kind, artifacts);
        self.intersect(&other);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Snapshot of the entries in insertion order
    pub fn as_ordered_list(&self) -> Vec<Artifact> {
        self.entries.values().cloned().collect()
    }
}

impl IntoIterator for ArtifactCatalog {
    type Item = Artifact;
    type IntoIter = indexmap::map::IntoValues<String, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a ArtifactCatalog {
    type Item = &'a Artifact;
    type IntoIter = indexmap::map::Values<'a, String, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
