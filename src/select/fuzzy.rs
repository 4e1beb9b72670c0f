//! Free-text search over a catalog
//!
//! Candidates are scored with the Jaccard distance between the character sets
//! of the upper-cased query and the upper-cased comparison string. Templates
//! compare their id; increments take the closer of id and description. A
//! candidate is kept when its comparison string contains the query or its
//! distance is within the threshold. An exact, case-insensitive hit on an id
//! or description wins outright and is returned alone.

use crate::artifact::{Artifact, ArtifactCatalog};
use std::collections::HashSet;
use tracing::debug;

/// Distance at or below which a candidate counts as similar
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// A catalog entry kept by the search, with its distance to the query
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch<'c> {
    pub artifact: &'c Artifact,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Matching artifacts, best match first; empty when nothing qualifies
    pub fn search(&self, query: &str, catalog: &ArtifactCatalog) -> Vec<Artifact> {
        self.rank(query, catalog)
            .into_iter()
            .map(|found| found.artifact.clone())
            .collect()
    }

    /// Like [`search`](Self::search) but keeps the distances
    pub fn rank<'c>(&self, query: &str, catalog: &'c ArtifactCatalog) -> Vec<FuzzyMatch<'c>> {
        let needle = query.to_uppercase();

        if let Some(artifact) = catalog.iter().find(|artifact| is_exact(artifact, &needle)) {
            debug!(query, artifact = artifact.id(), "Exact match");
            return vec![FuzzyMatch {
                artifact,
                distance: 0.0,
            }];
        }

        let mut matches: Vec<FuzzyMatch<'c>> = catalog
            .iter()
            .filter_map(|artifact| {
                let distance = distance_to(artifact, &needle);
                let keep = contains(artifact, &needle) || distance <= self.threshold;
                keep.then_some(FuzzyMatch { artifact, distance })
            })
            .collect();

        // Stable, so equal distances keep catalog order
        matches.sort_by(|left, right| left.distance.total_cmp(&right.distance));

        debug!(
            query,
            candidates = catalog.len(),
            matches = matches.len(),
            "Fuzzy search finished"
        );
        matches
    }
}

/// Searches `catalog` with the default threshold
pub fn search(query: &str, catalog: &ArtifactCatalog) -> Vec<Artifact> {
    FuzzyMatcher::default().search(query, catalog)
}

/// Jaccard distance between the character sets of two strings
///
/// 0.0 for identical sets (including two empty strings), 1.0 for disjoint sets
/// or when exactly one side is empty.
pub fn jaccard_distance(left: &str, right: &str) -> f64 {
    let left: HashSet<char> = left.chars().collect();
    let right: HashSet<char> = right.chars().collect();

    if left.is_empty() && right.is_empty() {
        return 0.0;
    }
    if left.is_empty() || right.is_empty() {
        return 1.0;
    }

    let shared = left.intersection(&right).count();
    let total = left.union(&right).count();
    1.0 - shared as f64 / total as f64
}

fn comparison_fields(artifact: &Artifact) -> impl Iterator<Item = String> + '_ {
    std::iter::once(artifact.id())
        .chain(artifact.description())
        .map(str::to_uppercase)
}

fn is_exact(artifact: &Artifact, needle: &str) -> bool {
    comparison_fields(artifact).any(|field| field == needle)
}

fn contains(artifact: &Artifact, needle: &str) -> bool {
    comparison_fields(artifact).any(|field| field.contains(needle))
}

fn distance_to(artifact: &Artifact, needle: &str) -> f64 {
    comparison_fields(artifact)
        .map(|field| jaccard_distance(&field, needle))
        .fold(1.0, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactKind;
    use yare::parameterized;

    fn templates(ids: &[&str]) -> ArtifactCatalog {
        ArtifactCatalog::from_artifacts(
            ArtifactKind::Template,
            ids.iter().map(|id| Artifact::template(*id)),
        )
    }

    fn increments(entries: &[(&str, &str)]) -> ArtifactCatalog {
        ArtifactCatalog::from_artifacts(
            ArtifactKind::Increment,
            entries
                .iter()
                .map(|(id, description)| Artifact::increment(*id, *description)),
        )
    }

    fn ids(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(Artifact::id).collect()
    }

    #[parameterized(
        identical = { "ABC", "ABC", 0.0 },
        same_set_other_order = { "CAB", "ABC", 0.0 },
        repeated_chars = { "AAB", "AB", 0.0 },
        disjoint = { "ABC", "DEF", 1.0 },
        half_shared = { "AB", "BC", 2.0 / 3.0 },
        both_empty = { "", "", 0.0 },
        one_empty = { "A", "", 1.0 },
        typo_against_file_name = { "ENTTY", "ENTITY.FTL", 0.5 },
    )]
    fn test_jaccard_distance(left: &str, right: &str, expected: f64) {
        let distance = jaccard_distance(left, right);
        assert!(
            (distance - expected).abs() < 1e-9,
            "distance({left}, {right}) = {distance}, expected {expected}"
        );
    }

    #[test]
    fn test_exact_template_id_short_circuits() {
        let catalog = templates(&["UserEntityRepository", "UserEntity", "UserEntityDto"]);
        let found = FuzzyMatcher::default().search("userentity", &catalog);
        assert_eq!(ids(&found), vec!["UserEntity"]);
    }

    #[test]
    fn test_exact_increment_description_short_circuits() {
        let catalog = increments(&[
            ("dataaccess", "CRUD data access"),
            ("dataaccess_jpa", "CRUD data access with JPA"),
        ]);
        let found = FuzzyMatcher::default().search("crud DATA access", &catalog);
        assert_eq!(ids(&found), vec!["dataaccess"]);
    }

    #[test]
    fn test_substring_match() {
        let catalog = templates(&["Entity.ftl", "Repository.ftl", "Service.ftl"]);
        let found = FuzzyMatcher::default().search("entity", &catalog);
        assert_eq!(ids(&found), vec!["Entity.ftl"]);
    }

    #[test]
    fn test_same_character_set_within_threshold() {
        let catalog = templates(&["Entity.ftl", "Repository.ftl", "Service.ftl"]);
        let found = FuzzyMatcher::default().search("ytitne.ftl", &catalog);
        assert_eq!(ids(&found), vec!["Entity.ftl"]);
    }

    #[test]
    fn test_typo_outside_default_threshold() {
        let catalog = templates(&["Entity.ftl", "Repository.ftl", "Service.ftl"]);

        assert!(FuzzyMatcher::default().search("Entty", &catalog).is_empty());

        let found = FuzzyMatcher::with_threshold(0.5).search("Entty", &catalog);
        assert_eq!(ids(&found), vec!["Entity.ftl"]);
    }

    #[test]
    fn test_results_ordered_by_distance_then_catalog_order() {
        let catalog = templates(&["xabcx", "cab", "zzz", "bca"]);
        let ranked = FuzzyMatcher::default().rank("abc", &catalog);

        let found: Vec<&str> = ranked.iter().map(|m| m.artifact.id()).collect();
        assert_eq!(found, vec!["cab", "bca", "xabcx"]);
        assert_eq!(ranked[0].distance, 0.0);
        assert!((ranked[2].distance - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_increment_uses_closer_of_id_and_description() {
        let catalog = increments(&[("tos", "Transfer objects"), ("logic", "Use case logic")]);
        let ranked = FuzzyMatcher::default().rank("objects transfer", &catalog);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].artifact.id(), "tos");
        assert_eq!(ranked[0].distance, 0.0);
    }

    #[test]
    fn test_increment_substring_in_id_or_description() {
        let catalog = increments(&[("tos", "Transfer objects"), ("logic", "Use case logic")]);

        let by_id = FuzzyMatcher::default().search("LOG", &catalog);
        assert_eq!(ids(&by_id), vec!["logic"]);

        let by_description = FuzzyMatcher::default().search("case", &catalog);
        assert_eq!(ids(&by_description), vec!["logic"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = templates(&["Entity.ftl", "Repository.ftl"]);
        assert!(search("qqq", &catalog).is_empty());
        assert!(FuzzyMatcher::default()
            .search("anything", &ArtifactCatalog::new(ArtifactKind::Template))
            .is_empty());
    }
}
