//! Output formatting for generation plans and search results
//!
//! Every report renders as pretty JSON, YAML, or human-readable text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::artifact::{Artifact, ArtifactKind};
use crate::select::FuzzyMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// One input together with the directory its artifacts go to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedInput {
    pub path: PathBuf,
    pub output_root: PathBuf,
}

/// What the generator is asked to produce
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationPlan {
    pub kind: ArtifactKind,
    pub inputs: Vec<PlannedInput>,
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub distance: f64,
    pub artifact: Artifact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub kind: ArtifactKind,
    pub matches: Vec<SearchHit>,
}

impl SearchReport {
    pub fn new(query: impl Into<String>, kind: ArtifactKind, ranked: &[FuzzyMatch<'_>]) -> Self {
        let matches = ranked
            .iter()
            .enumerate()
            .map(|(position, found)| SearchHit {
                rank: position + 1,
                distance: found.distance,
                artifact: found.artifact.clone(),
            })
            .collect();
        Self {
            query: query.into(),
            kind,
            matches,
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_plan(&self, plan: &GenerationPlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(plan)
                .context("Failed to serialize generation plan to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(plan).context("Failed to serialize generation plan to YAML")
            }
            OutputFormat::Human => Ok(self.format_plan_human(plan)),
        }
    }

    pub fn format_search(&self, report: &SearchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize search results to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize search results to YAML")
            }
            OutputFormat::Human => Ok(self.format_search_human(report)),
        }
    }

    fn format_plan_human(&self, plan: &GenerationPlan) -> String {
        let mut output = String::new();

        output.push_str(&format!("\u{2713} Generation Plan ({}s)\n", plan.kind));
        output.push_str(&"\u{2501}".repeat(42));
        output.push_str("\n\n");

        output.push_str("Inputs:\n");
        for (i, input) in plan.inputs.iter().enumerate() {
            let connector = tree_connector(i, plan.inputs.len());
            output.push_str(&format!(
                "{}\u{2500} {} \u{2192} {}\n",
                connector,
                input.path.display(),
                input.output_root.display()
            ));
        }
        output.push('\n');

        output.push_str(&format!("Selected {}s:\n", plan.kind));
        for (i, artifact) in plan.artifacts.iter().enumerate() {
            let connector = tree_connector(i, plan.artifacts.len());
            output.push_str(&format!("{}\u{2500} {}\n", connector, artifact.title()));
        }

        output
    }

    fn format_search_human(&self, report: &SearchReport) -> String {
        if report.matches.is_empty() {
            return format!("No {} matches '{}'\n", report.kind, report.query);
        }

        let mut output = format!("{}s matching '{}':\n", report.kind, report.query);
        for hit in &report.matches {
            output.push_str(&format!(
                "({}) {}  [distance {:.2}]\n",
                hit.rank,
                hit.artifact.title(),
                hit.distance
            ));
        }
        output
    }
}

fn tree_connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        "\u{2514}"
    } else {
        "\u{251C}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactCatalog;
    use crate::select::FuzzyMatcher;

    fn plan() -> GenerationPlan {
        GenerationPlan {
            kind: ArtifactKind::Increment,
            inputs: vec![PlannedInput {
                path: PathBuf::from("/work/app/src/Customer.java"),
                output_root: PathBuf::from("/work/app"),
            }],
            artifacts: vec![
                Artifact::increment("dataaccess", "CRUD data access"),
                Artifact::increment("logic", "Use case logic"),
            ],
        }
    }

    #[test]
    fn test_plan_json() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format_plan(&plan())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["kind"], "increment");
        assert_eq!(value["inputs"][0]["output_root"], "/work/app");
        assert_eq!(value["artifacts"][1]["id"], "logic");
        assert_eq!(value["artifacts"][1]["kind"], "increment");
    }

    #[test]
    fn test_plan_yaml() {
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format_plan(&plan())
            .unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["artifacts"][0]["id"].as_str(), Some("dataaccess"));
    }

    #[test]
    fn test_plan_human() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_plan(&plan())
            .unwrap();

        assert!(output.contains("Generation Plan (increments)"));
        assert!(output.contains("/work/app/src/Customer.java \u{2192} /work/app"));
        assert!(output.contains("\u{251C}\u{2500} dataaccess (CRUD data access)"));
        assert!(output.contains("\u{2514}\u{2500} logic (Use case logic)"));
    }

    #[test]
    fn test_search_human_numbers_matches() {
        let catalog = ArtifactCatalog::from_artifacts(
            ArtifactKind::Template,
            vec![Artifact::template("Entity.ftl"), Artifact::template("EntityDto.ftl")],
        );
        let ranked = FuzzyMatcher::default().rank("entity", &catalog);
        let report = SearchReport::new("entity", ArtifactKind::Template, &ranked);

        let output = OutputFormatter::new(OutputFormat::Human)
            .format_search(&report)
            .unwrap();
        assert!(output.starts_with("templates matching 'entity':"));
        assert!(output.contains("(1) Entity.ftl"));
        assert!(output.contains("(2) EntityDto.ftl"));
    }

    #[test]
    fn test_search_without_matches() {
        let report = SearchReport::new("zzz", ArtifactKind::Increment, &[]);
        let human = OutputFormatter::new(OutputFormat::Human)
            .format_search(&report)
            .unwrap();
        assert_eq!(human, "No increment matches 'zzz'\n");

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_search(&report)
            .unwrap();
        assert!(json.contains("\"matches\": []"));
    }
}
