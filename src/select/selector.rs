use super::prompt::Prompt;
use super::SelectionError;
use crate::artifact::{Artifact, ArtifactCatalog, CatalogError};
use tracing::{debug, info};

/// Minimum similarity for a "did you mean" suggestion
const SUGGESTION_SIMILARITY: f64 = 0.7;

/// Resolves user selectors against a reduced catalog
///
/// A selector is `0` or `all` for the whole catalog, an exact artifact id, or
/// a 1-based index into the catalog. An exact id always wins over the
/// positional reading of the same text.
pub struct SelectionResolver<'c> {
    catalog: &'c ArtifactCatalog,
}

impl<'c> SelectionResolver<'c> {
    pub fn new(catalog: &'c ArtifactCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves `query`, or asks through `prompt` when it is empty
    ///
    /// Results follow the order of the selectors and are not deduplicated.
    pub fn select<P>(&self, query: &[String], prompt: &mut P) -> Result<Vec<Artifact>, SelectionError>
    where
        P: Prompt + ?Sized,
    {
        if query.is_empty() {
            let line = self.ask(prompt)?;
            let selectors: Vec<&str> = line.split(',').collect();
            return self.resolve_selectors(&selectors);
        }
        self.resolve_selectors(query)
    }

    /// Resolves explicit selectors without any interaction
    pub fn resolve_selectors<S: AsRef<str>>(&self, selectors: &[S]) -> Result<Vec<Artifact>, SelectionError> {
        if selectors.iter().any(|selector| is_all(selector.as_ref())) {
            info!("(0) All");
            return Ok(self.catalog.as_ordered_list());
        }

        selectors
            .iter()
            .map(|selector| self.resolve_one(selector.as_ref()).cloned())
            .collect()
    }

    fn resolve_one(&self, raw: &str) -> Result<&'c Artifact, SelectionError> {
        let selector = raw.trim();

        if let Some(artifact) = self.catalog.get_by_id(selector) {
            debug!(selector, "Selected by id");
            return Ok(artifact);
        }

        if let Ok(index) = selector.parse::<usize>() {
            match self.catalog.get_by_index(index) {
                Ok(artifact) => {
                    debug!(selector, id = artifact.id(), "Selected by index");
                    return Ok(artifact);
                }
                Err(CatalogError::EmptyCatalog(kind)) => return Err(SelectionError::EmptyCatalog(kind)),
                Err(err) => debug!(selector, error = %err, "Index out of range"),
            }
        }

        Err(SelectionError::SelectorNotFound {
            kind: self.catalog.kind(),
            selector: raw.to_string(),
            suggestion: self.suggest(selector),
        })
    }

    fn ask<P>(&self, prompt: &mut P) -> Result<String, SelectionError>
    where
        P: Prompt + ?Sized,
    {
        let kind = self.catalog.kind();
        prompt.show("(0) All")?;
        for (position, artifact) in self.catalog.iter().enumerate() {
            prompt.show(&format!("({}) {}", position + 1, artifact.title()))?;
        }
        prompt.show(&format!(
            "Please enter the number(s) of {}(s) that you want to generate separated by comma.",
            kind
        ))?;
        Ok(prompt.read_line()?)
    }

    fn suggest(&self, selector: &str) -> Option<String> {
        let needle = selector.to_lowercase();
        self.catalog
            .ids()
            .map(|id| (id, strsim::normalized_levenshtein(&needle, &id.to_lowercase())))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_SIMILARITY)
            .max_by(|left, right| left.1.total_cmp(&right.1))
            .map(|(id, _)| id.to_string())
    }
}

fn is_all(selector: &str) -> bool {
    let selector = selector.trim();
    selector == "0" || selector.eq_ignore_ascii_case("all")
}

/// Resolves `query` against `catalog`, prompting when the query is empty
pub fn select<P>(
    query: &[String],
    catalog: &ArtifactCatalog,
    prompt: &mut P,
) -> Result<Vec<Artifact>, SelectionError>
where
    P: Prompt + ?Sized,
{
    SelectionResolver::new(catalog).select(query, prompt)
}
