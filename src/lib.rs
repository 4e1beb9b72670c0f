//! genpick - picks code-generation artifacts that fit a set of input files
//!
//! A generation engine reports, per input file, which increments (described
//! bundles of templates) or templates it can generate. genpick intersects
//! those answers into one ordered catalog, then lets the user pick from it by
//! id, by 1-based number, with `all`, or by fuzzy search.
//!
//! # Example Usage
//!
//! ```no_run
//! use genpick::{resolve_for_inputs, select, ArtifactKind, ConsolePrompt, ContextEngine};
//! use std::path::Path;
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ContextEngine::load(Path::new("context.toml"))?;
//! let input = engine.read_input(Path::new("src/main/java/CustomerEntity.java"))?;
//!
//! let catalog = resolve_for_inputs(&engine, &[input], ArtifactKind::Increment)?;
//! let chosen = select(&["all".to_string()], &catalog, &mut ConsolePrompt::stdio())?;
//! for artifact in chosen {
//!     println!("{}", artifact);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`artifact`]: artifact types and the ordered [`ArtifactCatalog`]
//! - [`engine`]: the engine boundary and the trigger-context engine
//! - [`resolve`]: per-input resolution and cross-input reduction
//! - [`select`]: selector resolution, interactive prompt and fuzzy search
//! - [`input`]: command-line path handling
//! - [`cli`]: the `genpick` command-line frontend

pub mod artifact;
pub mod cli;
pub mod config;
pub mod engine;
pub mod input;
pub mod resolve;
pub mod select;
pub mod util;

pub use artifact::{Artifact, ArtifactCatalog, ArtifactKind, CatalogError};
pub use config::{ConfigError, GenpickConfig};
pub use engine::{ContextEngine, ContextError, EngineError, GenerationEngine, ParsedInput};
pub use input::{InputError, InputFile, OutputRoot};
pub use resolve::{resolve_for_inputs, CrossInputReducer, InputResolver, ResolveError};
pub use select::{
    search, select, ConsolePrompt, FuzzyMatcher, Prompt, SelectionError, SelectionResolver,
};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
