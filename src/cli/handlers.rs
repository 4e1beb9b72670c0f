//! Command handlers
//!
//! Each handler runs one subcommand, prints its report to stdout and returns
//! the process exit code. Failures are reported on stderr, with the
//! troubleshooting text of the underlying error when it has one.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::commands::{GenerateArgs, SearchArgs};
use super::output::{GenerationPlan, OutputFormatter, PlannedInput, SearchReport};
use crate::artifact::{ArtifactCatalog, ArtifactKind};
use crate::config::GenpickConfig;
use crate::engine::{ContextEngine, ParsedInput};
use crate::input::{split_list, InputFile, OutputRoot};
use crate::resolve::{resolve_for_inputs, ResolveError};
use crate::select::{select, ConsolePrompt, FuzzyMatcher, Prompt, SelectionError};

pub fn handle_generate(args: &GenerateArgs, config: &GenpickConfig) -> i32 {
    let mut prompt = ConsolePrompt::stdio();
    exit_code(run_generate(args, config, &mut prompt))
}

pub fn handle_search(args: &SearchArgs, config: &GenpickConfig) -> i32 {
    exit_code(run_search(args, config))
}

fn exit_code(result: Result<String>) -> i32 {
    match result {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            0
        }
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            1
        }
    }
}

/// Troubleshooting text for known errors, the error chain otherwise
pub fn describe_error(err: &anyhow::Error) -> String {
    if let Some(resolve) = err.downcast_ref::<ResolveError>() {
        return resolve.help_message();
    }
    if let Some(selection) = err.downcast_ref::<SelectionError>() {
        return format!("Error: {}\n\nHelp: {}", selection, selection.help_message());
    }
    format!("Error: {:#}", err)
}

/// Which kind a `generate` run works on
///
/// Templates only when they were asked for and increments were not.
pub fn generation_kind(args: &GenerateArgs) -> ArtifactKind {
    if !args.templates.is_empty() && args.increments.is_empty() {
        ArtifactKind::Template
    } else {
        ArtifactKind::Increment
    }
}

pub fn run_generate<P>(args: &GenerateArgs, config: &GenpickConfig, prompt: &mut P) -> Result<String>
where
    P: Prompt + ?Sized,
{
    let engine = load_engine(config)?;
    let files = open_inputs(&args.inputs)?;

    let fixed_root = args
        .output_root
        .as_deref()
        .map(OutputRoot::open)
        .transpose()?;
    let planned: Vec<PlannedInput> = files
        .iter()
        .map(|file| {
            let root = fixed_root
                .clone()
                .unwrap_or_else(|| OutputRoot::for_input(file));
            PlannedInput {
                path: file.path().to_path_buf(),
                output_root: root.path().to_path_buf(),
            }
        })
        .collect();

    let kind = generation_kind(args);
    let selectors = match kind {
        ArtifactKind::Template => split_list(&args.templates),
        ArtifactKind::Increment => split_list(&args.increments),
    };

    let catalog = resolve_catalog(&engine, &files, kind)?;
    let artifacts = select(&selectors, &catalog, prompt)?;
    info!(count = artifacts.len(), "Selected {}s", kind);

    let plan = GenerationPlan {
        kind,
        inputs: planned,
        artifacts,
    };
    OutputFormatter::new(args.format.into()).format_plan(&plan)
}

pub fn run_search(args: &SearchArgs, config: &GenpickConfig) -> Result<String> {
    let engine = load_engine(config)?;
    let files = open_inputs(&args.inputs)?;

    let kind = if args.templates {
        ArtifactKind::Template
    } else {
        ArtifactKind::Increment
    };

    let catalog = resolve_catalog(&engine, &files, kind)?;
    let ranked = FuzzyMatcher::with_threshold(config.search_threshold).rank(&args.query, &catalog);
    let report = SearchReport::new(args.query.clone(), kind, &ranked);
    OutputFormatter::new(args.format.into()).format_search(&report)
}

fn load_engine(config: &GenpickConfig) -> Result<ContextEngine> {
    debug!(context = %config.context_path().display(), "Loading trigger context");
    ContextEngine::load(config.context_path()).with_context(|| {
        format!(
            "Failed to load trigger context {}",
            config.context_path().display()
        )
    })
}

fn open_inputs(raw: &[String]) -> Result<Vec<InputFile>> {
    let files = split_list(raw)
        .iter()
        .map(|value| InputFile::open(value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(files)
}

fn resolve_catalog(
    engine: &ContextEngine,
    files: &[InputFile],
    kind: ArtifactKind,
) -> Result<ArtifactCatalog> {
    let parsed = files
        .iter()
        .map(|file| engine.read_input(file.path()))
        .collect::<Result<Vec<ParsedInput>, _>>()?;
    Ok(resolve_for_inputs(engine, &parsed, kind)?)
}
