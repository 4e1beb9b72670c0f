use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Picks code-generation artifacts that fit a set of input files
#[derive(Parser, Debug)]
#[command(
    name = "genpick",
    about = "Picks code-generation increments and templates that fit your input files",
    version,
    author,
    long_about = "genpick asks a trigger context which increments and templates can be \
                  generated from each input file, keeps the ones valid for all inputs, and \
                  lets you pick from them by id, by number, or by fuzzy search."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Trigger context file (overrides GENPICK_CONTEXT)"
    )]
    pub context: Option<PathBuf>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        visible_alias = "g",
        about = "Resolve and select artifacts to generate",
        long_about = "Resolves the artifacts valid for all input files and selects the ones to \
                      generate. Without --increments or --templates the choice is made \
                      interactively.\n\n\
                      Examples:\n  \
                      genpick generate src/main/java/Customer.java\n  \
                      genpick generate Customer.java,Order.java -i dataaccess,logic\n  \
                      genpick g api.yaml -t all -o ./generated --format json"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Search artifacts by name",
        long_about = "Lists the artifacts valid for all input files whose id or description is \
                      similar to the query, best match first.\n\n\
                      Examples:\n  \
                      genpick search crud Customer.java\n  \
                      genpick search entity Customer.java --templates"
    )]
    Search(SearchArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "INPUTS",
        required = true,
        help = "Input files, separated by spaces or commas"
    )]
    pub inputs: Vec<String>,

    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output root (defaults to each input's project root)"
    )]
    pub output_root: Option<String>,

    #[arg(
        short = 'i',
        long,
        value_name = "SELECTORS",
        value_delimiter = ',',
        help = "Increments to generate: ids, numbers, or 'all'"
    )]
    pub increments: Vec<String>,

    #[arg(
        short = 't',
        long,
        value_name = "SELECTORS",
        value_delimiter = ',',
        help = "Templates to generate: ids, numbers, or 'all'"
    )]
    pub templates: Vec<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    #[arg(value_name = "QUERY", help = "Text to look for in ids and descriptions")]
    pub query: String,

    #[arg(
        value_name = "INPUTS",
        required = true,
        help = "Input files, separated by spaces or commas"
    )]
    pub inputs: Vec<String>,

    #[arg(long, help = "Search templates instead of increments")]
    pub templates: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
