use genpick::cli::commands::{CliArgs, Commands};
use genpick::cli::handlers::{handle_generate, handle_search};
use genpick::util::logging::{init_from_env, parse_level};
use genpick::{GenpickConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("genpick v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match GenpickConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let config = match &args.context {
        Some(path) => config.with_context(path.clone()),
        None => config,
    };
    debug!("{}", config);

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => handle_generate(generate_args, &config),
        Commands::Search(search_args) => handle_search(search_args, &config),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        Some(parse_level(level_str))
    } else if args.verbose {
        Some(Level::DEBUG)
    } else if args.quiet {
        Some(Level::ERROR)
    } else {
        None
    };

    init_from_env(level);
}
