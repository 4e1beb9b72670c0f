pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, GenerateArgs, SearchArgs};
pub use handlers::{handle_generate, handle_search};
pub use output::{GenerationPlan, OutputFormat, OutputFormatter, SearchReport};
