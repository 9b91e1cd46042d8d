//! Command implementations and dispatch.

pub mod config;
pub mod correlate;
pub mod counts;
pub mod init;
pub mod pairs;
pub mod status;
pub mod stopwords;
pub mod tfidf;
pub mod tokens;
pub mod words;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Tokens(cmd) => tokens::run(ctx, cmd),
        Commands::Counts(cmd) => counts::run(ctx, cmd),
        Commands::Words(cmd) => words::run(ctx, cmd),
        Commands::Tfidf(cmd) => tfidf::run(ctx, cmd),
        Commands::Pairs(cmd) => pairs::run(ctx, cmd),
        Commands::Correlate(cmd) => correlate::run(ctx, cmd),
        Commands::Stopwords(cmd) => stopwords::run(ctx, cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
    }
}

/// Returns true if the command reads the merged configuration.
///
/// `init` must work even when an existing config file is invalid.
pub fn needs_config(command: &Commands) -> bool {
    !matches!(command, Commands::Init(_))
}
