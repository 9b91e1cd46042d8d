//! textmine: text mining for document corpora.
//!
//! Reads a corpus of documents (a JSON array, a JSON Lines file, or a directory of
//! plain-text files), tokenizes one field of every document, and reports per-document
//! term counts, tf-idf scores, and document-level co-occurrence of term pairs.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use cli::{CommandContext, args::parse_cli, commands, init_logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let ctx = if commands::needs_config(&cli.command) {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };

    match ctx {
        Ok(ctx) => commands::run(&cli.command, &ctx),
        Err(code) => code,
    }
}
