//! Implementation of `textmine words`.

use std::process::ExitCode;

use textmine_core::TermCounts;

use crate::cli::{args::FieldCommand, context::CommandContext, output::emit};

/// Shows corpus-wide word frequencies, most frequent first.
pub fn run(ctx: &CommandContext, cmd: &FieldCommand) -> ExitCode {
    let table = match ctx.tokens(&cmd.input, &cmd.field) {
        Ok(table) => table,
        Err(code) => return code,
    };

    let words = TermCounts::from_tokens(&table).word_frequencies();
    emit(&words, &ctx.output_options(&cmd.output))
}
