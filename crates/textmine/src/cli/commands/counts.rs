//! Implementation of `textmine counts`.

use std::process::ExitCode;

use textmine_core::TermCounts;

use crate::cli::{args::FieldCommand, context::CommandContext, output::emit};

/// Shows per-document term counts with document totals.
pub fn run(ctx: &CommandContext, cmd: &FieldCommand) -> ExitCode {
    let table = match ctx.tokens(&cmd.input, &cmd.field) {
        Ok(table) => table,
        Err(code) => return code,
    };

    let counts = TermCounts::from_tokens(&table);
    if let Err(e) = counts.verify() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    emit(counts.records(), &ctx.output_options(&cmd.output))
}
