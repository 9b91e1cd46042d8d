//! Implementation of `textmine tokens`.

use std::process::ExitCode;

use crate::cli::{args::FieldCommand, context::CommandContext, output::emit};

/// Lists every `(document_id, token)` occurrence of the selected field.
pub fn run(ctx: &CommandContext, cmd: &FieldCommand) -> ExitCode {
    let table = match ctx.tokens(&cmd.input, &cmd.field) {
        Ok(table) => table,
        Err(code) => return code,
    };
    emit(&table.records(), &ctx.output_options(&cmd.output))
}
