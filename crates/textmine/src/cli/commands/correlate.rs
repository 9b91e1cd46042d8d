//! Implementation of `textmine correlate`.

use std::process::ExitCode;

use textmine_core::Correlations;

use crate::cli::{args::PairCommand, context::CommandContext, output::emit};

/// Ranks co-occurring pairs by their phi coefficient.
pub fn run(ctx: &CommandContext, cmd: &PairCommand) -> ExitCode {
    let table = match ctx.tokens(&cmd.input, &cmd.field) {
        Ok(table) => table,
        Err(code) => return code,
    };

    let min_count = cmd
        .min_count
        .unwrap_or(ctx.config.output.min_pair_count);
    let mut correlations = match Correlations::from_tokens(&table, min_count) {
        Ok(correlations) => correlations,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(term) = &cmd.term {
        correlations = correlations.involving(&table.field().normalize_term(term));
    }
    emit(correlations.records(), &ctx.output_options(&cmd.output))
}
