//! Implementation of `textmine pairs`.

use std::process::ExitCode;

use textmine_core::PairCounts;

use crate::cli::{args::PairCommand, context::CommandContext, output::emit};

/// Counts the documents in which each pair of terms appears together.
pub fn run(ctx: &CommandContext, cmd: &PairCommand) -> ExitCode {
    let table = match ctx.tokens(&cmd.input, &cmd.field) {
        Ok(table) => table,
        Err(code) => return code,
    };

    let min_count = cmd
        .min_count
        .unwrap_or(ctx.config.output.min_pair_count);
    let mut pairs = PairCounts::from_tokens(&table).with_min_count(min_count);
    if let Some(term) = &cmd.term {
        pairs = pairs.involving(&table.field().normalize_term(term));
    }
    emit(pairs.records(), &ctx.output_options(&cmd.output))
}
