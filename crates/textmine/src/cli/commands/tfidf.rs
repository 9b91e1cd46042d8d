//! Implementation of `textmine tfidf`.

use std::process::ExitCode;

use textmine_core::{TermCounts, TfIdf, TfIdfTable};

use crate::cli::{args::TfIdfCommand, context::CommandContext, output::emit};

/// Scores every counted term by tf-idf.
pub fn run(ctx: &CommandContext, cmd: &TfIdfCommand) -> ExitCode {
    let table = match ctx.tokens(&cmd.input, &cmd.field) {
        Ok(table) => table,
        Err(code) => return code,
    };

    let scores = match TfIdfTable::score(&TermCounts::from_tokens(&table)) {
        Ok(scores) => scores,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rows: Vec<&TfIdf> = match (cmd.top, cmd.ranked) {
        (Some(n), _) => scores.top_per_document(n),
        (None, true) => scores.ranked(),
        (None, false) => scores.records().iter().collect(),
    };
    emit(&rows, &ctx.output_options(&cmd.output))
}
