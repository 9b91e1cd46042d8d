//! Implementation of `textmine stopwords`.

use std::process::ExitCode;

use textmine_style::json_for_terminal;

use crate::cli::{args::StopwordsCommand, context::CommandContext};

/// Prints the effective stop-word list, one word per line in sorted order.
pub fn run(ctx: &CommandContext, cmd: &StopwordsCommand) -> ExitCode {
    let stopwords = if cmd.custom {
        ctx.config.custom_stopwords()
    } else {
        ctx.config.build_stopwords()
    };
    let stopwords = match stopwords {
        Ok(stopwords) => stopwords,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let words = stopwords.sorted();
    if cmd.json {
        match serde_json::to_string_pretty(&words) {
            Ok(json) => println!("{}", json_for_terminal(&json)),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for word in words {
            println!("{word}");
        }
    }
    ExitCode::SUCCESS
}
