//! Implementation of `textmine config`.

use std::process::ExitCode;

use textmine_style::toml_for_terminal;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    print!("{}", toml_for_terminal(&ctx.config.settings_to_toml()));
    ExitCode::SUCCESS
}
