//! CLI support for the `textmine` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;

use env_logger::{Builder, Env};
use log::LevelFilter;

pub use context::CommandContext;

/// Installs the logger on stderr.
///
/// The level is `warn` by default, `info` with `-v` and `debug` with `-vv`. A `RUST_LOG`
/// directive overrides the flags.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .format_timestamp(None)
        .format_target(false)
        .init();
}
