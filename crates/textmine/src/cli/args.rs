//! Clap argument definitions for the `textmine` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "textmine")]
#[command(about = "Text mining for document corpora: term counts, tf-idf and co-occurrence")]
pub struct Cli {
    /// Verbosity level (-v for progress, -vv for stage details)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Corpus location and identifier mapping.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON array, JSON Lines file (.jsonl, .ndjson), or directory of .txt files
    pub input: PathBuf,

    /// JSON key holding document identifiers [default: input.id_field]
    #[arg(long, value_name = "KEY")]
    pub id_field: Option<String>,
}

/// Which field of every document is tokenized.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Free-text field to tokenize [default: input.text_field, or text for a directory]
    #[arg(long, value_name = "FIELD", conflicts_with = "tags")]
    pub field: Option<String>,

    /// Use a tag-list field instead of free text [default: input.tag_field]
    #[arg(long, value_name = "FIELD")]
    pub tags: Option<Option<String>>,
}

/// Shared output format flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output a JSON array
    #[arg(long, conflicts_with = "jsonl")]
    pub json: bool,

    /// Output JSON Lines, one record per line
    #[arg(long)]
    pub jsonl: bool,

    /// Write JSON output to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum rows to output, 0 for all [default: 20 in tables, all in JSON]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `textmine tokens`, `counts` and `words`.
#[derive(Args, Debug, Clone)]
pub struct FieldCommand {
    #[command(flatten)]
    /// Corpus location.
    pub input: InputArgs,

    #[command(flatten)]
    /// Field selection.
    pub field: FieldArgs,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `textmine tfidf`.
#[derive(Args, Debug, Clone)]
pub struct TfIdfCommand {
    #[command(flatten)]
    /// Corpus location.
    pub input: InputArgs,

    #[command(flatten)]
    /// Field selection.
    pub field: FieldArgs,

    /// Keep only the N highest-scoring terms of each document
    #[arg(long, value_name = "N", conflicts_with = "ranked")]
    pub top: Option<usize>,

    /// Sort all rows by score, highest first
    #[arg(long)]
    pub ranked: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `textmine pairs` and `correlate`.
#[derive(Args, Debug, Clone)]
pub struct PairCommand {
    #[command(flatten)]
    /// Corpus location.
    pub input: InputArgs,

    #[command(flatten)]
    /// Field selection.
    pub field: FieldArgs,

    /// Hide pairs seen in fewer documents than this [default: 1]
    #[arg(long, value_name = "N")]
    pub min_count: Option<u64>,

    /// Only show pairs that include this term
    #[arg(short = 't', long)]
    pub term: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `textmine stopwords`.
#[derive(Args, Debug, Clone)]
pub struct StopwordsCommand {
    /// Only show configured custom words and word-list files, not the base list
    #[arg(long)]
    pub custom: bool,

    /// Output a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `textmine init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.textmine.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `textmine` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the tokens of one field for every document
    Tokens(FieldCommand),

    /// Count terms per document
    Counts(FieldCommand),

    /// Show corpus-wide word frequencies
    Words(FieldCommand),

    /// Score terms per document by tf-idf
    #[command(after_help = "\
SCORING:
  tf     raw_count / document_total
  idf    ln(N / df), N documents, df documents containing the term
  tfidf  tf * idf

  A term present in every document scores 0.

EXAMPLES:
  textmine tfidf corpus.json
  textmine tfidf corpus.json --top 5
  textmine tfidf docs/ --field text --ranked -n 50")]
    Tfidf(TfIdfCommand),

    /// Count documents in which two terms appear together
    #[command(after_help = "\
Each document counts once per pair, however often the terms repeat in it.
Pairs are listed most frequent first.

EXAMPLES:
  textmine pairs corpus.json --tags
  textmine pairs corpus.json --tags keyword --min-count 3
  textmine pairs corpus.json --term ozone")]
    Pairs(PairCommand),

    /// Rank co-occurring pairs by phi correlation
    Correlate(PairCommand),

    /// Show the effective stop-word list
    Stopwords(StopwordsCommand),

    /// Initialize textmine configuration in current directory
    Init(InitCommand),

    /// Show configuration files and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments, printing a compact command list for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_list();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom top-level help with one line per subcommand.
fn print_command_list() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: textmine [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -v, --verbose...  Verbosity level (-v for progress, -vv for stage details)");
    println!("  -h, --help        Print help");
}

#[cfg(test)]
mod tests {
    use textmine_config::{DEFAULT_LIMIT, DEFAULT_MIN_PAIR_COUNT};

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Verifies that CLI help text contains the correct default values.
    #[test]
    fn cli_help_defaults_match_constants() {
        let cmd = Cli::command();

        for subcmd in ["tokens", "counts", "words", "tfidf", "pairs", "correlate"] {
            let limit_help = get_arg_help(&cmd, subcmd, "limit");
            assert!(
                limit_help.contains(&format!("[default: {DEFAULT_LIMIT} in tables")),
                "{subcmd} --limit help should contain default {DEFAULT_LIMIT}: {limit_help}"
            );
        }

        for subcmd in ["pairs", "correlate"] {
            let min_help = get_arg_help(&cmd, subcmd, "min_count");
            assert!(
                min_help.contains(&format!("[default: {DEFAULT_MIN_PAIR_COUNT}]")),
                "{subcmd} --min-count help should contain default {DEFAULT_MIN_PAIR_COUNT}: {min_help}"
            );
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tags_flag_takes_an_optional_name() {
        let cli = Cli::try_parse_from(["textmine", "pairs", "c.json", "--tags"]).unwrap();
        let Commands::Pairs(cmd) = cli.command else {
            panic!("expected pairs");
        };
        assert_eq!(cmd.field.tags, Some(None));

        let cli =
            Cli::try_parse_from(["textmine", "pairs", "c.json", "--tags", "platform"]).unwrap();
        let Commands::Pairs(cmd) = cli.command else {
            panic!("expected pairs");
        };
        assert_eq!(cmd.field.tags, Some(Some("platform".to_string())));
    }

    #[test]
    fn field_and_tags_conflict() {
        let result = Cli::try_parse_from([
            "textmine", "counts", "c.json", "--field", "title", "--tags",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn json_and_jsonl_conflict() {
        let result = Cli::try_parse_from(["textmine", "counts", "c.json", "--json", "--jsonl"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["textmine", "words", "c.json", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
