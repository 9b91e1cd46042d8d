//! Rendering and JSON serialization for CLI output.

use std::{fs, path::PathBuf, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use log::info;
use serde::Serialize;
pub use textmine_style::{dim, header, subheader, warning};
use textmine_style::json_for_terminal;
use textmine_core::{CoOccurrence, Correlation, TermCount, TfIdf, TokenRecord, WordFrequency};

use crate::cli::args::OutputArgs;

/// How records are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Terminal table.
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// One JSON object per line.
    JsonLines,
}

/// Resolved output settings for one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Output format.
    pub mode: OutputMode,
    /// File receiving JSON output instead of stdout.
    pub path: Option<PathBuf>,
    /// Maximum rows written, `None` for all.
    pub limit: Option<usize>,
}

impl OutputOptions {
    /// Resolves CLI flags against the configured table limit.
    ///
    /// `--output` without a format flag writes a JSON array. The configured limit only
    /// applies to tables; JSON output is complete unless `--limit` is given. A limit of 0
    /// means all rows.
    pub fn from_args(args: &OutputArgs, table_limit: usize) -> Self {
        let mode = if args.jsonl {
            OutputMode::JsonLines
        } else if args.json || args.output.is_some() {
            OutputMode::Json
        } else {
            OutputMode::Table
        };

        let limit = match (args.limit, mode) {
            (Some(n), _) => n,
            (None, OutputMode::Table) => table_limit,
            (None, _) => 0,
        };

        Self {
            mode,
            path: args.output.clone(),
            limit: (limit > 0).then_some(limit),
        }
    }
}

/// A record that can be shown as one row of a terminal table.
pub trait TableRow: Serialize {
    /// Column headers, matching the serialized field names.
    const HEADERS: &'static [&'static str];

    /// Returns the cells of this row.
    fn cells(&self) -> Vec<Cell>;
}

impl<T: TableRow> TableRow for &T {
    const HEADERS: &'static [&'static str] = T::HEADERS;

    fn cells(&self) -> Vec<Cell> {
        (*self).cells()
    }
}

/// Right-aligned integer cell.
fn count_cell(value: u64) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Right-aligned float cell with four decimals.
fn score_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.4}")).set_alignment(CellAlignment::Right)
}

impl TableRow for TokenRecord {
    const HEADERS: &'static [&'static str] = &["document_id", "token"];

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::new(&self.document_id), Cell::new(&self.token)]
    }
}

impl TableRow for TermCount {
    const HEADERS: &'static [&'static str] =
        &["document_id", "term", "raw_count", "document_total"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.document_id),
            Cell::new(&self.term),
            count_cell(self.raw_count),
            count_cell(self.document_total),
        ]
    }
}

impl TableRow for WordFrequency {
    const HEADERS: &'static [&'static str] = &["term", "count", "document_frequency"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.term),
            count_cell(self.count),
            count_cell(self.document_frequency),
        ]
    }
}

impl TableRow for TfIdf {
    const HEADERS: &'static [&'static str] = &[
        "document_id",
        "term",
        "raw_count",
        "document_total",
        "term_frequency",
        "inverse_document_frequency",
        "tfidf_score",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.document_id),
            Cell::new(&self.term),
            count_cell(self.raw_count),
            count_cell(self.document_total),
            score_cell(self.term_frequency),
            score_cell(self.inverse_document_frequency),
            score_cell(self.tfidf_score),
        ]
    }
}

impl TableRow for CoOccurrence {
    const HEADERS: &'static [&'static str] = &["term_a", "term_b", "pair_count"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.term_a),
            Cell::new(&self.term_b),
            count_cell(self.pair_count),
        ]
    }
}

impl TableRow for Correlation {
    const HEADERS: &'static [&'static str] = &["term_a", "term_b", "pair_count", "phi"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.term_a),
            Cell::new(&self.term_b),
            count_cell(self.pair_count),
            score_cell(self.phi),
        ]
    }
}

/// Writes records in the selected format.
pub fn emit<R: TableRow>(records: &[R], options: &OutputOptions) -> ExitCode {
    let shown = match options.limit {
        Some(n) if n < records.len() => &records[..n],
        _ => records,
    };

    let rendered = match options.mode {
        OutputMode::Table => {
            print_table(shown, records.len());
            return ExitCode::SUCCESS;
        }
        OutputMode::Json => render_json(shown),
        OutputMode::JsonLines => render_json_lines(shown),
    };

    match rendered {
        Ok(text) => write_rendered(&text, options),
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a table, noting how many rows were left out.
fn print_table<R: TableRow>(shown: &[R], total: usize) {
    if shown.is_empty() {
        println!("{}", dim("No rows."));
        return;
    }

    println!("{}", render_table(shown));
    if shown.len() < total {
        println!(
            "{}",
            dim(&format!(
                "showing {} of {total} rows (use -n 0 for all)",
                shown.len()
            ))
        );
    }
}

/// Builds a terminal table for records.
pub fn render_table<R: TableRow>(records: &[R]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(R::HEADERS.to_vec());
    for record in records {
        table.add_row(record.cells());
    }
    table
}

/// Renders records as a pretty-printed JSON array.
pub fn render_json<R: Serialize>(records: &[R]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

/// Renders records as JSON Lines.
pub fn render_json_lines<R: Serialize>(records: &[R]) -> serde_json::Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Sends rendered JSON to the output file, or to stdout.
fn write_rendered(text: &str, options: &OutputOptions) -> ExitCode {
    match &options.path {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("error: failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            info!("wrote {}", path.display());
        }
        None if options.mode == OutputMode::Json => print!("{}", json_for_terminal(text)),
        None => print!("{text}"),
    }
    ExitCode::SUCCESS
}
