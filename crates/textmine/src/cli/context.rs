//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use log::{info, warn};
use textmine_config::Config;
use textmine_core::{Corpus, Field, TokenTable, Tokenizer};
use textmine_source::{SourceOptions, TEXT_FIELD};

use super::{
    args::{FieldArgs, InputArgs, OutputArgs},
    output::OutputOptions,
};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Resolves the output options for a command, applying the configured row limit.
    pub fn output_options(&self, args: &OutputArgs) -> OutputOptions {
        OutputOptions::from_args(args, self.config.output.limit)
    }

    /// Returns the field selected by `--field` / `--tags`, falling back to configuration.
    ///
    /// A directory of text files only has the [`TEXT_FIELD`] field, so that is the default
    /// for directory input.
    pub fn field(&self, input: &InputArgs, args: &FieldArgs) -> Field {
        match (&args.tags, &args.field) {
            (Some(Some(name)), _) => Field::Tags(name.clone()),
            (Some(None), _) => Field::Tags(self.config.input.tag_field.clone()),
            (None, Some(name)) => Field::Text(name.clone()),
            (None, None) if self.cwd.join(&input.input).is_dir() => {
                Field::Text(TEXT_FIELD.to_string())
            }
            (None, None) => Field::Text(self.config.input.text_field.clone()),
        }
    }

    /// Builds a tokenizer from the configured stop words and noise rules.
    pub fn tokenizer(&self) -> Result<Tokenizer, ExitCode> {
        let stopwords = self.config.build_stopwords().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        info!("using {} stop words", stopwords.len());
        Ok(Tokenizer::with_options(
            stopwords,
            self.config.tokenizer_options(),
        ))
    }

    /// Reads the corpus at the input path, skipping malformed documents.
    pub fn load_corpus(&self, input: &InputArgs) -> Result<Corpus, ExitCode> {
        let path = self.cwd.join(&input.input);
        let options = SourceOptions {
            id_field: input
                .id_field
                .clone()
                .unwrap_or_else(|| self.config.input.id_field.clone()),
        };

        let raw = textmine_source::load(&path, &options).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        let (corpus, report) = Corpus::ingest(raw);
        for skipped in &report.skipped {
            info!("skipped: {skipped}");
        }
        Ok(corpus)
    }

    /// Loads the corpus and tokenizes the selected field of every document.
    pub fn tokens(&self, input: &InputArgs, field: &FieldArgs) -> Result<TokenTable, ExitCode> {
        let tokenizer = self.tokenizer()?;
        let corpus = self.load_corpus(input)?;
        let field = self.field(input, field);
        warn_if_field_absent(&corpus, &field);

        let table = tokenizer.tokenize_field(&corpus, &field);
        info!(
            "{} tokens in {} documents ({field})",
            table.token_count(),
            table.document_count()
        );
        Ok(table)
    }
}

/// Warns when no document carries the selected field, which usually means a typo.
fn warn_if_field_absent(corpus: &Corpus, field: &Field) {
    if corpus.is_empty() {
        return;
    }
    let present = corpus.documents().iter().any(|doc| match field {
        Field::Text(name) => doc.text(name).is_some(),
        Field::Tags(name) => doc.tags(name).is_some(),
    });
    if !present {
        warn!("no document has the field {field}");
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
