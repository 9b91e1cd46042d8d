//! Implementation of `textmine status`.

use std::process::ExitCode;

use textmine_config::{ConfigScope, ConfigWarning, find_config_files, format_path_for_display};

use crate::cli::{
    context::CommandContext,
    output::{dim, header, subheader, warning},
};

/// Shows configuration files, input fields, stop-word sources, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;

    println!("{}", header("textmine status"));
    println!();

    let config_files = find_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found, using defaults."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("textmine init")
        );
        println!();
    } else {
        println!("{}", subheader("Config files:"));
        for file in &config_files {
            let display_path = format_path_for_display(&file.path, Some(cwd.as_path()));
            let mut labels = Vec::new();
            if file.scope == ConfigScope::Global {
                labels.push("global");
            }
            if file.is_root {
                labels.push("root");
            }
            if labels.is_empty() {
                println!("   {display_path}");
            } else {
                println!("   {display_path} {}", dim(&format!("({})", labels.join(", "))));
            }
        }
        println!();
    }

    println!("{}", subheader("Input fields:"));
    println!("   id    {}", config.input.id_field);
    println!("   text  {}", config.input.text_field);
    println!("   tags  {}", config.input.tag_field);
    println!();

    println!("{}", subheader("Stop words:"));
    println!("   language  {}", config.stopwords.language);
    println!(
        "   custom    {}",
        dim(&format!("{} words", config.stopwords.custom.len()))
    );
    for path in &config.stopwords.files {
        let display_path = format_path_for_display(path, config.config_root.as_deref());
        if path.exists() {
            println!("   file      {display_path}");
        } else {
            println!("   file      {display_path} {}", warning("[missing]"));
        }
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::UnknownLanguage { .. } => {
                "Hint: run 'textmine stopwords' after fixing [stopwords] language"
            }
            ConfigWarning::UnmatchableStopword { .. } => {
                "Hint: custom stop words are compared with lowercase single words"
            }
            ConfigWarning::StopwordFileMissing { .. } => {
                "Hint: stop-word file paths are relative to the config file that lists them"
            }
            ConfigWarning::ZeroMinWordLength => "Hint: set [tokenize] min_word_length = 1",
        })
        .collect();
    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(hint));
    }
}
