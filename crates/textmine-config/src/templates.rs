//! Starter files written by `textmine init`.
//!
//! Templates are generated from [`Config::default`], so each commented-out value is the
//! value textmine already uses. Uncommenting a key and its section header changes it.

use toml::Value;

use crate::Config;

/// A documented key in a template.
struct Setting {
    /// TOML key.
    key: &'static str,
    /// Comment written above the key.
    help: &'static str,
    /// Default value.
    value: Value,
}

/// A `[section]` in a template.
struct Section {
    /// Table name.
    name: &'static str,
    /// Keys in the order they are written.
    settings: Vec<Setting>,
}

/// Returns the project template for `.textmine.toml`.
pub fn local_template() -> String {
    let defaults = Config::default();
    let mut out = String::from(
        "# textmine project configuration.\n\
         #\n\
         # Settings here override parent directories and ~/.textmine.toml.\n\
         # Uncomment a key together with its [section] line to change it.\n\
         \n\
         # Stop looking for configuration in parent directories.\n\
         # root = false\n",
    );
    let sections = [
        input_section(&defaults),
        tokenize_section(&defaults),
        stopwords_section(&defaults),
        output_section(&defaults),
    ];
    render_sections(&mut out, &sections);
    out
}

/// Returns the template for the global `~/.textmine.toml`.
pub fn global_template() -> String {
    let defaults = Config::default();
    let mut out = String::from(
        "# textmine global configuration (~/.textmine.toml).\n\
         #\n\
         # Lowest precedence: every .textmine.toml above the working directory wins.\n\
         # Custom stop words and stop-word files from all configs are combined.\n",
    );
    let sections = [stopwords_section(&defaults), output_section(&defaults)];
    render_sections(&mut out, &sections);
    out
}

/// Writes sections as commented-out TOML.
fn render_sections(out: &mut String, sections: &[Section]) {
    for section in sections {
        out.push_str(&format!("\n# [{}]\n", section.name));
        for setting in &section.settings {
            out.push_str(&format!(
                "# {}\n# {} = {}\n",
                setting.help, setting.key, setting.value
            ));
        }
    }
}

/// Builds a setting.
fn setting(key: &'static str, help: &'static str, value: impl Into<Value>) -> Setting {
    Setting {
        key,
        help,
        value: value.into(),
    }
}

/// Integer setting; counts above `i64::MAX` are clamped.
fn count(value: impl TryInto<i64>) -> Value {
    Value::Integer(value.try_into().unwrap_or(i64::MAX))
}

/// String-array setting.
fn strings<S: AsRef<str>>(values: &[S]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|v| Value::String(v.as_ref().to_string()))
            .collect(),
    )
}

/// `[input]` keys.
fn input_section(defaults: &Config) -> Section {
    let input = &defaults.input;
    Section {
        name: "input",
        settings: vec![
            setting(
                "id_field",
                "JSON key holding the document identifier (string or number).",
                input.id_field.as_str(),
            ),
            setting(
                "text_field",
                "Text field tokenized when no --field is given.",
                input.text_field.as_str(),
            ),
            setting(
                "tag_field",
                "Tag field used by --tags when no field name is given.",
                input.tag_field.as_str(),
            ),
        ],
    }
}

/// `[tokenize]` keys.
fn tokenize_section(defaults: &Config) -> Section {
    let tokenize = &defaults.tokenize;
    Section {
        name: "tokenize",
        settings: vec![
            setting(
                "min_word_length",
                "Discard tokens shorter than this many characters.",
                count(tokenize.min_word_length),
            ),
            setting(
                "drop_numeric",
                "Discard tokens made only of digits (\"2015\").",
                tokenize.drop_numeric,
            ),
            setting(
                "drop_versions",
                "Discard version artifacts (\"v1\", \"v03\").",
                tokenize.drop_versions,
            ),
        ],
    }
}

/// `[stopwords]` keys.
fn stopwords_section(defaults: &Config) -> Section {
    let stopwords = &defaults.stopwords;
    let files: Vec<String> = stopwords
        .files
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    Section {
        name: "stopwords",
        settings: vec![
            setting(
                "language",
                "Base list: english, french, german, spanish, italian, portuguese, dutch, russian, or none.",
                stopwords.language.as_str(),
            ),
            setting(
                "custom",
                "Corpus-specific noise words such as [\"data\", \"set\"], added to the base list.",
                strings(&stopwords.custom),
            ),
            setting(
                "files",
                "Word-list files, one word per line, relative to this file.",
                strings(&files),
            ),
        ],
    }
}

/// `[output]` keys.
fn output_section(defaults: &Config) -> Section {
    let output = &defaults.output;
    Section {
        name: "output",
        settings: vec![
            setting(
                "limit",
                "Rows shown in terminal tables (0 = all).",
                count(output.limit),
            ),
            setting(
                "min_pair_count",
                "Hide pairs seen in fewer documents than this.",
                count(output.min_pair_count),
            ),
        ],
    }
}
