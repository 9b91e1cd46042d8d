//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, InputSettings, OutputSettings, StopwordSettings, TokenizeSettings,
    parse::{RawConfig, RawInputSettings, RawOutputSettings, RawTokenizeSettings},
    resolve::resolve_config_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Returns the directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Custom stop words and stop-word files: unioned across all configs, duplicates removed,
///   higher-precedence entries first
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let input = merge_section(configs, |c| c.input.as_ref(), apply_raw_input);
    let tokenize = merge_section(configs, |c| c.tokenize.as_ref(), apply_raw_tokenize);
    let output = merge_section(configs, |c| c.output.as_ref(), apply_raw_output);
    let stopwords = merge_stopwords(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        input,
        tokenize,
        stopwords,
        output,
        config_root,
    })
}

/// Merges one scalar section, taking the first defined value for each field.
fn merge_section<T, R>(
    configs: &[ParsedConfig],
    section: impl Fn(&RawConfig) -> Option<&R>,
    apply: impl Fn(&mut T, &R),
) -> T
where
    T: Default,
{
    let mut result = T::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(raw) = section(&parsed.config) {
            apply(&mut result, raw);
        }
    }

    result
}

/// Applies raw input settings to result, overwriting any present values.
fn apply_raw_input(result: &mut InputSettings, raw: &RawInputSettings) {
    if let Some(ref v) = raw.id_field {
        result.id_field = v.clone();
    }
    if let Some(ref v) = raw.text_field {
        result.text_field = v.clone();
    }
    if let Some(ref v) = raw.tag_field {
        result.tag_field = v.clone();
    }
}

/// Applies raw tokenizer settings to result.
fn apply_raw_tokenize(result: &mut TokenizeSettings, raw: &RawTokenizeSettings) {
    if let Some(v) = raw.min_word_length {
        result.min_word_length = v;
    }
    if let Some(v) = raw.drop_numeric {
        result.drop_numeric = v;
    }
    if let Some(v) = raw.drop_versions {
        result.drop_versions = v;
    }
}

/// Applies raw output settings to result.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.min_pair_count {
        result.min_pair_count = v;
    }
}

/// Merges stop-word settings.
///
/// The language is a scalar (first defined wins). Custom words and files accumulate in
/// precedence order; file paths resolve relative to the config that names them.
fn merge_stopwords(configs: &[ParsedConfig]) -> Result<StopwordSettings, ConfigError> {
    let mut result = StopwordSettings::default();

    if let Some(language) = configs
        .iter()
        .filter_map(|c| c.config.stopwords.as_ref())
        .find_map(|s| s.language.clone())
    {
        result.language = language;
    }

    for parsed in configs {
        let Some(ref raw) = parsed.config.stopwords else {
            continue;
        };
        for word in raw.custom.iter().flatten() {
            if !result.custom.contains(word) {
                result.custom.push(word.clone());
            }
        }
        for file in raw.files.iter().flatten() {
            let path = resolve_config_path(file, parsed.dir())?;
            if !result.files.contains(&path) {
                result.files.push(path);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::parse_config_str, test_support::TestDir};

    fn parsed(path: PathBuf, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path,
            config: parse_config_str(toml, Path::new("test")).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]).unwrap();
        assert_eq!(result.output.limit, 20);
        assert!(result.config_root.is_none());
    }

    #[test]
    fn test_merge_single_config() {
        let test_dir = TestDir::new();
        let config = parsed(
            test_dir.path().join(".textmine.toml"),
            r#"
[input]
text_field = "title"

[output]
limit = 10
"#,
        );

        let result = merge_configs(&[config]).unwrap();
        assert_eq!(result.input.text_field, "title");
        assert_eq!(result.input.id_field, "id");
        assert_eq!(result.output.limit, 10);
        assert_eq!(result.config_root, Some(test_dir.path().to_path_buf()));
    }

    #[test]
    fn test_merge_scalar_override() {
        let test_dir = TestDir::new();

        let high_prec = parsed(
            test_dir.path().join("project/.textmine.toml"),
            "[output]\nlimit = 50\n",
        );
        let low_prec = parsed(
            test_dir.path().join(".textmine.toml"),
            "[output]\nlimit = 5\nmin_pair_count = 3\n",
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();

        // High precedence wins for limit
        assert_eq!(result.output.limit, 50);
        // Low precedence provides min_pair_count (not overridden)
        assert_eq!(result.output.min_pair_count, 3);
    }

    #[test]
    fn test_merge_three_way() {
        let test_dir = TestDir::new();

        let leaf = parsed(
            test_dir.path().join("project/sub/.textmine.toml"),
            "[tokenize]\nmin_word_length = 3\n",
        );
        let mid = parsed(
            test_dir.path().join("project/.textmine.toml"),
            "[tokenize]\nmin_word_length = 2\ndrop_numeric = false\n",
        );
        let root = parsed(
            test_dir.path().join(".textmine.toml"),
            "[tokenize]\nmin_word_length = 1\ndrop_numeric = true\ndrop_versions = false\n",
        );

        let result = merge_configs(&[leaf, mid, root]).unwrap();

        // leaf wins min_word_length, mid wins drop_numeric, root wins drop_versions
        assert_eq!(result.tokenize.min_word_length, 3);
        assert!(!result.tokenize.drop_numeric);
        assert!(!result.tokenize.drop_versions);
        assert_eq!(
            result.config_root,
            Some(test_dir.path().join("project/sub"))
        );
    }

    #[test]
    fn test_merge_stopwords_union() {
        let test_dir = TestDir::new();

        let high_prec = parsed(
            test_dir.path().join("project/.textmine.toml"),
            r#"
[stopwords]
custom = ["data", "set"]
files = "./local.txt"
"#,
        );
        let low_prec = parsed(
            test_dir.path().join(".textmine.toml"),
            r#"
[stopwords]
language = "none"
custom = ["set", "v1"]
files = ["shared.txt", "project/local.txt"]
"#,
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();

        assert_eq!(result.stopwords.language, "none");
        assert_eq!(result.stopwords.custom, vec!["data", "set", "v1"]);
        assert_eq!(
            result.stopwords.files,
            vec![
                test_dir.path().join("project/local.txt"),
                test_dir.path().join("shared.txt"),
            ]
        );
    }

    #[test]
    fn test_merge_language_first_wins() {
        let test_dir = TestDir::new();
        let high_prec = parsed(
            test_dir.path().join("project/.textmine.toml"),
            "[stopwords]\nlanguage = \"french\"\n",
        );
        let low_prec = parsed(
            test_dir.path().join(".textmine.toml"),
            "[stopwords]\nlanguage = \"german\"\n",
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        assert_eq!(result.stopwords.language, "french");
    }
}
