//! Integration tests for textmine-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use textmine_config::{CONFIG_FILENAME, Config, ConfigError, ConfigScope, ConfigWarning};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Backing temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Loads config from `rel_path`, ignoring any global config on the test machine.
    fn load_local(&self, rel_path: &str) -> Config {
        let cwd = self.path().join(rel_path);
        let files: Vec<PathBuf> = textmine_config::find_config_files(&cwd)
            .into_iter()
            .filter(|file| file.scope == ConfigScope::Project)
            .map(|file| file.path)
            .collect();
        Config::load_from_files(&files).unwrap()
    }
}

#[test]
fn test_load_no_config_returns_default() {
    let env = TestEnv::new();
    let config = env.load_local("");

    assert!(config.config_root.is_none());
    assert_eq!(config.output.limit, 20);
    assert_eq!(config.stopwords.language, "english");
}

#[test]
fn test_load_single_config() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
[input]
text_field = "title"

[output]
limit = 10
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.input.text_field, "title");
    assert_eq!(config.output.limit, 10);
    assert_eq!(config.config_root, Some(env.path().to_path_buf()));
}

#[test]
fn test_nested_configs_merge() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
[stopwords]
language = "none"
custom = ["data"]
files = "./global-noise.txt"

[output]
limit = 5
min_pair_count = 2
"#,
    );
    env.create_file("global-noise.txt", "set\n# comment\nv1\n");
    env.create_file(
        "project/.textmine.toml",
        r#"
[stopwords]
custom = ["data", "nasa"]

[output]
limit = 50
"#,
    );
    env.create_dir("project/src");

    let config = env.load_local("project/src");

    assert_eq!(config.output.limit, 50);
    assert_eq!(config.output.min_pair_count, 2);
    assert_eq!(config.stopwords.custom, vec!["data", "nasa"]);
    assert_eq!(config.stopwords.files, vec![env.path().join("global-noise.txt")]);
    assert_eq!(config.config_root, Some(env.path().join("project")));

    let stopwords = config.build_stopwords().unwrap();
    assert_eq!(stopwords.sorted(), vec!["data", "nasa", "set", "v1"]);
    assert!(config.validate().is_empty());
}

#[test]
fn test_root_config_hides_parents() {
    let env = TestEnv::new();
    env.create_file(CONFIG_FILENAME, "[output]\nlimit = 99\n");
    env.create_file("project/.textmine.toml", "root = true\n[tokenize]\nmin_word_length = 3\n");

    let config = Config::load(&env.path().join("project")).unwrap();

    assert_eq!(config.tokenize.min_word_length, 3);
    assert_eq!(config.output.limit, 20);
}

#[test]
fn test_invalid_toml_reports_path() {
    let env = TestEnv::new();
    let path = env.create_file(CONFIG_FILENAME, "[output\nlimit = ");

    let err = Config::load_from_files(&[path.clone()]).unwrap_err();
    match err {
        ConfigError::ParseToml { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validation_reports_missing_files_and_bad_words() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
[stopwords]
language = "elvish"
custom = ["Data Set"]
files = ["missing.txt"]
"#,
    );

    let config = env.load_local("");
    let warnings = config.validate();

    assert_eq!(warnings.len(), 3);
    assert!(warnings.contains(&ConfigWarning::UnknownLanguage {
        language: "elvish".into()
    }));
    assert!(warnings.contains(&ConfigWarning::UnmatchableStopword {
        word: "Data Set".into()
    }));
    assert!(warnings.iter().any(
        |w| matches!(w, ConfigWarning::StopwordFileMissing { path } if path.ends_with("missing.txt"))
    ));
    assert!(config.build_stopwords().is_err());
}

#[test]
fn test_effective_settings_round_trip() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "[tokenize]\nmin_word_length = 4\n[stopwords]\ncustom = \"ozone\"\n",
    );
    let config = env.load_local("");

    let rendered = config.settings_to_toml();
    let reparsed = textmine_config::parse_config_str(&rendered, Path::new("effective")).unwrap();
    assert_eq!(reparsed.tokenize.unwrap().min_word_length, Some(4));
    assert_eq!(
        reparsed.stopwords.unwrap().custom,
        Some(vec!["ozone".to_string()])
    );
}
