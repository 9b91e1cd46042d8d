//! Locating `.textmine.toml` files.
//!
//! A corpus usually sits inside a project tree, so the search starts in the working
//! directory and climbs its ancestors. A file with `root = true` ends the climb and also
//! shuts out `~/.textmine.toml`; otherwise the home file is consulted last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".textmine.toml";

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// The working directory or one of its ancestors.
    Project,
    /// `~/.textmine.toml`.
    Global,
}

/// One configuration file taking part in the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Location of the file.
    pub path: PathBuf,
    /// How the file was reached.
    pub scope: ConfigScope,
    /// Whether the file declares `root = true`.
    pub is_root: bool,
}

/// Finds the configuration files that apply to `cwd`, most specific first.
pub fn find_config_files(cwd: &Path) -> Vec<ConfigFile> {
    let home_config = global_config_path();
    let scope_of = |path: &Path| {
        if home_config.as_deref() == Some(path) {
            ConfigScope::Global
        } else {
            ConfigScope::Project
        }
    };

    let mut found: Vec<ConfigFile> = Vec::new();
    for path in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !path.is_file() {
            continue;
        }
        let is_root = is_root_config(&path);
        found.push(ConfigFile {
            scope: scope_of(&path),
            path,
            is_root,
        });
        if is_root {
            return found;
        }
    }

    if let Some(path) = home_config
        && path.is_file()
        && found.iter().all(|file| file.path != path)
    {
        found.push(ConfigFile {
            is_root: is_root_config(&path),
            path,
            scope: ConfigScope::Global,
        });
    }
    found
}

/// Returns the paths of [`find_config_files`], in merge precedence order.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    find_config_files(cwd)
        .into_iter()
        .map(|file| file.path)
        .collect()
}

/// Returns `~/.textmine.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
