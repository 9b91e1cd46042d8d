//! Path resolution for paths named in config files.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths, and formats paths for
//! display.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a path from a config file to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/noise.txt`) - expanded to home directory
/// - Relative paths (`./noise.txt`, `../shared/words.txt`) - resolved relative to
///   `config_dir`
/// - Absolute paths - returned as-is
///
/// The path does not need to exist; missing files are reported by validation.
pub fn resolve_config_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(normalize(&config_dir.join(expanded)))
    }
}

/// Formats a path for display.
///
/// Paths below `base` are shown relative to it, paths below the home directory are shown
/// with a `~/` prefix, and anything else is shown as-is.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && let Some(rel) = pathdiff::diff_paths(path, base)
        && !rel.starts_with("..")
        && rel.is_relative()
    {
        if rel.as_os_str().is_empty() {
            return String::from(".");
        }
        return rel.display().to_string();
    }

    if let Ok(home) = home_dir()
        && let Ok(rel) = path.strip_prefix(&home)
    {
        return format!("~/{}", rel.display());
    }

    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Removes `.` components and folds `..` into their parent without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_config_path("./noise.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/noise.txt"));
    }

    #[test]
    fn test_resolve_relative_path_without_dot() {
        let resolved = resolve_config_path("lists/noise.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/lists/noise.txt"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved =
            resolve_config_path("../shared/words.txt", Path::new("/work/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/work/shared/words.txt"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_config_path("/etc/words.txt", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/words.txt"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let resolved = resolve_config_path("~/words.txt", Path::new("/other")).unwrap();
        assert_eq!(resolved, home.join("words.txt"));
    }

    #[test]
    fn test_expand_tilde_alone() {
        let result = expand_tilde("~").unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(result, home);
    }

    #[test]
    fn test_expand_tilde_not_at_start() {
        let result = expand_tilde("foo/~/bar").unwrap();
        assert_eq!(result, PathBuf::from("foo/~/bar"));
    }

    #[test]
    fn test_format_relative_to_base() {
        let shown = format_path_for_display(
            Path::new("/work/project/.textmine.toml"),
            Some(Path::new("/work/project")),
        );
        assert_eq!(shown, ".textmine.toml");
    }

    #[test]
    fn test_format_base_itself() {
        let shown = format_path_for_display(Path::new("/work"), Some(Path::new("/work")));
        assert_eq!(shown, ".");
    }

    #[test]
    fn test_format_under_home() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let shown = format_path_for_display(&home.join(".textmine.toml"), None);
        assert_eq!(shown, "~/.textmine.toml");
    }

    #[test]
    fn test_format_outside_base() {
        let shown = format_path_for_display(
            Path::new("/elsewhere/words.txt"),
            Some(Path::new("/work/project")),
        );
        assert!(shown.ends_with("words.txt"));
        assert!(!shown.starts_with(".."));
    }
}
