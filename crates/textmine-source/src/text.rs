//! Plain-text directory loader.

use std::{
    ffi::OsStr,
    fs,
    path::{Component, Path},
};

use log::{debug, warn};
use textmine_core::RawDocument;
use walkdir::WalkDir;

use crate::SourceError;

/// Text field holding the content of each plain-text file.
pub const TEXT_FIELD: &str = "text";

/// Loads every `*.txt` file below `dir` as one document.
///
/// Files are visited in path order. The identifier is the path relative to `dir` without
/// its extension, with `/` separators; the content goes into the [`TEXT_FIELD`] field.
/// Hidden files and directories are skipped, as are files that are not valid UTF-8.
pub fn load_text_dir(dir: &Path) -> Result<Vec<RawDocument>, SourceError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            SourceError::Read {
                path,
                source: err.into(),
            }
        })?;

        if !entry.file_type().is_file() || !is_text_file(entry.path()) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(|source| SourceError::Read {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let Ok(contents) = String::from_utf8(bytes) else {
            warn!("skipping {}: not valid UTF-8", entry.path().display());
            continue;
        };

        let id = entry
            .path()
            .strip_prefix(dir)
            .ok()
            .map(document_id)
            .filter(|id| !id.is_empty());
        documents.push(RawDocument {
            id,
            ..RawDocument::default()
        }
        .with_text(TEXT_FIELD, contents));
    }

    debug!("loaded {} text files from {}", documents.len(), dir.display());
    Ok(documents)
}

/// Builds an identifier from a relative path: extension dropped, `/` separated.
fn document_id(rel: &Path) -> String {
    let stem = rel.with_extension("");
    stem.components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// True for `.txt` files, ignoring case.
fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
