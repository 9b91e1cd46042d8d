//! JSON array and JSON Lines loaders.

use std::path::Path;

use serde_json::Value;
use textmine_core::RawDocument;

use crate::{SourceError, SourceOptions};

/// Parses a JSON document holding an array of objects.
///
/// A top-level object is accepted as a single-document corpus.
pub fn parse_json(
    contents: &str,
    path: &Path,
    options: &SourceOptions,
) -> Result<Vec<RawDocument>, SourceError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        line: None,
        source,
    })?;

    Ok(match value {
        Value::Array(rows) => rows.iter().map(|row| to_raw(row, options)).collect(),
        other => vec![to_raw(&other, options)],
    })
}

/// Parses JSON Lines: one JSON value per line, blank lines ignored.
pub fn parse_json_lines(
    contents: &str,
    path: &Path,
    options: &SourceOptions,
) -> Result<Vec<RawDocument>, SourceError> {
    let mut documents = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            line: Some(index + 1),
            source,
        })?;
        documents.push(to_raw(&value, options));
    }
    Ok(documents)
}

/// Maps one JSON value onto a raw document.
///
/// Non-object rows become documents without an identifier, which ingestion then skips.
fn to_raw(value: &Value, options: &SourceOptions) -> RawDocument {
    let Value::Object(object) = value else {
        return RawDocument::default();
    };

    let mut raw = RawDocument {
        id: object.get(&options.id_field).and_then(id_value),
        ..RawDocument::default()
    };
    for (key, value) in object {
        if key == &options.id_field {
            continue;
        }
        match value {
            Value::String(text) => {
                raw.text.insert(key.clone(), text.clone());
            }
            Value::Array(items) => {
                if let Some(tags) = string_items(items) {
                    raw.tags.insert(key.clone(), tags);
                }
            }
            _ => {}
        }
    }
    raw
}

/// Accepts string and numeric identifiers.
fn id_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Collects the string elements of an array, `None` if it holds no strings at all.
fn string_items(items: &[Value]) -> Option<Vec<String>> {
    let strings: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if strings.is_empty() && !items.is_empty() {
        None
    } else {
        Some(strings)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("input.json")
    }

    #[test]
    fn maps_strings_and_string_arrays() {
        let docs = parse_json(
            r#"[{"id": "a", "title": "Ozone", "keyword": ["EARTH SCIENCE", "ATMOSPHERE"], "size": 4, "meta": {"x": 1}}]"#,
            &path(),
            &SourceOptions::default(),
        )
        .unwrap();

        assert_eq!(docs.len(), 1);
        let doc = &docs[0];
        assert_eq!(doc.id.as_deref(), Some("a"));
        assert_eq!(doc.text.get("title").map(String::as_str), Some("Ozone"));
        assert_eq!(
            doc.tags.get("keyword"),
            Some(&vec!["EARTH SCIENCE".to_string(), "ATMOSPHERE".to_string()])
        );
        assert!(!doc.text.contains_key("id"));
        assert!(!doc.text.contains_key("size"));
        assert!(!doc.tags.contains_key("meta"));
    }

    #[test]
    fn numeric_ids_and_custom_id_field() {
        let options = SourceOptions {
            id_field: "identifier".into(),
        };
        let docs = parse_json(
            r#"[{"identifier": 17, "id": "ignored"}, {"identifier": true}]"#,
            &path(),
            &options,
        )
        .unwrap();
        assert_eq!(docs[0].id.as_deref(), Some("17"));
        assert_eq!(docs[0].text.get("id").map(String::as_str), Some("ignored"));
        assert_eq!(docs[1].id, None);
    }

    #[test]
    fn non_object_rows_have_no_id() {
        let docs = parse_json(r#"[1, "x", {"id": "ok"}]"#, &path(), &SourceOptions::default())
            .unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0], RawDocument::default());
        assert_eq!(docs[1], RawDocument::default());
        assert_eq!(docs[2].id.as_deref(), Some("ok"));
    }

    #[test]
    fn empty_array_keeps_empty_tag_field() {
        let docs = parse_json(r#"[{"id": "a", "keyword": []}]"#, &path(), &SourceOptions::default())
            .unwrap();
        assert_eq!(docs[0].tags.get("keyword"), Some(&Vec::new()));
    }

    #[test]
    fn json_lines_skip_blank_lines() {
        let docs = parse_json_lines(
            "{\"id\": \"a\", \"text\": \"one\"}\n\n   \n{\"id\": \"b\", \"text\": \"two\"}\n",
            &path(),
            &SourceOptions::default(),
        )
        .unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn json_lines_report_line_numbers() {
        let err = parse_json_lines(
            "{\"id\": \"a\"}\n\n{broken\n",
            &path(),
            &SourceOptions::default(),
        )
        .unwrap_err();
        match err {
            SourceError::Json { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
        assert!(
            parse_json_lines("{broken", &path(), &SourceOptions::default())
                .unwrap_err()
                .to_string()
                .contains("line 1")
        );
    }

    #[test]
    fn invalid_json_array() {
        let err = parse_json("[{", &path(), &SourceOptions::default()).unwrap_err();
        assert!(matches!(err, SourceError::Json { line: None, .. }));
    }
}
