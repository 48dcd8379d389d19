//! Book configuration injection
//!
//! Jupyter Book renders a "repository" button from `repository.url` in
//! `_config.yml`. The pipeline fills it in from the Actions environment so
//! forks publish links to themselves.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::BookError;

/// Set `repository.url` in the YAML file at `path`, keeping existing key order.
pub fn inject_repository_url(path: &Path, repo_url: &str) -> Result<(), BookError> {
    if !path.exists() {
        return Err(BookError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| BookError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut doc: Value = serde_yaml::from_str(&content).map_err(|source| BookError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    set_repository_url(&mut doc, repo_url)?;

    let rendered = serde_yaml::to_string(&doc).map_err(BookError::Serialize)?;
    fs::write(path, rendered).map_err(|source| BookError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), url = repo_url, "Updated book config");
    Ok(())
}

fn set_repository_url(doc: &mut Value, repo_url: &str) -> Result<(), BookError> {
    // An empty file parses as null
    if doc.is_null() {
        *doc = Value::Mapping(Mapping::new());
    }
    let root = doc
        .as_mapping_mut()
        .ok_or(BookError::NotAMapping { key: "root" })?;

    let needs_table = root.get("repository").is_none_or(Value::is_null);
    if needs_table {
        root.insert(
            Value::String("repository".to_string()),
            Value::Mapping(Mapping::new()),
        );
    }
    let repository = root
        .get_mut("repository")
        .and_then(Value::as_mapping_mut)
        .ok_or(BookError::NotAMapping { key: "repository" })?;

    repository.insert(
        Value::String("url".to_string()),
        Value::String(repo_url.to_string()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK_CONFIG: &str = "\
title: ML verification
author: DMI
execute:
  execute_notebooks: force
repository:
  url: https://github.com/placeholder/placeholder
  branch: main
sphinx:
  config:
    html_show_copyright: false
";

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn replaces_existing_url_in_place() {
        let (_dir, path) = write_config(BOOK_CONFIG);
        inject_repository_url(&path, "https://github.com/dmidk/mlverif").unwrap();

        let out = fs::read_to_string(&path).unwrap();
        let doc: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(
            doc["repository"]["url"].as_str(),
            Some("https://github.com/dmidk/mlverif")
        );
        assert_eq!(doc["repository"]["branch"].as_str(), Some("main"));

        let keys: Vec<&str> = doc
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, ["title", "author", "execute", "repository", "sphinx"]);

        let repo_keys: Vec<&str> = doc["repository"]
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(repo_keys, ["url", "branch"]);
    }

    #[test]
    fn adds_repository_section_when_missing() {
        let (_dir, path) = write_config("title: Book\n");
        inject_repository_url(&path, "https://github.com/a/b").unwrap();

        let doc: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["title"].as_str(), Some("Book"));
        assert_eq!(doc["repository"]["url"].as_str(), Some("https://github.com/a/b"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = inject_repository_url(&dir.path().join("_config.yml"), "x").unwrap_err();
        assert!(matches!(err, BookError::NotFound { .. }));
    }

    #[test]
    fn non_mapping_repository_is_rejected() {
        let (_dir, path) = write_config("repository: https://github.com/a/b\n");
        let err = inject_repository_url(&path, "https://github.com/c/d").unwrap_err();
        assert!(matches!(err, BookError::NotAMapping { key: "repository" }));
        // Left untouched on failure
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "repository: https://github.com/a/b\n"
        );
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        let (_dir, path) = write_config("- just\n- a list\n");
        let err = inject_repository_url(&path, "x").unwrap_err();
        assert!(matches!(err, BookError::NotAMapping { key: "root" }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let (_dir, path) = write_config("title: [unclosed\n");
        let err = inject_repository_url(&path, "x").unwrap_err();
        assert!(matches!(err, BookError::Parse { .. }));
    }
}
