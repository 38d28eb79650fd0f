// catalog.rs — Loading locale files and flattening them to key sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::I18nError;

/// Translation keys per locale, keyed by locale code.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    locales: BTreeMap<String, BTreeSet<String>>,
}

impl LocaleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in `dir`. The file stem is the locale code.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, I18nError> {
        let dir = dir.as_ref();
        let io_err = |source| I18nError::IoError {
            path: dir.to_path_buf(),
            source,
        };

        let mut catalog = Self::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() || !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let text = fs::read_to_string(&path).map_err(|source| I18nError::IoError {
                path: path.clone(),
                source,
            })?;
            let value: Value = serde_json::from_str(&text).map_err(|source| I18nError::Parse {
                path: path.clone(),
                source,
            })?;
            if !value.is_object() {
                return Err(I18nError::NotAnObject(path));
            }

            let keys = flatten_keys(&value);
            tracing::debug!(locale, keys = keys.len(), "locale loaded");
            catalog.insert(locale, keys);
        }
        Ok(catalog)
    }

    /// Add or replace a locale's key set.
    pub fn insert(&mut self, locale: impl Into<String>, keys: BTreeSet<String>) {
        self.locales.insert(locale.into(), keys);
    }

    pub fn keys(&self, locale: &str) -> Option<&BTreeSet<String>> {
        self.locales.get(locale)
    }

    /// Locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Flatten a JSON value to dotted leaf keys.
///
/// Objects recurse; every other value (string, array, number, ...) is a
/// leaf. An empty object contributes no keys.
pub fn flatten_keys(value: &Value) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect(value, &mut String::new(), &mut keys);
    keys
}

fn collect(value: &Value, prefix: &mut String, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect(child, prefix, out);
                prefix.truncate(len);
            }
        }
        _ if !prefix.is_empty() => {
            out.insert(prefix.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn flattens_nested_objects() {
        let keys = flatten_keys(&json!({
            "welcome": "Welcome",
            "goals": {
                "title": "Your goals",
                "empty": { "heading": "Nothing yet", "cta": "Add one" }
            },
            "tips": ["a", "b"],
            "unused": {}
        }));
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "goals.empty.cta",
                "goals.empty.heading",
                "goals.title",
                "tips",
                "welcome"
            ]
        );
    }

    #[test]
    fn load_dir_reads_only_json_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "A", "b": {"c": "C"}}"#).unwrap();
        fs::write(dir.path().join("es.json"), r#"{"a": "A"}"#).unwrap();
        fs::write(dir.path().join("README.md"), "not a locale").unwrap();
        fs::create_dir(dir.path().join("drafts.json")).unwrap();

        let catalog = LocaleCatalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["en", "es"]);
        assert_eq!(catalog.keys("en").unwrap().len(), 2);
        assert!(catalog.keys("en").unwrap().contains("b.c"));
    }

    #[test]
    fn load_dir_reports_bad_json_with_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), "{ oops").unwrap();

        match LocaleCatalog::load_dir(dir.path()) {
            Err(I18nError::Parse { path, .. }) => assert!(path.ends_with("fr.json")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_dir_rejects_non_object_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("de.json"), r#"["a", "b"]"#).unwrap();
        assert!(matches!(
            LocaleCatalog::load_dir(dir.path()),
            Err(I18nError::NotAnObject(_))
        ));
    }

    #[test]
    fn load_dir_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            LocaleCatalog::load_dir(dir.path().join("nope")),
            Err(I18nError::IoError { .. })
        ));
    }
}
