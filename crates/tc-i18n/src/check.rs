// check.rs — Comparing each locale's keys against the base locale.

use std::fmt;

use serde::Serialize;

use crate::catalog::LocaleCatalog;
use crate::error::I18nError;

/// Key differences between one locale and the base locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDiff {
    pub locale: String,
    /// Keys in the base locale that this locale lacks (sorted).
    pub missing: Vec<String>,
    /// Keys in this locale that the base locale does not define (sorted).
    pub extra: Vec<String>,
}

impl LocaleDiff {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of checking every locale against the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub base_locale: String,
    pub base_key_count: usize,
    /// One entry per non-base locale, sorted by locale code.
    pub locales: Vec<LocaleDiff>,
}

impl CompletenessReport {
    /// True when no locale is missing a base key. Extra keys are allowed.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleDiff::is_complete)
    }

    pub fn total_missing(&self) -> usize {
        self.locales.iter().map(|l| l.missing.len()).sum()
    }
}

/// Compare every locale in `catalog` against `base_locale`.
pub fn check(catalog: &LocaleCatalog, base_locale: &str) -> Result<CompletenessReport, I18nError> {
    let base = catalog
        .keys(base_locale)
        .ok_or_else(|| I18nError::BaseLocaleMissing(base_locale.to_string()))?;

    let locales = catalog
        .locales()
        .filter(|locale| *locale != base_locale)
        .filter_map(|locale| {
            let keys = catalog.keys(locale)?;
            Some(LocaleDiff {
                locale: locale.to_string(),
                missing: base.difference(keys).cloned().collect(),
                extra: keys.difference(base).cloned().collect(),
            })
        })
        .collect();

    Ok(CompletenessReport {
        base_locale: base_locale.to_string(),
        base_key_count: base.len(),
        locales,
    })
}

impl fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Base locale: {} ({} keys)",
            self.base_locale, self.base_key_count
        )?;
        if self.locales.is_empty() {
            return writeln!(f, "No other locales to check.");
        }
        for diff in &self.locales {
            let status = if diff.is_complete() { "ok" } else { "INCOMPLETE" };
            writeln!(
                f,
                "{:<8} {:<10} missing: {}, extra: {}",
                diff.locale,
                status,
                diff.missing.len(),
                diff.extra.len()
            )?;
            for key in &diff.missing {
                writeln!(f, "    - {}", key)?;
            }
            for key in &diff.extra {
                writeln!(f, "    + {}", key)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::flatten_keys;
    use serde_json::json;

    fn catalog() -> LocaleCatalog {
        let mut catalog = LocaleCatalog::new();
        catalog.insert(
            "en",
            flatten_keys(&json!({
                "greeting": "Hello",
                "goals": { "title": "Goals", "save": "Save" },
                "settings": "Settings"
            })),
        );
        catalog.insert(
            "es",
            flatten_keys(&json!({
                "greeting": "Hola",
                "goals": { "title": "Metas", "save": "Guardar" },
                "settings": "Ajustes"
            })),
        );
        catalog.insert(
            "fr",
            flatten_keys(&json!({
                "greeting": "Bonjour",
                "goals": { "title": "Objectifs" },
                "legacy": "Ancien"
            })),
        );
        catalog
    }

    #[test]
    fn reports_missing_and_extra_keys() {
        let report = check(&catalog(), "en").unwrap();

        assert_eq!(report.base_key_count, 4);
        assert_eq!(report.locales.len(), 2);

        let es = &report.locales[0];
        assert_eq!(es.locale, "es");
        assert!(es.is_complete());
        assert!(es.extra.is_empty());

        let fr = &report.locales[1];
        assert_eq!(fr.locale, "fr");
        assert_eq!(fr.missing, vec!["goals.save", "settings"]);
        assert_eq!(fr.extra, vec!["legacy"]);

        assert!(!report.is_complete());
        assert_eq!(report.total_missing(), 2);
    }

    #[test]
    fn extra_keys_alone_do_not_fail() {
        let mut catalog = LocaleCatalog::new();
        catalog.insert("en", flatten_keys(&json!({ "a": "A" })));
        catalog.insert("de", flatten_keys(&json!({ "a": "A", "b": "B" })));

        let report = check(&catalog, "en").unwrap();
        assert!(report.is_complete());
        assert_eq!(report.locales[0].extra, vec!["b"]);
    }

    #[test]
    fn missing_base_locale_is_an_error() {
        assert!(matches!(
            check(&catalog(), "ja"),
            Err(I18nError::BaseLocaleMissing(ref l)) if l == "ja"
        ));
    }

    #[test]
    fn display_lists_keys() {
        let text = check(&catalog(), "en").unwrap().to_string();
        assert!(text.starts_with("Base locale: en (4 keys)"));
        assert!(text.contains("INCOMPLETE"));
        assert!(text.contains("    - goals.save"));
        assert!(text.contains("    + legacy"));
    }

    #[test]
    fn single_locale_has_nothing_to_compare() {
        let mut catalog = LocaleCatalog::new();
        catalog.insert("en", flatten_keys(&json!({ "a": "A" })));

        let report = check(&catalog, "en").unwrap();
        assert!(report.locales.is_empty());
        assert!(report.is_complete());
        assert!(report.to_string().contains("No other locales"));
    }
}
