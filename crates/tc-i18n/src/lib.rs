//! # tc-i18n
//!
//! Checks that every locale file defines the same translation keys as the
//! base locale.
//!
//! Locale files are JSON objects named `<locale>.json`. Nested objects are
//! flattened to dotted keys, so `{"home": {"title": "..."}}` defines
//! `home.title`.

pub mod catalog;
pub mod check;
pub mod error;

pub use catalog::{flatten_keys, LocaleCatalog};
pub use check::{check, CompletenessReport, LocaleDiff};
pub use error::I18nError;
