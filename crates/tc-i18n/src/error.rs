// error.rs — Error types for the translation checker.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A locale file is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A locale file's top level is not a JSON object.
    #[error("{0} does not contain a JSON object")]
    NotAnObject(PathBuf),

    /// The base locale has no file in the catalog.
    #[error("base locale '{0}' not found")]
    BaseLocaleMissing(String),
}
