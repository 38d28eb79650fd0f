//! # tc-storage
//!
//! Device-local storage for Therapy Companion.
//!
//! Everything the app persists lives in a flat key-value namespace of UTF-8
//! JSON values. Each entity type owns exactly one slot in that namespace.
//!
//! ## Key components
//!
//! - [`KeyValueStore`] — async get/set/remove over string keys
//! - [`FileKvStore`] — one JSON file per key, atomic overwrite via rename
//! - [`MemoryKvStore`] — in-process map, for tests and ephemeral runs
//! - [`Record`] / [`RecordStore`] — a typed slot for one serde entity type

pub mod error;
pub mod kv;
pub mod record;

pub use error::StorageError;
pub use kv::{validate_key, FileKvStore, KeyValueStore, MemoryKvStore};
pub use record::{Record, RecordStore};
