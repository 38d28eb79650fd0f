//! # tc-goals
//!
//! Persistence for the user's therapy goals.
//!
//! The user describes what they want to work on as two short lists: focus
//! areas ("managing anxiety") and desired changes ("I'd feel comfortable in
//! social situations"). Exactly one [`GoalsSummary`] is kept, in a single
//! storage slot with no history. [`GoalsStore::context_fragment`] renders it
//! into a sentence that prompt builders splice into an AI system prompt.
//!
//! ## Key components
//!
//! - [`GoalsSummary`] — the persisted record
//! - [`GoalsStore`] — save/load/update/clear plus context rendering
//! - [`Clock`] — time source, swappable in tests

pub mod clock;
pub mod store;
pub mod summary;

pub use clock::{Clock, SystemClock};
pub use store::GoalsStore;
pub use summary::{GoalsSummary, GOALS_KEY};
pub use tc_storage::StorageError;
