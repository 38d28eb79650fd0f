// summary.rs — GoalsSummary: the single persisted goals record.
//
// Stored as one JSON object under a fixed key:
//   { "focusAreas": [..], "desiredChanges": [..],
//     "createdDate": "<RFC 3339>", "lastUpdated": "<RFC 3339>" }

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tc_storage::Record;

/// Storage slot holding the goals record.
pub const GOALS_KEY: &str = "therapy_goals";

/// The user's stated therapy goals.
///
/// Both lists keep the order the user entered them in and may contain
/// duplicates. `created_date` is set on the first save and never changes;
/// `last_updated` moves on every save and is never earlier than
/// `created_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSummary {
    pub focus_areas: Vec<String>,
    pub desired_changes: Vec<String>,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Record for GoalsSummary {
    const KEY: &'static str = GOALS_KEY;
}

impl GoalsSummary {
    /// True when at least one focus area has been given.
    pub fn has_focus_areas(&self) -> bool {
        !self.focus_areas.is_empty()
    }

    /// Render the prompt-context sentence for this record.
    ///
    /// Returns an empty string when there are no focus areas. Downstream
    /// prompt builders depend on this exact wording.
    pub fn context_fragment(&self) -> String {
        if !self.has_focus_areas() {
            return String::new();
        }
        format!(
            "The user has defined their therapy focus areas as: {}. They want to work toward: {}",
            self.focus_areas.join(", "),
            self.desired_changes.join("; "),
        )
    }
}
