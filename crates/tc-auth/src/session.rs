// session.rs — UserSession: who is signed in on this device.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tc_storage::Record;
use uuid::Uuid;

/// Storage slot holding the signed-in session.
pub const SESSION_KEY: &str = "auth_session";

/// A signed-in user on this device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Record for UserSession {
    const KEY: &'static str = SESSION_KEY;
}

impl UserSession {
    /// Start a new session with a fresh user ID.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            email: email.into(),
            display_name: display_name.into(),
            signed_in_at: Utc::now(),
        }
    }
}
