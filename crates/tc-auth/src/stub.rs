//! Stub provider — always authenticated, no-op sign-in/sign-out.
//!
//! Used during development and whenever no real identity is needed. It is
//! selected explicitly at start-up like any other provider.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::AuthError;
use crate::provider::AuthProvider;
use crate::session::UserSession;

/// Fixed development identity.
pub struct StubAuthProvider {
    user: UserSession,
}

impl StubAuthProvider {
    pub fn new() -> Self {
        Self {
            user: UserSession {
                user_id: Uuid::nil(),
                email: "dev@localhost".to_string(),
                display_name: "Developer".to_string(),
                signed_in_at: Utc::now(),
            },
        }
    }
}

impl Default for StubAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn current_user(&self) -> Result<Option<UserSession>, AuthError> {
        Ok(Some(self.user.clone()))
    }

    async fn sign_in(&self, _email: &str, _display_name: &str) -> Result<UserSession, AuthError> {
        tracing::debug!("StubAuthProvider: sign_in() - no-op");
        Ok(self.user.clone())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        tracing::debug!("StubAuthProvider: sign_out() - no-op");
        Ok(())
    }

    fn name(&self) -> &str {
        "stub"
    }
}
