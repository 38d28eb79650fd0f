// local.rs — LocalAuthProvider: a device-local session record.
//
// Sign-in writes a `UserSession` into its own storage slot; sign-out removes
// it. There is no remote verification: this provider only remembers who said
// they are using the app on this device.

use std::sync::Arc;

use async_trait::async_trait;
use tc_storage::{KeyValueStore, RecordStore};

use crate::error::AuthError;
use crate::provider::AuthProvider;
use crate::session::UserSession;

pub struct LocalAuthProvider {
    sessions: RecordStore<UserSession>,
}

impl LocalAuthProvider {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            sessions: RecordStore::new(kv),
        }
    }
}

/// Minimal shape check: something on both sides of a single `@`.
fn validate_email(email: &str) -> Result<&str, AuthError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(AuthError::InvalidEmail(email.to_string())),
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn current_user(&self) -> Result<Option<UserSession>, AuthError> {
        Ok(self.sessions.load().await?)
    }

    async fn sign_in(&self, email: &str, display_name: &str) -> Result<UserSession, AuthError> {
        let email = validate_email(email)?;
        let display_name = match display_name.trim() {
            "" => email.split('@').next().unwrap_or(email),
            name => name,
        };
        let session = UserSession::new(email, display_name);
        self.sessions.store(&session).await?;
        tracing::info!(user_id = %session.user_id, "signed in");
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.sessions.clear().await? {
            tracing::info!("signed out");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_storage::{FileKvStore, MemoryKvStore};
    use tempfile::tempdir;

    fn provider() -> LocalAuthProvider {
        LocalAuthProvider::new(Arc::new(MemoryKvStore::new()))
    }

    #[tokio::test]
    async fn signed_out_by_default() {
        let auth = provider();
        assert!(auth.current_user().await.unwrap().is_none());
        assert!(!auth.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn sign_in_then_out() {
        let auth = provider();
        let session = auth.sign_in("sam@example.com", "Sam").await.unwrap();
        assert_eq!(auth.current_user().await.unwrap(), Some(session));

        auth.sign_out().await.unwrap();
        assert!(!auth.is_authenticated().await.unwrap());
        // Signing out twice is fine.
        auth.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn display_name_defaults_to_email_local_part() {
        let auth = provider();
        let session = auth.sign_in("  river@example.org ", "").await.unwrap();
        assert_eq!(session.email, "river@example.org");
        assert_eq!(session.display_name, "river");
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let auth = provider();
        for bad in ["", "no-at-sign", "@example.com", "user@", "a@b@c"] {
            assert!(
                matches!(auth.sign_in(bad, "x").await, Err(AuthError::InvalidEmail(_))),
                "accepted {bad:?}"
            );
        }
        assert!(!auth.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn sign_in_replaces_previous_session() {
        let auth = provider();
        let first = auth.sign_in("a@example.com", "A").await.unwrap();
        let second = auth.sign_in("b@example.com", "B").await.unwrap();
        assert_ne!(first.user_id, second.user_id);
        assert_eq!(auth.current_user().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn session_survives_reopen() {
        let dir = tempdir().unwrap();

        let session = {
            let auth = LocalAuthProvider::new(Arc::new(FileKvStore::new(dir.path()).unwrap()));
            auth.sign_in("kai@example.com", "Kai").await.unwrap()
        };

        let auth = LocalAuthProvider::new(Arc::new(FileKvStore::new(dir.path()).unwrap()));
        assert_eq!(auth.current_user().await.unwrap(), Some(session));
    }
}
