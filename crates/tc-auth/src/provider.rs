// provider.rs — AuthProvider trait and start-up selection.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tc_storage::KeyValueStore;

use crate::error::AuthError;
use crate::local::LocalAuthProvider;
use crate::session::UserSession;
use crate::stub::StubAuthProvider;

/// Pluggable authentication backend.
///
/// Everything that needs to know who is signed in receives an
/// `Arc<dyn AuthProvider>` rather than consulting shared mutable state.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Result<Option<UserSession>, AuthError>;

    /// Sign in, replacing any existing session.
    async fn sign_in(&self, email: &str, display_name: &str) -> Result<UserSession, AuthError>;

    /// Sign out. Succeeds when nobody is signed in.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Provider display name (for CLI output).
    fn name(&self) -> &str;

    async fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user().await?.is_some())
    }
}

/// Which provider to build at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Always signed in; sign-in and sign-out do nothing.
    #[default]
    Stub,
    /// Session persisted in device-local storage.
    Local,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Stub => write!(f, "stub"),
            AuthMode::Local => write!(f, "local"),
        }
    }
}

/// Build the provider for `mode`. Local sessions are kept in `kv`.
pub fn provider_for(mode: AuthMode, kv: Arc<dyn KeyValueStore>) -> Arc<dyn AuthProvider> {
    tracing::debug!(%mode, "auth provider selected");
    match mode {
        AuthMode::Stub => Arc::new(StubAuthProvider::new()),
        AuthMode::Local => Arc::new(LocalAuthProvider::new(kv)),
    }
}
