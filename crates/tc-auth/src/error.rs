// error.rs — Error types for authentication providers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Reading or writing the stored session failed.
    #[error("session storage error: {0}")]
    Storage(#[from] tc_storage::StorageError),

    /// The sign-in email is not usable.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),
}
