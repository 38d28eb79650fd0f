//! # tc-auth
//!
//! Authentication for Therapy Companion, behind an injectable trait.
//!
//! The provider is chosen once at process start ([`provider_for`]) and passed
//! to whatever needs it. There is no global "signed in" flag.
//!
//! - [`StubAuthProvider`] — always signed in as a fixed development user
//! - [`LocalAuthProvider`] — keeps a [`UserSession`] in device-local storage

pub mod error;
pub mod local;
pub mod provider;
pub mod session;
pub mod stub;

pub use error::AuthError;
pub use local::LocalAuthProvider;
pub use provider::{provider_for, AuthMode, AuthProvider};
pub use session::{UserSession, SESSION_KEY};
pub use stub::StubAuthProvider;
