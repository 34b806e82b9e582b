//! Authentication service boundary.
//!
//! The UI talks to an [`AuthService`] and never assumes anything about
//! the transport behind it. The only implementation shipped here is
//! [`MockAuthService`], which simulates network latency with a timer;
//! the contract it stands in for is a remote endpoint that returns a
//! bearer token or a structured rejection.

mod error;
mod mock;
pub mod worker;

pub use error::AuthError;
pub use mock::MockAuthService;
pub use worker::AuthCommand;

use std::future::Future;

/// Opaque bearer token issued on successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Credential-based authentication endpoint.
///
/// Futures carry a `Send` bound so implementations can be driven from a
/// spawned worker task.
pub trait AuthService: Send + Sync + 'static {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthToken, AuthError>> + Send;

    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthToken, AuthError>> + Send;
}
