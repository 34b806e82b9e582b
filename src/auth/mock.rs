use std::time::Duration;

use crate::auth::{AuthError, AuthService, AuthToken};
use crate::config::Config;

/// In-memory stand-in for a remote authentication endpoint.
///
/// Every call sleeps for the configured delay to model network latency,
/// then resolves synchronously: login accepts exactly one demo credential
/// pair, register accepts any non-empty triple.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    delay: Duration,
    demo_email: String,
    demo_password: String,
    token: String,
}

impl MockAuthService {
    pub fn new(
        delay: Duration,
        demo_email: impl Into<String>,
        demo_password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            delay,
            demo_email: demo_email.into(),
            demo_password: demo_password.into(),
            token: token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let service = &config.service;
        Self::new(
            Duration::from_millis(service.delay_ms),
            service.demo_email.clone(),
            service.demo_password.clone(),
            service.token.clone(),
        )
    }

    /// Variant with no artificial latency, for tests.
    pub fn instant(demo_email: &str, demo_password: &str, token: &str) -> Self {
        Self::new(Duration::ZERO, demo_email, demo_password, token)
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AuthService for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<AuthToken, AuthError> {
        self.simulate_latency().await;

        if email == self.demo_email && password == self.demo_password {
            tracing::info!(email, "mock login accepted");
            return Ok(AuthToken::new(self.token.clone()));
        }

        tracing::info!(email, "mock login rejected");
        Err(AuthError::InvalidCredentials)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, AuthError> {
        self.simulate_latency().await;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            tracing::info!(email, "mock registration rejected");
            return Err(AuthError::MissingFields);
        }

        tracing::info!(email, "mock registration accepted");
        Ok(AuthToken::new(self.token.clone()))
    }
}
