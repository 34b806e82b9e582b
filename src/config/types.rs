use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub oauth: OauthConfig,
}

/// Mock authentication service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Simulated network latency in milliseconds (default: 500).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// The one email the mock login endpoint accepts.
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
    /// The matching password for `demo_email`.
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
    /// Token string issued on success.
    #[serde(default = "default_token")]
    pub token: String,
}

/// External OAuth affordance. Rendered as a hyperlink only; nothing is
/// implemented locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OauthConfig {
    /// Endpoint the "Continue with Google" link points at.
    #[serde(default = "default_google_url")]
    pub google_url: String,
}

fn default_delay_ms() -> u64 {
    500
}

fn default_demo_email() -> String {
    "user@example.com".to_string()
}

fn default_demo_password() -> String {
    "password".to_string()
}

fn default_token() -> String {
    "mock-jwt-token".to_string()
}

fn default_google_url() -> String {
    "http://localhost:5000/api/auth/google".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
            token: default_token(),
        }
    }
}

impl Default for OauthConfig {
    fn default() -> Self {
        Self {
            google_url: default_google_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            oauth: OauthConfig::default(),
        }
    }
}
