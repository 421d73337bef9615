//! Authentication configuration types and utilities

use serde::{Deserialize, Serialize};

use crate::utils::CryptoUtils;
use crate::{AuthError, AuthResult};

/// Environment variable holding the token signing secret
pub const ENV_SECRET: &str = "DOORMAN_SECRET";

/// Main authentication configuration
///
/// The configuration is a plain value validated against an explicit
/// contract at startup; `Auth::builder` refuses to build from an
/// invalid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret handed to the token layer for signing. Must be non-empty.
    pub secret: String,

    /// Session behaviour
    #[serde(default)]
    pub session: SessionOptions,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Session strategy; only stateless token sessions are supported
    #[serde(default)]
    pub strategy: SessionStrategy,

    /// Token lifetime in seconds
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
}

/// Session strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStrategy {
    /// Stateless client-held token; no server-side session store
    #[default]
    Token,
}

// Default value functions
fn default_max_age() -> u64 {
    30 * 24 * 60 * 60
} // 30 days

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            strategy: SessionStrategy::default(),
            max_age_secs: default_max_age(),
        }
    }
}

impl SessionOptions {
    /// Create session options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token lifetime in seconds
    pub fn max_age_secs(mut self, secs: u64) -> Self {
        self.max_age_secs = secs;
        self
    }
}

impl AuthConfig {
    /// Create a configuration with the given secret and default session options
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            session: SessionOptions::default(),
        }
    }

    /// Read the configuration from the environment
    ///
    /// Requires `DOORMAN_SECRET` to be set to a non-empty string.
    pub fn from_env() -> AuthResult<Self> {
        let secret = std::env::var(ENV_SECRET)
            .map_err(|_| AuthError::config_error(format!("{} must be set", ENV_SECRET)))?;
        let config = Self::new(secret);
        config.validate()?;
        Ok(config)
    }

    /// Replace the session options
    pub fn session(mut self, session: SessionOptions) -> Self {
        self.session = session;
        self
    }

    /// Generate a random secret suitable for `AuthConfig`
    pub fn generate_secret() -> String {
        CryptoUtils::generate_secret(None)
    }

    /// Validate the configuration
    pub fn validate(&self) -> AuthResult<()> {
        if self.secret.trim().is_empty() {
            return Err(AuthError::config_error(format!(
                "{} must be a non-empty string",
                ENV_SECRET
            )));
        }

        if self.session.max_age_secs == 0 {
            return Err(AuthError::config_error(
                "session max_age_secs must be non-zero",
            ));
        }

        Ok(())
    }
}
