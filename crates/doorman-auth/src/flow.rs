//! Sign-in, refresh, and session retrieval
//!
//! Ties the configuration, providers, and callbacks together into the
//! stateless token pipeline: sign-in issues a token through the `jwt`
//! callback, refresh re-runs it without a user, and every session read
//! projects the token through the `session` callback. No state is shared
//! across invocations; each call operates on its own parameters.

use std::sync::Arc;

use tracing::{debug, info};

use crate::callbacks::IdentityCallbacks;
use crate::config::AuthConfig;
use crate::session::Session;
use crate::token::SessionToken;
use crate::traits::{AuthCallbacks, Credentials, CredentialsProvider};
use crate::{AuthError, AuthResult};

/// Authentication entry point holding a validated configuration,
/// registered providers, and the transformation callbacks
pub struct Auth {
    config: AuthConfig,
    providers: Vec<Arc<dyn CredentialsProvider>>,
    callbacks: Arc<dyn AuthCallbacks>,
}

impl Auth {
    /// Create a builder
    pub fn builder() -> AuthBuilder {
        AuthBuilder::new()
    }

    /// The configuration this instance was built with
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Registered credential providers
    pub fn providers(&self) -> &[Arc<dyn CredentialsProvider>] {
        &self.providers
    }

    fn provider(&self, provider_id: &str) -> AuthResult<&Arc<dyn CredentialsProvider>> {
        self.providers
            .iter()
            .find(|p| p.id() == provider_id)
            .ok_or_else(|| AuthError::ProviderNotFound {
                provider: provider_id.to_string(),
            })
    }

    /// Sign in against the named provider and issue a session token
    ///
    /// A provider "no match" surfaces as `InvalidCredentials`; no token is
    /// issued in that case.
    pub async fn sign_in(
        &self,
        provider_id: &str,
        credentials: &Credentials,
    ) -> AuthResult<SessionToken> {
        let provider = self.provider(provider_id)?;

        let Some(user) = provider.authorize(credentials).await? else {
            debug!(provider = provider_id, "sign-in rejected: no matching user");
            return Err(AuthError::InvalidCredentials);
        };

        let token = SessionToken::issue(self.config.session.max_age_secs);
        let token = self.callbacks.jwt(token, Some(&user)).await?;
        info!(
            provider = provider_id,
            user = %user.username,
            admin = user.admin,
            "sign-in succeeded"
        );
        Ok(token)
    }

    /// Extend a token's lifetime and re-run the `jwt` callback without a user
    ///
    /// Enrichment is first-write-wins, so the identity claims survive
    /// every refresh unchanged.
    pub async fn refresh(&self, mut token: SessionToken) -> AuthResult<SessionToken> {
        if token.is_expired() {
            return Err(AuthError::token_error("token expired"));
        }
        token.extend(self.config.session.max_age_secs);
        debug!(jti = %token.jti, "token refreshed");
        self.callbacks.jwt(token, None).await
    }

    /// Project the token into a session
    pub async fn session(&self, token: &SessionToken) -> AuthResult<Session> {
        if token.is_expired() {
            return Err(AuthError::session_error("session expired"));
        }
        let base = Session::for_token(token);
        self.callbacks.session(base, token).await
    }

    /// Helper entry point for request handlers
    ///
    /// Forwards to session retrieval with this instance's configuration
    /// attached; absent or invalid tokens yield `None` rather than an error.
    pub async fn current_session(&self, token: Option<&SessionToken>) -> Option<Session> {
        let token = token?;
        match self.session(token).await {
            Ok(session) => Some(session),
            Err(err) => {
                debug!(error = %err, "session retrieval failed");
                None
            }
        }
    }
}

/// Builder for `Auth`
pub struct AuthBuilder {
    config: Option<AuthConfig>,
    providers: Vec<Arc<dyn CredentialsProvider>>,
    callbacks: Option<Arc<dyn AuthCallbacks>>,
}

impl AuthBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: None,
            providers: Vec::new(),
            callbacks: None,
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: AuthConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Register a credential provider
    pub fn provider(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Replace the default `IdentityCallbacks`
    pub fn callbacks(mut self, callbacks: impl AuthCallbacks + 'static) -> Self {
        self.callbacks = Some(Arc::new(callbacks));
        self
    }

    /// Validate the configuration and build the entry point
    pub fn build(self) -> AuthResult<Auth> {
        let config = self
            .config
            .ok_or_else(|| AuthError::config_error("configuration is required"))?;
        config.validate()?;

        if self.providers.is_empty() {
            return Err(AuthError::config_error(
                "at least one credential provider is required",
            ));
        }

        Ok(Auth {
            config,
            providers: self.providers,
            callbacks: self
                .callbacks
                .unwrap_or_else(|| Arc::new(IdentityCallbacks)),
        })
    }
}

impl Default for AuthBuilder {
    fn default() -> Self {
        Self::new()
    }
}
