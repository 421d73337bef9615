//! # doorman-auth: credential sign-in and stateless token sessions
//!
//! This crate provides username/password sign-in for web applications:
//! pluggable credential providers, token enrichment callbacks, and a
//! per-request session projection derived from a client-held token.

pub mod callbacks;
pub mod config;
pub mod error;
pub mod flow;
pub mod providers;
pub mod session;
pub mod token;
pub mod traits;
pub mod utils;

// Prelude-style re-exports for core functionality

// Error handling
pub use error::AuthError;

// Core authentication traits and identity records
pub use traits::{AuthCallbacks, CredentialField, CredentialFieldKind, Credentials, CredentialsProvider, User};

// Configuration
pub use config::{AuthConfig, SessionOptions, SessionStrategy};

// Providers and callbacks
pub use callbacks::IdentityCallbacks;
pub use providers::username::UsernameProvider;

// Token/session records and the sign-in flow
pub use flow::{Auth, AuthBuilder};
pub use session::{Session, SessionUser};
pub use token::SessionToken;

/// Authentication result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication system version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
