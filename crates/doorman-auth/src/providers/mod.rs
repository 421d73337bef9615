//! Credential provider implementations

pub mod username;

// Re-exports for convenience
pub use username::UsernameProvider;
