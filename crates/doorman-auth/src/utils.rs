//! Random value helpers

use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Utility functions for generating random values
pub struct CryptoUtils;

impl CryptoUtils {
    /// Generate a random string of specified length using alphanumeric characters
    pub fn generate_random_string(length: usize) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    /// Generate a signing secret suitable for `AuthConfig`
    pub fn generate_secret(length: Option<usize>) -> String {
        Self::generate_random_string(length.unwrap_or(64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_generation() {
        let a = CryptoUtils::generate_random_string(16);
        let b = CryptoUtils::generate_random_string(16);

        assert_eq!(a.len(), 16);
        assert_eq!(b.len(), 16);
        assert_ne!(a, b);

        let secret = CryptoUtils::generate_secret(None);
        assert_eq!(secret.len(), 64);

        let short = CryptoUtils::generate_secret(Some(32));
        assert_eq!(short.len(), 32);
    }
}
