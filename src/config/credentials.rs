//! API key resolution.
//!
//! The key is read from the config file or, more commonly, from the
//! environment variable named by `api.api_key_env`.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of looking up the API key.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured {
        /// Why no key was found, for the start-up log line.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key: literal `api_key` first, then `api_key_env`.
    ///
    /// Empty values count as missing.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
            Ok(_) => CredentialStatus::Unconfigured {
                reason: format!("environment variable {} is empty", self.api_key_env),
            },
            Err(_) => CredentialStatus::Unconfigured {
                reason: format!("environment variable {} is not set", self.api_key_env),
            },
        }
    }
}
