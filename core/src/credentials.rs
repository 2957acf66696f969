//! Bearer token sources for the dispatcher.
//!
//! The dispatcher asks its provider for a token on every call and never
//! caches the answer, so a rotated token takes effect on the next request.

use std::env;

/// Environment variable read by `EnvCredentials::default()`.
pub const DEFAULT_API_KEY_VAR: &str = "SENDGRID_APIKEY";

/// Supplies the bearer token attached to each request.
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` when no credential is available.
    fn bearer_token(&self) -> Option<String>;
}

/// Reads the token from an environment variable on every call.
///
/// An unset or empty variable yields `None`; the request is still sent.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn bearer_token(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|token| !token.is_empty())
    }
}

/// A token fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticCredentials(String);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_sendgrid_variable() {
        assert_eq!(EnvCredentials::default().var(), "SENDGRID_APIKEY");
    }

    #[test]
    fn env_token_is_read_per_call() {
        let creds = EnvCredentials::new("REST_CORE_UNIT_TOKEN");
        temp_env::with_var("REST_CORE_UNIT_TOKEN", Some("first"), || {
            assert_eq!(creds.bearer_token().as_deref(), Some("first"));
        });
        temp_env::with_var("REST_CORE_UNIT_TOKEN", Some("second"), || {
            assert_eq!(creds.bearer_token().as_deref(), Some("second"));
        });
    }

    #[test]
    fn missing_or_empty_env_token_is_none() {
        let creds = EnvCredentials::new("REST_CORE_UNIT_EMPTY");
        temp_env::with_var_unset("REST_CORE_UNIT_EMPTY", || {
            assert_eq!(creds.bearer_token(), None);
        });
        temp_env::with_var("REST_CORE_UNIT_EMPTY", Some(""), || {
            assert_eq!(creds.bearer_token(), None);
        });
    }

    #[test]
    fn static_token() {
        assert_eq!(StaticCredentials::new("abc").bearer_token().as_deref(), Some("abc"));
    }
}
