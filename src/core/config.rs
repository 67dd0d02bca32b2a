//! Configuration for the credential validator
//!
//! This module provides type-safe configuration with serde support. The
//! endpoint is an explicit configuration value resolved once at load time,
//! never recomputed per call.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::validation::endpoint::DEFAULT_ENDPOINT;

/// Default wait budget for the single validation request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Validator configuration
///
/// # Examples
///
/// ```
/// use credential_gate::core::config::ValidatorConfig;
/// use std::time::Duration;
///
/// let config = ValidatorConfig::default()
///     .with_endpoint("https://validator.internal/v1/credentials/validate")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidatorConfig {
    /// Validation endpoint URL
    pub endpoint: String,

    /// Wait budget for the request; the call is abandoned once exceeded
    pub timeout: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ValidatorConfig {
    /// Override the validation endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the wait budget
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_embedded_endpoint() {
        let config = ValidatorConfig::default();

        assert_eq!(config.endpoint, *DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_default_timeout_is_ten_seconds() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_millis(10_000));
    }

    #[test]
    fn test_with_endpoint_overrides_destination() {
        let config = ValidatorConfig::default().with_endpoint("http://127.0.0.1:9/validate");

        assert_eq!(config.endpoint, "http://127.0.0.1:9/validate");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_with_timeout_overrides_budget() {
        let config = ValidatorConfig::default().with_timeout(Duration::from_millis(250));

        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_config_roundtrips_through_serde() {
        let config = ValidatorConfig::default().with_timeout(Duration::from_secs(3));
        let json = serde_json::to_string(&config).unwrap();
        let restored: ValidatorConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, config);
    }
}
