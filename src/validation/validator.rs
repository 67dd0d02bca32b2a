//! Credential Validator - submits a secret credential to the remote endpoint
//!
//! This module performs the single verification exchange: one POST carrying
//! the credential, one classified outcome. Nothing is retried, nothing is
//! stored; the credential is borrowed for the duration of one request and the
//! shape judgment is left entirely to the remote side.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use crate::core::config::ValidatorConfig;
use crate::core::error::{FailureCause, ValidateError};
use crate::validation::classifier::{ResponseClass, classify_response};

/// Payload returned by a successful validation exchange, passed through
/// verbatim from the remote response
pub type ValidationOutcome = Value;

/// Submits a credential to the configured validation endpoint
///
/// Each call to [`validate`](CredentialValidator::validate) is an independent
/// exchange; there is no shared mutable state between calls.
///
/// # Examples
///
/// ```no_run
/// use credential_gate::validation::validator::CredentialValidator;
/// use secrecy::SecretString;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let validator = CredentialValidator::new();
///     let credential = SecretString::new("deadbeef".repeat(8).into());
///
///     let outcome = validator.validate(&credential).await?;
///     println!("accepted: {}", outcome);
///     Ok(())
/// }
/// ```
pub struct CredentialValidator {
    config: ValidatorConfig,
    client: Client,
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialValidator {
    /// Create a validator against the default endpoint and wait budget
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with an explicit configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a credential against the remote endpoint
    ///
    /// Issues exactly one POST with the JSON body `{"credential": <secret>}`
    /// and waits at most the configured budget. An accepted response resolves
    /// with its payload unchanged. Every failure is logged with its classified
    /// cause and then normalized into [`ValidateError::ValidationFailed`],
    /// with the cause retained as the error source.
    pub async fn validate(
        &self,
        credential: &SecretString,
    ) -> Result<ValidationOutcome, ValidateError> {
        println!(
            "🔍 Validating credential {}...",
            mask_credential(credential.expose_secret())
        );

        let sent = self
            .client
            .post(&self.config.endpoint)
            .json(&json!({ "credential": credential.expose_secret() }))
            .timeout(self.config.timeout)
            .send()
            .await;

        let cause = match sent {
            Ok(response) => {
                let status = response.status();
                match response.bytes().await {
                    Ok(body) => match classify_response(status, &body) {
                        ResponseClass::Accepted(payload) => {
                            println!("✅ Credential validation successful");
                            return Ok(payload);
                        }
                        ResponseClass::Rejected => FailureCause::Rejected,
                        ResponseClass::RemoteReported { message } => {
                            FailureCause::RemoteReported { message }
                        }
                    },
                    Err(e) => FailureCause::Transport {
                        message: e.to_string(),
                    },
                }
            }
            Err(e) => FailureCause::Transport {
                message: e.to_string(),
            },
        };

        eprintln!("❌ Credential validation failed [{}]: {}", cause.code(), cause);
        Err(ValidateError::ValidationFailed { cause })
    }
}

/// Mask a credential for diagnostics, keeping only the outer characters
///
/// Counts and slices by character, not byte; the credential may be arbitrary
/// text and must never make the diagnostics panic.
fn mask_credential(value: &str) -> String {
    let count = value.chars().count();
    if count < 10 {
        return "****".to_string();
    }

    let head: String = value.chars().take(3).collect();
    let tail: String = value.chars().skip(count - 3).collect();
    format!("{}...{}", head, tail)
}
