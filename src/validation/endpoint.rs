//! Endpoint resolution for the validation service
//!
//! The default endpoint ships as a base64-encoded literal and is decoded once
//! at load time into an immutable value. Decoding is a deterministic
//! transformation with no side effects; deployments override the endpoint
//! explicitly through `ValidatorConfig` rather than editing the literal.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use lazy_static::lazy_static;

use crate::core::error::ValidateError;

/// Encoded form of the default validation endpoint
const ENCODED_DEFAULT_ENDPOINT: &str =
    "aHR0cHM6Ly9hcGkuY3JlZGVudGlhbC1nYXRlLmV4YW1wbGUvdjEvY3JlZGVudGlhbHMvdmFsaWRhdGU=";

lazy_static! {
    /// Default endpoint URL, decoded once per process
    pub static ref DEFAULT_ENDPOINT: String = decode_endpoint(ENCODED_DEFAULT_ENDPOINT)
        .expect("embedded endpoint value must decode to a URL");
}

/// Decode a base64-encoded endpoint value into a URL string
///
/// # Arguments
///
/// * `encoded` - Base64 (standard alphabet, padded) encoding of a URL
///
/// # Examples
///
/// ```
/// use credential_gate::validation::endpoint::decode_endpoint;
///
/// let url = decode_endpoint("aHR0cHM6Ly9leGFtcGxlLmNvbS92YWxpZGF0ZQ==").unwrap();
/// assert_eq!(url, "https://example.com/validate");
/// ```
pub fn decode_endpoint(encoded: &str) -> Result<String, ValidateError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| ValidateError::EndpointDecode {
            message: e.to_string(),
        })?;

    let url = String::from_utf8(bytes).map_err(|e| ValidateError::EndpointDecode {
        message: e.to_string(),
    })?;

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidateError::EndpointDecode {
            message: format!("URLとして解釈できません: {}", url),
        });
    }

    Ok(url)
}
