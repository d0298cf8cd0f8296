//! siteverify client.

use anyhow::{Context, Result};
use formguard_common::constants::siteverify_fields;
use formguard_common::{FormError, VerificationResult};
use reqwest::Client;

use crate::config::RecaptchaConfig;

/// Verify one widget token against the configured verifier.
///
/// Sends `secret` and `response` as form fields in a single POST bounded by
/// the configured timeout. The verifier's HTTP status is ignored; only a JSON
/// body with a `success` flag is meaningful. Transport failures and
/// undecodable bodies become [`FormError::VerifierUnavailable`].
pub async fn siteverify(
    client: &Client,
    credentials: &RecaptchaConfig,
    token: &str,
) -> Result<VerificationResult, FormError> {
    let response = client
        .post(&credentials.verify_url)
        .timeout(credentials.timeout())
        .form(&[
            (siteverify_fields::SECRET, credentials.secret.as_str()),
            (siteverify_fields::RESPONSE, token),
        ])
        .send()
        .await
        .map_err(|e| FormError::VerifierUnavailable(e.to_string()))?;

    let status = response.status();
    let result = response
        .json::<VerificationResult>()
        .await
        .map_err(|e| FormError::VerifierUnavailable(e.to_string()))?;

    tracing::debug!(
        status = %status,
        success = result.success,
        error_codes = ?result.error_codes,
        "siteverify answered"
    );

    Ok(result)
}

/// CAPTCHA verifier service
pub struct CaptchaVerifier {
    /// Pooled HTTP client shared by all requests
    client: Client,
    /// Secret, endpoint and timeout
    credentials: RecaptchaConfig,
}

impl CaptchaVerifier {
    pub fn new(credentials: RecaptchaConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("formguard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, credentials })
    }

    /// Verify a widget token
    pub async fn verify(&self, token: &str) -> Result<VerificationResult, FormError> {
        siteverify(&self.client, &self.credentials, token).await
    }
}
