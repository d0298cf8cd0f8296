//! Error taxonomy for the form verification flow.

use thiserror::Error;

/// Errors a single submission can end in.
///
/// Every variant is scoped to one request; none is retried.
#[derive(Debug, Error)]
pub enum FormError {
    /// Required field missing or empty
    #[error("{0}")]
    InputError(String),

    /// Verifier answered and denied the token
    #[error("reCAPTCHA rejected: {error_codes:?}")]
    VerificationRejected { error_codes: Vec<String> },

    /// Network, timeout, or decode failure talking to the verifier
    #[error("Erreur de vérification: {0}")]
    VerifierUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FormError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InputError(_) => 400,
            Self::VerificationRejected { .. } => 400,
            Self::VerifierUnavailable(_) => 502,
            Self::Config(_) => 500,
        }
    }
}
