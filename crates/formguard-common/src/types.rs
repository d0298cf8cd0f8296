//! Core types shared across FormGuard components.

use serde::{Deserialize, Serialize};

use crate::constants::messages;
use crate::error::FormError;

/// Raw contact form as posted by the browser.
///
/// Every field may be absent; [`SubmissionForm::validate`] decides what
/// counts as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub message: String,

    /// Token produced by the reCAPTCHA widget
    #[serde(default, rename = "g-recaptcha-response")]
    pub verification_token: Option<String>,
}

impl SubmissionForm {
    /// Check required fields, producing a [`Submission`].
    ///
    /// Email and message are checked before the token.
    pub fn validate(self) -> Result<Submission, FormError> {
        if self.email.is_empty() || self.message.is_empty() {
            return Err(FormError::InputError(messages::MISSING_FIELDS.to_string()));
        }

        let verification_token = match self.verification_token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(FormError::InputError(messages::MISSING_RECAPTCHA.to_string())),
        };

        Ok(Submission {
            email: self.email,
            message: self.message,
            verification_token,
        })
    }
}

/// A submission with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    pub message: String,
    pub verification_token: String,
}

/// Verifier answer (`siteverify` JSON body)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Missing is treated as a failure
    #[serde(default)]
    pub success: bool,

    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

impl VerificationResult {
    /// Turn a negative answer into [`FormError::VerificationRejected`].
    pub fn ensure_success(self) -> Result<(), FormError> {
        if self.success {
            Ok(())
        } else {
            Err(FormError::VerificationRejected {
                error_codes: self.error_codes,
            })
        }
    }
}

/// Body of a 200 response to an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedResponse {
    pub ok: bool,
    pub message: String,
    pub email: String,
}

impl AcceptedResponse {
    pub fn new(email: String) -> Self {
        Self {
            ok: true,
            message: messages::FORM_ACCEPTED.to_string(),
            email,
        }
    }
}

/// Body of a 400 response when the verifier denied the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedResponse {
    pub ok: bool,
    pub error: String,
    pub details: Vec<String>,
}

impl RejectedResponse {
    pub fn new(details: Vec<String>) -> Self {
        Self {
            ok: false,
            error: messages::RECAPTCHA_FAILED.to_string(),
            details,
        }
    }
}

/// Body of input and gateway error responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}
