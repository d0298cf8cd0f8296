//! Form submission verification endpoint.

use axum::{Form, Json, extract::State};

use formguard_common::{AcceptedResponse, FormError, SubmissionForm};

use crate::error::ApiError;
use crate::state::AppState;

/// Verify a contact form submission
///
/// Returns:
/// - 200: reCAPTCHA passed, the email is echoed back
/// - 400: missing field or token (verifier not called), or token denied
/// - 502: verifier unreachable, timed out, or answered garbage
pub async fn verify_submission(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> Result<Json<AcceptedResponse>, ApiError> {
    let submission = form.validate().inspect_err(|e| {
        tracing::debug!(reason = %e, "Submission rejected before verification");
    })?;

    let result = state
        .captcha_verifier
        .verify(&submission.verification_token)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "reCAPTCHA verifier unreachable"))?;

    if let Err(e) = result.ensure_success() {
        if let FormError::VerificationRejected { ref error_codes } = e {
            tracing::warn!(error_codes = ?error_codes, "reCAPTCHA verification failed");
        }
        return Err(e.into());
    }

    tracing::info!(
        message_len = submission.message.len(),
        "Submission accepted"
    );

    Ok(Json(AcceptedResponse::new(submission.email)))
}
