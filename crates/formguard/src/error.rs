//! HTTP rendering of verification flow errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formguard_common::{DetailResponse, FormError, RejectedResponse};

/// [`FormError`] as an axum response
#[derive(Debug)]
pub struct ApiError(pub FormError);

impl From<FormError> for ApiError {
    fn from(value: FormError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0 {
            FormError::VerificationRejected { error_codes } => {
                (status, Json(RejectedResponse::new(error_codes))).into_response()
            }
            other => (
                status,
                Json(DetailResponse {
                    detail: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
