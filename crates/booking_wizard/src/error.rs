// --- File: crates/booking_wizard/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking_common::{conflict, not_found, parse_error, validation_error, BookingError, HttpStatusCode};
use booking_forms::{FieldErrors, PaymentField, UserInfoField};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::wizard::Step;

/// Wizard-specific error types.
#[derive(Error, Debug)]
pub enum WizardError {
    /// A wizard was used before it was started. This is a caller bug, not bad input.
    #[error("Booking wizard accessed before it was initialized: no session {0}; start a booking session first")]
    NotInitialized(Uuid),

    /// A form was submitted on a step that does not show it
    #[error("Cannot submit {submitted} form while the wizard is on the {current} step")]
    StepMismatch { submitted: Step, current: Step },

    /// The user details did not pass validation
    #[error("User details are invalid: {0}")]
    InvalidUserInfo(FieldErrors<UserInfoField>),

    /// The payment details did not pass validation
    #[error("Payment details are invalid: {0}")]
    InvalidPaymentInfo(FieldErrors<PaymentField>),

    /// The request body could not be read as the form's JSON payload
    #[error("Malformed form payload: {0}")]
    MalformedPayload(String),

    /// Session store lock was poisoned by a panicking request
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Convert WizardError to BookingError
impl From<WizardError> for BookingError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::NotInitialized(_) => not_found(err),
            WizardError::StepMismatch { .. } => conflict(err),
            WizardError::InvalidUserInfo(_) | WizardError::InvalidPaymentInfo(_) => {
                validation_error(err)
            }
            WizardError::MalformedPayload(msg) => parse_error(msg),
            WizardError::StoreUnavailable(msg) => BookingError::InternalError(msg),
        }
    }
}

impl HttpStatusCode for WizardError {
    fn status_code(&self) -> u16 {
        match self {
            WizardError::NotInitialized(_) => 404,
            WizardError::StepMismatch { .. } => 409,
            WizardError::InvalidUserInfo(_) | WizardError::InvalidPaymentInfo(_) => 422,
            WizardError::MalformedPayload(_) => 400,
            WizardError::StoreUnavailable(_) => 500,
        }
    }
}

/// Validation failures carry their per-field errors so the client can mark
/// each input; everything else goes through the common error body.
impl IntoResponse for WizardError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            WizardError::InvalidUserInfo(errors) => {
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            WizardError::InvalidPaymentInfo(errors) => {
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            other => BookingError::from(other).into_response(),
        }
    }
}
