// --- File: crates/booking_wizard/src/handlers.rs ---
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Json, Response},
};
use booking_common::{map_json_error, BookingError};
use booking_config::AppConfig;
use booking_forms::{PaymentInfo, UserInfo};
use serde::Serialize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::WizardError;
use crate::sessions::BookingSessions;
use crate::wizard::{BookingState, BookingWizard, Step};

// State for booking handlers
pub struct BookingApiState {
    pub sessions: RwLock<BookingSessions>,
}

impl BookingApiState {
    /// Every session started through this state validates with `config.validation`.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sessions: RwLock::new(BookingSessions::new(config.validation)),
        }
    }

    fn read_sessions(&self) -> Result<RwLockReadGuard<'_, BookingSessions>, WizardError> {
        self.sessions
            .read()
            .map_err(|e| WizardError::StoreUnavailable(e.to_string()))
    }

    fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, BookingSessions>, WizardError> {
        self.sessions
            .write()
            .map_err(|e| WizardError::StoreUnavailable(e.to_string()))
    }
}

/// Payment details as shown back to the client: card masked, CVV omitted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfoView {
    pub card_number: String,
    pub expiry_date: String,
    pub billing_zip: String,
    pub accepted_policy: bool,
}

impl From<&PaymentInfo> for PaymentInfoView {
    fn from(info: &PaymentInfo) -> Self {
        Self {
            card_number: info.masked_card_number(),
            expiry_date: info.expiry_date.clone(),
            billing_zip: info.billing_zip.clone(),
            accepted_policy: info.accepted_policy,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingStateView {
    pub user_info: Option<UserInfo>,
    pub payment_info: Option<PaymentInfoView>,
}

impl From<&BookingState> for BookingStateView {
    fn from(state: &BookingState) -> Self {
        Self {
            user_info: state.user_info.clone(),
            payment_info: state.payment_info.as_ref().map(PaymentInfoView::from),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub step: Step,
    pub state: BookingStateView,
}

impl SessionResponse {
    fn from_wizard(session_id: Uuid, wizard: &BookingWizard) -> Self {
        Self {
            session_id,
            step: wizard.step(),
            state: BookingStateView::from(wizard.state()),
        }
    }
}

/// Unwraps a JSON body, turning axum's plain-text rejection into a wizard error.
fn form_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, WizardError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            debug!(status = %rejection.status(), "Rejected form body");
            Err(WizardError::MalformedPayload(rejection.body_text()))
        }
    }
}

/// Handler to start a new booking session on the user details step.
#[axum::debug_handler]
pub async fn start_session_handler(
    State(state): State<Arc<BookingApiState>>,
) -> Result<(StatusCode, Json<SessionResponse>), WizardError> {
    let mut sessions = state.write_sessions()?;
    let session_id = sessions.start();
    let wizard = sessions.wizard(session_id)?;
    info!(session_id = %session_id, "Started booking session");
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_wizard(session_id, wizard)),
    ))
}

/// Handler to read the current step and collected data of a session.
#[axum::debug_handler]
pub async fn get_session_handler(
    State(state): State<Arc<BookingApiState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, Response> {
    let result = state.read_sessions().and_then(|sessions| {
        sessions
            .wizard(session_id)
            .map(|wizard| SessionResponse::from_wizard(session_id, wizard))
    });
    map_json_error(result, BookingError::from)
}

/// Handler for the user details form (step 1).
#[axum::debug_handler]
pub async fn submit_user_info_handler(
    State(state): State<Arc<BookingApiState>>,
    Path(session_id): Path<Uuid>,
    payload: Result<Json<UserInfo>, JsonRejection>,
) -> Result<Json<SessionResponse>, WizardError> {
    let payload = form_payload(payload)?;
    let mut sessions = state.write_sessions()?;
    let wizard = sessions.wizard_mut(session_id)?;
    wizard.submit_user_info(&payload)?;
    Ok(Json(SessionResponse::from_wizard(session_id, wizard)))
}

/// Handler for the payment details form (step 2).
#[axum::debug_handler]
pub async fn submit_payment_info_handler(
    State(state): State<Arc<BookingApiState>>,
    Path(session_id): Path<Uuid>,
    payload: Result<Json<PaymentInfo>, JsonRejection>,
) -> Result<Json<SessionResponse>, WizardError> {
    let payload = form_payload(payload)?;
    let mut sessions = state.write_sessions()?;
    let wizard = sessions.wizard_mut(session_id)?;
    wizard.submit_payment_info(&payload)?;
    Ok(Json(SessionResponse::from_wizard(session_id, wizard)))
}
