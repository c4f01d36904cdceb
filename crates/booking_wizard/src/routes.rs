// --- File: crates/booking_wizard/src/routes.rs ---
use axum::{
    routing::{get, post},
    Router,
};
use booking_config::AppConfig;
use std::sync::Arc;

use crate::handlers::{
    get_session_handler, start_session_handler, submit_payment_info_handler,
    submit_user_info_handler, BookingApiState,
};

/// Creates a router containing all routes of the booking wizard.
/// Paths are relative to the `/api` prefix the backend nests them under.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let booking_state = Arc::new(BookingApiState::new(&config));

    Router::new()
        .route("/booking/sessions", post(start_session_handler))
        .route("/booking/sessions/{session_id}", get(get_session_handler))
        .route(
            "/booking/sessions/{session_id}/user-info",
            post(submit_user_info_handler),
        )
        .route(
            "/booking/sessions/{session_id}/payment-info",
            post(submit_payment_info_handler),
        )
        .with_state(booking_state)
}
