// --- File: crates/booking_wizard/src/lib.rs ---
pub mod error;
pub mod handlers;
pub mod routes;
pub mod sessions;
#[cfg(test)]
mod sessions_test;
pub mod wizard;

// Re-export for main backend
pub use error::WizardError;
pub use handlers::BookingApiState;
pub use routes::routes;
pub use sessions::BookingSessions;
pub use wizard::{BookingState, BookingWizard, Step};
