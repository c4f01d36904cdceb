// --- File: crates/booking_common/src/lib.rs ---

pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod http; // HTTP response mapping

#[cfg(test)]
mod error_test;

// Re-export error types and utilities for easier access
pub use error::{
    conflict,
    not_found,
    parse_error,
    validation_error,
    BookingError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{map_json_error, IntoHttpResponse};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error};

// This crate holds what every other booking crate shares:
// the base error type with its HTTP status mapping, and tracing setup.
