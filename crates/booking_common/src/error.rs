// --- File: crates/booking_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all booking errors.
///
/// Each crate keeps its own error enum and implements `From<SpecificError> for BookingError`
/// so callers at the outer edge (the HTTP layer, the binary) only deal with one type.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Submitted form data did not pass validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Operation does not fit the current state (e.g. wrong wizard step)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::ParseError(_) => 400,
            BookingError::ConfigError(_) => 500,
            BookingError::ValidationError(_) => 422,
            BookingError::ConflictError(_) => 409,
            BookingError::NotFoundError(_) => 404,
            BookingError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<config::ConfigError> for BookingError {
    fn from(err: config::ConfigError) -> Self {
        BookingError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        BookingError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn parse_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::ParseError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> BookingError {
    BookingError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> BookingError {
    BookingError::ConflictError(message.to_string())
}
