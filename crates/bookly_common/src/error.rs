use std::fmt;
use thiserror::Error;

/// The base error type for all Bookly errors.
///
/// Every request-level failure ends up as one of these variants, which map
/// one-to-one onto HTTP status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BooklyError {
    /// Malformed or missing request fields
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested slot cannot be booked
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or wrong credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Credentials were presented but are not recognised
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BooklyError {
    fn status_code(&self) -> u16 {
        match self {
            BooklyError::InvalidInput(_) => 400,
            BooklyError::Conflict(_) => 409,
            BooklyError::Unauthorized(_) => 401,
            BooklyError::Forbidden(_) => 403,
            BooklyError::InternalError(_) => 500,
        }
    }
}

/// Errors raised by the booking and override stores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("slot {slot} on {date} is already booked")]
    SlotTaken { date: String, slot: String },

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

impl From<StoreError> for BooklyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SlotTaken { .. } => BooklyError::Conflict(err.to_string()),
            StoreError::Poisoned(_) => BooklyError::InternalError(err.to_string()),
        }
    }
}

// Utility functions for error handling
pub fn invalid_input<T: fmt::Display>(message: T) -> BooklyError {
    BooklyError::InvalidInput(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> BooklyError {
    BooklyError::Conflict(message.to_string())
}

pub fn unauthorized<T: fmt::Display>(message: T) -> BooklyError {
    BooklyError::Unauthorized(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> BooklyError {
    BooklyError::Forbidden(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> BooklyError {
    BooklyError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(invalid_input("x").status_code(), 400);
        assert_eq!(conflict("x").status_code(), 409);
        assert_eq!(unauthorized("x").status_code(), 401);
        assert_eq!(forbidden("x").status_code(), 403);
        assert_eq!(internal_error("x").status_code(), 500);
    }

    #[test]
    fn test_store_errors_convert() {
        let taken = StoreError::SlotTaken {
            date: "2025-10-28".to_string(),
            slot: "09:00 AM - 10:00 AM".to_string(),
        };
        assert!(matches!(BooklyError::from(taken), BooklyError::Conflict(_)));

        let poisoned = StoreError::Poisoned("bookings".to_string());
        assert!(matches!(
            BooklyError::from(poisoned),
            BooklyError::InternalError(_)
        ));
    }
}
