// --- File: crates/bookly_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP error responses
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Repository and auth abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, forbidden, internal_error, invalid_input, unauthorized, BooklyError,
    HttpStatusCode, StoreError,
};

pub use http::{handle_json_result, IntoHttpResponse};

pub use logging::{init, init_with_level, log_result};

pub use models::{BookingRecord, BookingsByDate, DateKey, OverridesByDate, SlotOverrides};
