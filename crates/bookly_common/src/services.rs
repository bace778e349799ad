//! Service abstractions for state and credentials.
//!
//! Handlers only see these traits. The in-memory implementations live in
//! `bookly-scheduling`; a persistent backend or a stronger credential scheme
//! can be dropped in behind the same interfaces.

use std::sync::Arc;

use crate::error::{BooklyError, StoreError};
use crate::models::{BookingRecord, BookingsByDate, DateKey, OverridesByDate, SlotOverrides};

/// Storage for confirmed bookings.
pub trait BookingRepository: Send + Sync {
    /// Stores `record` unless its slot is already booked for `date`.
    ///
    /// Check and insert happen as one step; of two concurrent callers for the
    /// same (date, slot) exactly one succeeds and the other gets
    /// [`StoreError::SlotTaken`].
    fn insert_if_vacant(&self, date: &DateKey, record: BookingRecord) -> Result<(), StoreError>;

    /// Slot labels already booked on `date`.
    fn booked_slots(&self, date: &DateKey) -> Result<Vec<String>, StoreError>;

    /// Every booking, keyed by date.
    fn all(&self) -> Result<BookingsByDate, StoreError>;
}

/// Storage for administrative slot overrides.
pub trait OverrideRepository: Send + Sync {
    /// Merges `patch` into the overrides for `date` and returns the result.
    /// Entries not named in the patch are left alone.
    fn merge(&self, date: &DateKey, patch: SlotOverrides) -> Result<SlotOverrides, StoreError>;

    /// Overrides for `date`, empty if none were ever set.
    fn for_date(&self, date: &DateKey) -> Result<SlotOverrides, StoreError>;

    /// Every override, keyed by date.
    fn all(&self) -> Result<OverridesByDate, StoreError>;
}

/// Admin credential scheme.
pub trait AuthProvider: Send + Sync {
    /// Exchanges a passcode for a bearer token.
    fn issue_token(&self, passcode: &str) -> Result<String, BooklyError>;

    /// Checks a presented bearer token.
    ///
    /// `None` means no credentials were sent (Unauthorized); an unknown token
    /// is Forbidden.
    fn authorize(&self, token: Option<&str>) -> Result<(), BooklyError>;
}

pub type SharedBookingRepository = Arc<dyn BookingRepository>;
pub type SharedOverrideRepository = Arc<dyn OverrideRepository>;
pub type SharedAuthProvider = Arc<dyn AuthProvider>;
