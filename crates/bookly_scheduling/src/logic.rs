// --- File: crates/bookly_scheduling/src/logic.rs ---
use bookly_common::services::{SharedBookingRepository, SharedOverrideRepository};
use bookly_common::{
    conflict, invalid_input, log_result, BookingRecord, BookingsByDate, BooklyError, DateKey,
    OverridesByDate, SlotOverrides,
};
use bookly_config::SlotPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::slots::{is_standard_slot, standard_slots};

// --- Data Structures ---
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-10-28"))]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub date: String,
    pub available_times: Vec<String>,
}

// Every field is optional on the wire so a missing one is a 400, not a
// deserialization failure.
#[derive(Deserialize, Debug, Default, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2025-10-28"))]
    pub date: Option<String>,
    /// Slot label
    #[cfg_attr(feature = "openapi", schema(example = "09:00 AM - 10:00 AM"))]
    pub time: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SetOverridesRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2025-10-28"))]
    pub date: Option<String>,
    /// Slot label to enabled flag; `false` disables the slot
    pub slots: Option<SlotOverrides>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SetOverridesResponse {
    pub success: bool,
    pub message: String,
    /// Overrides in effect for the date after the merge
    pub overrides: SlotOverrides,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    pub passcode: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

fn required_field(value: Option<String>, field: &str) -> Result<String, BooklyError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| invalid_input(format!("missing required field: {}", field)))
}

// Dates are checked for blankness only; the strict format check sees the raw value.
fn required_date(value: Option<String>) -> Result<DateKey, BooklyError> {
    let raw = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| invalid_input("missing required field: date"))?;
    DateKey::parse(&raw)
}

impl BookSlotRequest {
    /// Checks required fields and the date format.
    pub fn validate(self) -> Result<(DateKey, BookingRecord), BooklyError> {
        let date = required_date(self.date)?;
        let slot = required_field(self.time, "time")?;
        let name = required_field(self.name, "name")?;
        let email = required_field(self.email, "email")?;
        let address = required_field(self.address, "address")?;
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok((
            date,
            BookingRecord {
                slot,
                name,
                email,
                address,
                notes,
            },
        ))
    }
}

// --- Availability Logic ---

/// Keeps the standard slots that are neither booked nor disabled, in order.
pub fn filter_available(
    standard: &[&str],
    booked: &[String],
    overrides: &SlotOverrides,
) -> Vec<String> {
    standard
        .iter()
        .filter(|slot| !booked.iter().any(|b| b == *slot))
        .filter(|slot| overrides.get(**slot) != Some(&false))
        .map(|slot| slot.to_string())
        .collect()
}

/// Resolves availability and applies bookings and overrides.
pub struct SchedulingService {
    policy: SlotPolicy,
    bookings: SharedBookingRepository,
    overrides: SharedOverrideRepository,
}

impl SchedulingService {
    pub fn new(
        policy: SlotPolicy,
        bookings: SharedBookingRepository,
        overrides: SharedOverrideRepository,
    ) -> Self {
        Self {
            policy,
            bookings,
            overrides,
        }
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    pub fn resolve_availability(&self, date: &DateKey) -> Result<Vec<String>, BooklyError> {
        let standard = standard_slots(date, self.policy);
        if standard.is_empty() {
            debug!("No standard slots on {} ({})", date, date.weekday());
            return Ok(Vec::new());
        }
        let booked = self.bookings.booked_slots(date)?;
        let overrides = self.overrides.for_date(date)?;
        Ok(filter_available(standard, &booked, &overrides))
    }

    pub fn availability_for(&self, raw_date: Option<&str>) -> Result<AvailabilityResponse, BooklyError> {
        let raw_date = raw_date.ok_or_else(|| invalid_input("missing required query parameter: date"))?;
        let date = DateKey::parse(raw_date)?;
        let available_times = self.resolve_availability(&date)?;
        Ok(AvailabilityResponse {
            date: date.key(),
            available_times,
        })
    }

    /// Books a slot. Validation errors are reported before any conflict check.
    pub fn create_booking(&self, request: BookSlotRequest) -> Result<BookingResponse, BooklyError> {
        let (date, record) = request.validate()?;

        if !is_standard_slot(&date, self.policy, &record.slot) {
            return Err(conflict(format!(
                "slot '{}' is not offered on {}",
                record.slot, date
            )));
        }
        // Overrides only gate new bookings; a disable landing after this read
        // does not undo the insert below.
        if self.overrides.for_date(&date)?.get(&record.slot) == Some(&false) {
            return Err(conflict(format!(
                "slot '{}' on {} is not available",
                record.slot, date
            )));
        }

        let slot = record.slot.clone();
        self.bookings.insert_if_vacant(&date, record)?;
        info!("Booking created for {} at {}", date, slot);

        Ok(BookingResponse {
            success: true,
            message: format!("Appointment booked for {} at {}.", date, slot),
        })
    }

    pub fn list_bookings(&self) -> Result<BookingsByDate, BooklyError> {
        Ok(self.bookings.all()?)
    }

    pub fn set_overrides(&self, request: SetOverridesRequest) -> Result<SetOverridesResponse, BooklyError> {
        let date = required_date(request.date)?;
        let patch = request
            .slots
            .ok_or_else(|| invalid_input("missing required field: slots"))?;

        let changed = patch.len();
        let merged = log_result(
            self.overrides.merge(&date, patch),
            &format!("Updated {} slot override(s) for {}", changed, date),
            "Failed to update slot overrides",
        )?;

        Ok(SetOverridesResponse {
            success: true,
            message: format!("Availability updated for {}.", date),
            overrides: merged,
        })
    }

    pub fn list_overrides(&self) -> Result<OverridesByDate, BooklyError> {
        Ok(self.overrides.all()?)
    }
}
