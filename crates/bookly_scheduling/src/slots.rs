// --- File: crates/bookly_scheduling/src/slots.rs ---
//! Fixed weekday slot lists.

use bookly_common::DateKey;
use bookly_config::SlotPolicy;

/// One-hour slots, lunch hour left out.
pub const HOURLY_SLOTS: &[&str] = &[
    "09:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    "01:00 PM - 02:00 PM",
    "02:00 PM - 03:00 PM",
    "03:00 PM - 04:00 PM",
    "04:00 PM - 05:00 PM",
];

pub const TWO_HOUR_SLOTS: &[&str] = &[
    "09:00 AM - 11:00 AM",
    "11:00 AM - 01:00 PM",
    "01:00 PM - 03:00 PM",
    "03:00 PM - 05:00 PM",
];

pub fn weekday_slots(policy: SlotPolicy) -> &'static [&'static str] {
    match policy {
        SlotPolicy::Hourly => HOURLY_SLOTS,
        SlotPolicy::TwoHour => TWO_HOUR_SLOTS,
    }
}

/// Slots offered on `date` before bookings and overrides are considered.
/// Weekends offer nothing.
pub fn standard_slots(date: &DateKey, policy: SlotPolicy) -> &'static [&'static str] {
    if date.is_weekend() {
        &[]
    } else {
        weekday_slots(policy)
    }
}

pub fn is_standard_slot(date: &DateKey, policy: SlotPolicy, slot: &str) -> bool {
    standard_slots(date, policy).contains(&slot)
}
