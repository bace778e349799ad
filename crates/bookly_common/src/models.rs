// --- File: crates/bookly_common/src/models.rs ---

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BooklyError;

static DATE_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));

/// A calendar day in `YYYY-MM-DD` form, the key of every store.
///
/// No timezone is attached; the weekday is that of UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn parse(raw: &str) -> Result<Self, BooklyError> {
        if !DATE_KEY_PATTERN.is_match(raw) {
            return Err(BooklyError::InvalidInput(format!(
                "date '{}' must be in YYYY-MM-DD format",
                raw
            )));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(DateKey)
            .map_err(|_| BooklyError::InvalidInput(format!("date '{}' is not a calendar date", raw)))
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The string used as map key in the stores.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = BooklyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

/// A confirmed booking. Created once, never changed or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingRecord {
    /// Slot label, e.g. "09:00 AM - 10:00 AM"
    #[serde(rename = "time")]
    #[cfg_attr(feature = "openapi", schema(example = "09:00 AM - 10:00 AM"))]
    pub slot: String,
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-slot administrative flags for one day; `false` disables the slot.
pub type SlotOverrides = BTreeMap<String, bool>;

pub type BookingsByDate = BTreeMap<String, Vec<BookingRecord>>;

pub type OverridesByDate = BTreeMap<String, SlotOverrides>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = DateKey::parse("2025-10-28").unwrap();
        assert_eq!(date.weekday(), Weekday::Tue);
        assert_eq!(date.key(), "2025-10-28");
        assert!(!date.is_weekend());
    }

    #[test]
    fn test_weekend_detection() {
        assert!(DateKey::parse("2025-11-01").unwrap().is_weekend()); // Saturday
        assert!(DateKey::parse("2025-11-02").unwrap().is_weekend()); // Sunday
        assert!(!DateKey::parse("2025-11-03").unwrap().is_weekend()); // Monday
    }

    #[test]
    fn test_rejects_malformed_dates() {
        for raw in ["", "2025-1-05", "28-10-2025", "2025/10/28", "2025-10-28T00:00", " 2025-10-28", "２０２５-10-28"] {
            assert!(
                matches!(DateKey::parse(raw), Err(BooklyError::InvalidInput(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(DateKey::parse("2025-02-30").is_err());
        assert!(DateKey::parse("2025-13-01").is_err());
    }

    #[test]
    fn test_booking_record_uses_time_field() {
        let record = BookingRecord {
            slot: "09:00 AM - 10:00 AM".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            address: "1 Main St".to_string(),
            notes: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["time"], "09:00 AM - 10:00 AM");
        assert!(json.get("notes").is_none());
    }
}
