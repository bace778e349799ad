// --- File: crates/bookly_scheduling/src/store.rs ---
//! Process-lifetime, in-memory repositories.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bookly_common::services::{BookingRepository, OverrideRepository};
use bookly_common::{BookingRecord, BookingsByDate, DateKey, OverridesByDate, SlotOverrides, StoreError};
use tracing::debug;

fn read_lock<'a, T>(lock: &'a RwLock<T>, name: &str) -> Result<RwLockReadGuard<'a, T>, StoreError> {
    lock.read().map_err(|_| StoreError::Poisoned(name.to_string()))
}

fn write_lock<'a, T>(lock: &'a RwLock<T>, name: &str) -> Result<RwLockWriteGuard<'a, T>, StoreError> {
    lock.write().map_err(|_| StoreError::Poisoned(name.to_string()))
}

#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: RwLock<BookingsByDate>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for InMemoryBookingStore {
    fn insert_if_vacant(&self, date: &DateKey, record: BookingRecord) -> Result<(), StoreError> {
        // Check and append under one write guard.
        let mut bookings = write_lock(&self.bookings, "bookings")?;
        let day = bookings.entry(date.key()).or_default();
        if day.iter().any(|existing| existing.slot == record.slot) {
            return Err(StoreError::SlotTaken {
                date: date.key(),
                slot: record.slot,
            });
        }
        debug!("Storing booking for {} at {}", date, record.slot);
        day.push(record);
        Ok(())
    }

    fn booked_slots(&self, date: &DateKey) -> Result<Vec<String>, StoreError> {
        let bookings = read_lock(&self.bookings, "bookings")?;
        Ok(bookings
            .get(&date.key())
            .map(|day| day.iter().map(|record| record.slot.clone()).collect())
            .unwrap_or_default())
    }

    fn all(&self) -> Result<BookingsByDate, StoreError> {
        Ok(read_lock(&self.bookings, "bookings")?.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    overrides: RwLock<OverridesByDate>,
}

impl InMemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideRepository for InMemoryOverrideStore {
    fn merge(&self, date: &DateKey, patch: SlotOverrides) -> Result<SlotOverrides, StoreError> {
        let mut overrides = write_lock(&self.overrides, "overrides")?;
        let day = overrides.entry(date.key()).or_default();
        day.extend(patch);
        Ok(day.clone())
    }

    fn for_date(&self, date: &DateKey) -> Result<SlotOverrides, StoreError> {
        let overrides = read_lock(&self.overrides, "overrides")?;
        Ok(overrides.get(&date.key()).cloned().unwrap_or_default())
    }

    fn all(&self) -> Result<OverridesByDate, StoreError> {
        Ok(read_lock(&self.overrides, "overrides")?.clone())
    }
}
