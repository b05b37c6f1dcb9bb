//! Daily gate: one spin per local calendar day.
//!
//! DESIGN
//! ======
//! The gate is a thin policy over two seams: a [`RecordStore`] holding the
//! last spin instant (browser `localStorage` in a web page, a JSON file for
//! the CLI) and a [`Clock`]. Days are compared as explicit
//! `(year, month, day)` triples in the clock's local offset, never as a 24h
//! window.
//!
//! ERROR HANDLING
//! ==============
//! A store that cannot be read fails open: the gate reports "no spin today"
//! and logs a warning. Write failures are returned; callers keep the
//! in-session trigger lock either way.

use serde::{Deserialize, Serialize};
use time::{Month, OffsetDateTime, UtcOffset};
use tracing::{info, warn};

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Persisted instant of the most recent successful spin.
///
/// Serialized under the fixed key `lastSpinDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRecord {
    #[serde(rename = "lastSpinDate", with = "time::serde::rfc3339")]
    pub last_spin: OffsetDateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("spin record storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("spin record is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Durable key-value slot for the [`SpinRecord`].
pub trait RecordStore {
    /// Read the stored record. `Ok(None)` when nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be read or holds
    /// something that is not a spin record.
    fn load(&self) -> Result<Option<SpinRecord>, StoreError>;

    /// Overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn save(&mut self, record: &SpinRecord) -> Result<(), StoreError>;
}

/// In-process store; optionally simulates disabled storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Option<SpinRecord>,
    disabled: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(record: SpinRecord) -> Self {
        Self { record: Some(record), disabled: false }
    }

    /// A store whose every read and write fails.
    #[must_use]
    pub fn disabled() -> Self {
        Self { record: None, disabled: true }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.disabled {
            return Err(StoreError::Io(std::io::Error::other("storage disabled")));
        }
        Ok(())
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Option<SpinRecord>, StoreError> {
        self.check_available()?;
        Ok(self.record)
    }

    fn save(&mut self, record: &SpinRecord) -> Result<(), StoreError> {
        self.check_available()?;
        self.record = Some(*record);
        Ok(())
    }
}

/// Source of "now", carrying the local offset used for calendar days.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the local offset, UTC when the offset cannot be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        match OffsetDateTime::now_local() {
            Ok(now) => now,
            Err(e) => {
                warn!(error = %e, "local UTC offset unavailable; using UTC calendar days");
                OffsetDateTime::now_utc()
            }
        }
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// A calendar date in a given offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

impl CalendarDay {
    /// The calendar day `instant` falls on when viewed in `offset`.
    #[must_use]
    pub fn of(instant: OffsetDateTime, offset: UtcOffset) -> Self {
        let local = instant.to_offset(offset);
        Self { year: local.year(), month: local.month(), day: local.day() }
    }
}

/// One-spin-per-day policy over a store and a clock.
#[derive(Debug)]
pub struct DailyGate<S, C> {
    store: S,
    clock: C,
}

impl<S: RecordStore, C: Clock> DailyGate<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Most recent recorded spin, if the store is readable and holds one.
    pub fn last_spin(&self) -> Option<OffsetDateTime> {
        match self.store.load() {
            Ok(record) => record.map(|r| r.last_spin),
            Err(e) => {
                warn!(error = %e, "spin record unreadable; treating as no prior spin");
                None
            }
        }
    }

    /// Whether the stored spin falls on today's local calendar day.
    pub fn has_spun_today(&self) -> bool {
        let Some(last_spin) = self.last_spin() else {
            return false;
        };
        let now = self.clock.now();
        CalendarDay::of(last_spin, now.offset()) == CalendarDay::of(now, now.offset())
    }

    /// Record a spin at the current instant.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StoreError`] when the record cannot be written.
    pub fn set_spin_today(&mut self) -> Result<(), StoreError> {
        let record = SpinRecord { last_spin: self.clock.now() };
        self.store.save(&record)?;
        info!(last_spin = %record.last_spin, "spin recorded for today");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
