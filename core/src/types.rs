//! Shared primitive types and constants used across the crate.

use std::time::Duration;

/// Annual revenue in whole currency units. Sub-units are ignored.
pub type Amount = u64;

/// Identifies one repeating timer. Never reused within a process.
pub type TimerId = u64;

/// Number of accrual ticks applied since the last start.
pub type TickCount = u64;

/// The canonical session identifier.
pub type SessionId = String;

pub const DAYS_PER_YEAR: f64 = 365.25;
pub const HOURS_PER_YEAR: f64 = DAYS_PER_YEAR * 24.0;
pub const MINUTES_PER_YEAR: f64 = HOURS_PER_YEAR * 60.0;
pub const SECONDS_PER_YEAR: f64 = MINUTES_PER_YEAR * 60.0;

/// Wall-clock cadence of the accrual timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
