//! Time spans
//!
//! A `TimeSpan` is a signed duration held in nanoseconds. Differential
//! constructors (`between`, `since`, `until`, `since_epoch`) measure
//! wall-clock distances through `SystemTime`; the `from_*` family seeds
//! from a quantity in one unit.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unitspan_core::{RawSpan, Span, SpanError, UnitSpan};

use crate::units::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICROSECOND, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE,
    NANOS_PER_MONTH, NANOS_PER_SECOND, NANOS_PER_WEEK, NANOS_PER_YEAR, TIME,
};

/// A duration convertible across time units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan(UnitSpan);

impl TimeSpan {
    // ========== Differential constructors ==========

    /// Span from `end` to `start`; negative when `start` is earlier
    pub fn between(start: SystemTime, end: SystemTime) -> Self {
        TimeSpan::from_milliseconds(signed_millis(start, end))
    }

    /// Span from a past (or future) instant to now
    pub fn since(earlier: SystemTime) -> Self {
        TimeSpan::between(SystemTime::now(), earlier)
    }

    /// Span from now to a future (or past) instant
    pub fn until(later: SystemTime) -> Self {
        TimeSpan::between(later, SystemTime::now())
    }

    /// Span since January 1st, 1970 00:00:00 UTC
    pub fn since_epoch() -> Self {
        TimeSpan::since(UNIX_EPOCH)
    }

    // ========== Quantity constructors ==========

    pub fn from_nanoseconds(quantity: f64) -> Self {
        TimeSpan(UnitSpan::new(&TIME, quantity))
    }

    pub fn from_microseconds(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_MICROSECOND)
    }

    pub fn from_milliseconds(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_MILLISECOND)
    }

    pub fn from_seconds(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_SECOND)
    }

    pub fn from_minutes(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_MINUTE)
    }

    pub fn from_hours(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_HOUR)
    }

    pub fn from_days(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_DAY)
    }

    pub fn from_weeks(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_WEEK)
    }

    pub fn from_months(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_MONTH)
    }

    pub fn from_years(quantity: f64) -> Self {
        TimeSpan::from_nanoseconds(quantity * NANOS_PER_YEAR)
    }

    /// Seed from a quantity in any named table unit
    pub fn from_unit(unit: &str, quantity: f64) -> Result<Self, SpanError> {
        UnitSpan::from_unit(&TIME, unit, quantity).map(TimeSpan)
    }

    // ========== std interop ==========

    pub fn from_duration(duration: Duration) -> Self {
        TimeSpan::from_nanoseconds(duration.as_nanos() as f64)
    }

    /// The span as a `Duration`; `None` for negative or non-finite spans
    pub fn as_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.0.base_value() / NANOS_PER_SECOND).ok()
    }
}

impl Span for TimeSpan {
    fn as_unit_span(&self) -> &UnitSpan {
        &self.0
    }

    fn from_unit_span(span: UnitSpan) -> Self {
        TimeSpan(span)
    }
}

impl Serialize for TimeSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSpan::deserialize(deserializer)?;
        UnitSpan::with_precision(&TIME, raw.value, raw.precision)
            .map(TimeSpan)
            .map_err(D::Error::custom)
    }
}

fn signed_millis(start: SystemTime, end: SystemTime) -> f64 {
    match start.duration_since(end) {
        Ok(forward) => forward.as_secs_f64() * 1e3,
        Err(backward) => -backward.duration().as_secs_f64() * 1e3,
    }
}
