//! UnitSpan Time - Duration measurement
//!
//! `TimeSpan` holds a signed duration in nanoseconds and converts across
//! clock and calendar units. Beyond conversion it bridges `SystemTime`/
//! `Duration` and drives tokio timers (`timeout`, `interval`, `delay`).

mod span;
mod timer;
mod units;

pub use span::TimeSpan;
pub use timer::{IntervalHandle, TimeoutController};
pub use units::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICROSECOND, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE,
    NANOS_PER_MONTH, NANOS_PER_SECOND, NANOS_PER_WEEK, NANOS_PER_YEAR, TIME,
};
