//! Duration units over a nanosecond base
//!
//! Hours down through Milliseconds are carry units so clock templates
//! decompose them; the calendar units above and the sub-millisecond
//! units below are plain factors. Months use the 30.437-day civil
//! average, years the 365.2425-day Gregorian mean.

use unitspan_core::{ConversionTable, Descriptor, UnitEntry};

pub const NANOS_PER_MICROSECOND: f64 = 1e3;
pub const NANOS_PER_MILLISECOND: f64 = 1e6;
pub const NANOS_PER_SECOND: f64 = 1e9;
pub const NANOS_PER_MINUTE: f64 = 60.0 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MINUTE;
pub const NANOS_PER_DAY: f64 = 24.0 * NANOS_PER_HOUR;
pub const NANOS_PER_WEEK: f64 = 7.0 * NANOS_PER_DAY;
pub const NANOS_PER_MONTH: f64 = 30.437 * NANOS_PER_DAY;
pub const NANOS_PER_YEAR: f64 = 365.2425 * NANOS_PER_DAY;

fn milliseconds_to_nanos(quantity: f64) -> f64 {
    quantity * NANOS_PER_MILLISECOND
}

fn nanos_to_milliseconds(base: f64) -> f64 {
    base / NANOS_PER_MILLISECOND
}

fn seconds_to_nanos(quantity: f64) -> f64 {
    quantity * NANOS_PER_SECOND
}

fn nanos_to_seconds(base: f64) -> f64 {
    base / NANOS_PER_SECOND
}

fn minutes_to_nanos(quantity: f64) -> f64 {
    quantity * NANOS_PER_MINUTE
}

fn nanos_to_minutes(base: f64) -> f64 {
    base / NANOS_PER_MINUTE
}

fn hours_to_nanos(quantity: f64) -> f64 {
    quantity * NANOS_PER_HOUR
}

fn nanos_to_hours(base: f64) -> f64 {
    base / NANOS_PER_HOUR
}

/// Duration conversion table, base unit Nanoseconds
pub static TIME: ConversionTable = ConversionTable {
    units: &[
        UnitEntry {
            name: "Nanoseconds",
            descriptor: Descriptor::Linear(1.0),
        },
        UnitEntry {
            name: "Microseconds",
            descriptor: Descriptor::Linear(1.0 / NANOS_PER_MICROSECOND),
        },
        UnitEntry {
            name: "Milliseconds",
            descriptor: Descriptor::Carry {
                to_base: milliseconds_to_nanos,
                from_base: nanos_to_milliseconds,
            },
        },
        UnitEntry {
            name: "Seconds",
            descriptor: Descriptor::Carry {
                to_base: seconds_to_nanos,
                from_base: nanos_to_seconds,
            },
        },
        UnitEntry {
            name: "Minutes",
            descriptor: Descriptor::Carry {
                to_base: minutes_to_nanos,
                from_base: nanos_to_minutes,
            },
        },
        UnitEntry {
            name: "Hours",
            descriptor: Descriptor::Carry {
                to_base: hours_to_nanos,
                from_base: nanos_to_hours,
            },
        },
        UnitEntry {
            name: "Days",
            descriptor: Descriptor::Linear(1.0 / NANOS_PER_DAY),
        },
        UnitEntry {
            name: "Weeks",
            descriptor: Descriptor::Linear(1.0 / NANOS_PER_WEEK),
        },
        UnitEntry {
            name: "Months",
            descriptor: Descriptor::Linear(1.0 / NANOS_PER_MONTH),
        },
        UnitEntry {
            name: "Years",
            descriptor: Descriptor::Linear(1.0 / NANOS_PER_YEAR),
        },
    ],
    aliases: &[
        ("nanoseconds", "Nanoseconds"),
        ("ns", "Nanoseconds"),
        ("microseconds", "Microseconds"),
        ("us", "Microseconds"),
        ("milliseconds", "Milliseconds"),
        ("ms", "Milliseconds"),
        ("seconds", "Seconds"),
        ("s", "Seconds"),
        ("minutes", "Minutes"),
        ("min", "Minutes"),
        ("hours", "Hours"),
        ("h", "Hours"),
        ("days", "Days"),
        ("d", "Days"),
        ("weeks", "Weeks"),
        ("w", "Weeks"),
        ("months", "Months"),
        ("mo", "Months"),
        ("years", "Years"),
        ("y", "Years"),
    ],
    widths: &[
        ("Days", 2),
        ("Hours", 2),
        ("Minutes", 2),
        ("Seconds", 2),
        ("Milliseconds", 3),
        ("Microseconds", 3),
        ("Nanoseconds", 3),
    ],
};
