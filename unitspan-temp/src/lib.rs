//! UnitSpan Temp - Temperature measurement
//!
//! `TempSpan` holds an absolute temperature in kelvins. Celsius and
//! Fahrenheit are affine mappings, so `add`/`sub` move by degree steps
//! while conversions report absolute readings.

mod span;
mod units;

pub use span::TempSpan;
pub use units::TEMPERATURE;
