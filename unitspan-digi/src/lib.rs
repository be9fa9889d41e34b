//! UnitSpan Digi - Digital size measurement
//!
//! `DigiSpan` holds a data size in bits and converts across binary
//! (1024-step) and decimal (1000-step) byte multiples. `buffer()`
//! allocates zeroed storage of the span's whole-byte size.

mod span;
mod units;

pub use span::DigiSpan;
pub use units::{
    BITS_PER_BYTE, BITS_PER_GIBIBYTE, BITS_PER_GIGABYTE, BITS_PER_KIBIBYTE, BITS_PER_KILOBYTE,
    BITS_PER_MEBIBYTE, BITS_PER_MEGABYTE, BITS_PER_TEBIBYTE, BITS_PER_TERABYTE, DIGITAL,
};
