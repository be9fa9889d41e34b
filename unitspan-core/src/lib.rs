//! UnitSpan Core - Generic unit containers
//!
//! This crate provides the machinery shared by every measurement domain:
//! - `UnitSpan`: An immutable quantity over a static conversion table
//! - `Descriptor` / `ConversionTable`: How units relate to the base unit
//! - `Value`: Conversion results (numbers or rendered templates)
//! - `SpanError`: Structured errors for unknown units and bad arguments
//!
//! Domain crates (time, data size, temperature) wrap `UnitSpan` behind
//! the `Span` trait and supply their own tables.

mod descriptor;
mod error;
mod select;
mod span;
mod table;
mod template;
mod value;

pub use descriptor::{Breakdown, Descriptor};
pub use error::SpanError;
pub use select::{Model, Selection, UnitRef};
pub use span::{Adjuster, RawSpan, Span, UnitSpan, DEFAULT_PRECISION, MAX_PRECISION};
pub use table::{ConversionTable, UnitEntry};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Span, SpanError, UnitSpan, Value};
}
