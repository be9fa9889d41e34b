//! Digital size spans

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unitspan_core::{RawSpan, Span, SpanError, UnitSpan, Value};

use crate::units::{BITS_PER_BYTE, BITS_PER_KIBIBYTE, BITS_PER_MEBIBYTE, DIGITAL};

/// A data size convertible across digital units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigiSpan(UnitSpan);

impl DigiSpan {
    pub fn from_bits(quantity: f64) -> Self {
        DigiSpan(UnitSpan::new(&DIGITAL, quantity))
    }

    pub fn from_bytes(quantity: f64) -> Self {
        DigiSpan::from_bits(quantity * BITS_PER_BYTE)
    }

    pub fn from_kibibytes(quantity: f64) -> Self {
        DigiSpan::from_bits(quantity * BITS_PER_KIBIBYTE)
    }

    pub fn from_mebibytes(quantity: f64) -> Self {
        DigiSpan::from_bits(quantity * BITS_PER_MEBIBYTE)
    }

    /// Seed from a quantity in any named table unit
    pub fn from_unit(unit: &str, quantity: f64) -> Result<Self, SpanError> {
        UnitSpan::from_unit(&DIGITAL, unit, quantity).map(DigiSpan)
    }

    /// A zeroed buffer of this span's size in whole bytes.
    ///
    /// The byte count is the rounded conversion floored; sizes below one
    /// byte (including negative spans) allocate nothing.
    pub fn buffer(&self) -> Vec<u8> {
        match self.to("Bytes") {
            Ok(Value::Number(bytes)) if bytes > 0.0 => vec![0u8; bytes.floor() as usize],
            _ => Vec::new(),
        }
    }
}

impl Span for DigiSpan {
    fn as_unit_span(&self) -> &UnitSpan {
        &self.0
    }

    fn from_unit_span(span: UnitSpan) -> Self {
        DigiSpan(span)
    }
}

impl Serialize for DigiSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DigiSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSpan::deserialize(deserializer)?;
        UnitSpan::with_precision(&DIGITAL, raw.value, raw.precision)
            .map(DigiSpan)
            .map_err(D::Error::custom)
    }
}
