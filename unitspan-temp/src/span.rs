//! Temperature spans

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unitspan_core::{RawSpan, Span, SpanError, UnitSpan};

use crate::units::{celsius_to_kelvin, fahrenheit_to_kelvin, TEMPERATURE};

/// A temperature convertible across Kelvin, Celsius and Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempSpan(UnitSpan);

impl TempSpan {
    pub fn from_kelvin(quantity: f64) -> Self {
        TempSpan(UnitSpan::new(&TEMPERATURE, quantity))
    }

    pub fn from_celsius(quantity: f64) -> Self {
        TempSpan::from_kelvin(celsius_to_kelvin(quantity))
    }

    pub fn from_fahrenheit(quantity: f64) -> Self {
        TempSpan::from_kelvin(fahrenheit_to_kelvin(quantity))
    }

    /// Seed from a reading in any named table unit
    pub fn from_unit(unit: &str, quantity: f64) -> Result<Self, SpanError> {
        UnitSpan::from_unit(&TEMPERATURE, unit, quantity).map(TempSpan)
    }
}

impl Span for TempSpan {
    fn as_unit_span(&self) -> &UnitSpan {
        &self.0
    }

    fn from_unit_span(span: UnitSpan) -> Self {
        TempSpan(span)
    }
}

impl Serialize for TempSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TempSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSpan::deserialize(deserializer)?;
        UnitSpan::with_precision(&TEMPERATURE, raw.value, raw.precision)
            .map(TempSpan)
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boiling_point() {
        let span = TempSpan::from_fahrenheit(212.0);
        assert_eq!(span.base_value(), 373.15);
        assert_eq!(span.to("Fahrenheit").unwrap(), 212.0);
        assert_eq!(span.to("Celsius").unwrap(), 100.0);
        assert_eq!(span.to("Kelvin").unwrap(), 373.15);
    }

    #[test]
    fn test_celsius_agrees_with_fahrenheit() {
        let span = TempSpan::from_celsius(100.0);
        assert_eq!(span.base_value(), 373.15);
        assert_eq!(span.to("Kelvin").unwrap(), 373.15);
        assert_eq!(span.to("Fahrenheit").unwrap(), 212.0);
    }

    #[test]
    fn test_absolute_zero() {
        let span = TempSpan::from_kelvin(0.0);
        assert_eq!(span.to("Celsius").unwrap(), -273.15);
        assert_eq!(span.to("Fahrenheit").unwrap(), -459.67);
    }

    #[test]
    fn test_body_temperature() {
        let span = TempSpan::from_fahrenheit(98.6);
        assert_eq!(span.base_value(), 310.15);
        assert_eq!(span.to("Celsius").unwrap(), 37.0);
        assert_eq!(span.precision(2).unwrap().to("Celsius").unwrap(), 37.0);
    }

    #[test]
    fn test_sub_in_fahrenheit_degrees() {
        // dropping 212 F-degrees from boiling lands on 0 F
        let span = TempSpan::from_fahrenheit(212.0)
            .sub(|units| units.apply("Fahrenheit", 212.0))
            .unwrap();
        assert_eq!(span.base_value(), 255.3722222222222);
        assert_eq!(span.to("Fahrenheit").unwrap(), 0.0);
        assert_eq!(span.to("Celsius").unwrap(), -17.77778);
        assert_eq!(span.to("Kelvin").unwrap(), 255.37222);
    }

    #[test]
    fn test_add_in_celsius_degrees() {
        let span = TempSpan::from_fahrenheit(0.0)
            .add(|units| units.apply("Celsius", 100.0))
            .unwrap();
        assert_eq!(span.to("Fahrenheit").unwrap(), 180.0);
        assert_eq!(span.to("Celsius").unwrap(), 82.22222);
        assert_eq!(span.to("Kelvin").unwrap(), 355.37222);
    }

    #[test]
    fn test_kelvin_chain() {
        let span = TempSpan::from_kelvin(0.0)
            .add(|units| units.apply("Kelvin", 10.0))
            .unwrap()
            .add(|units| units.apply("Kelvin", 42.0))
            .unwrap()
            .sub(|units| units.apply("Kelvin", 3.0))
            .unwrap();
        assert_eq!(span.to("Kelvin").unwrap(), 49.0);
        assert_eq!(span.to("Fahrenheit").unwrap(), -371.47);
        assert_eq!(span.to("Celsius").unwrap(), -224.15);
    }

    #[test]
    fn test_from_unit_aliases() {
        let span = TempSpan::from_unit("C", 100.0).unwrap();
        assert_eq!(span.to("K").unwrap(), 373.15);
        assert!(TempSpan::from_unit("Rankine", 0.0).is_err());
    }

    #[test]
    fn test_receiver_untouched() {
        let span = TempSpan::from_celsius(20.0);
        let _ = span.add(|units| units.apply("Celsius", 5.0)).unwrap();
        assert_eq!(span.to("Celsius").unwrap(), 20.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let span = TempSpan::from_celsius(21.5);
        let json = serde_json::to_string(&span).unwrap();
        let back: TempSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
