//! UnitSpan - Unit-of-measure spans
//!
//! One engine, three measurement domains:
//! - `TimeSpan`: durations over a nanosecond base, with tokio timers
//! - `DigiSpan`: data sizes over a bit base, with buffer allocation
//! - `TempSpan`: temperatures over a Kelvin base
//!
//! Every span is an immutable value: `add`, `sub` and `precision`
//! return new spans, `to` converts by unit name or renders a
//! `{{UnitName}}` template.
//!
//! ```
//! use unitspan::prelude::*;
//!
//! # fn main() -> Result<(), SpanError> {
//! let brew = TimeSpan::from_minutes(3.5);
//! assert_eq!(brew.to("Seconds")?, 210.0);
//! assert_eq!(brew.to("{{Minutes}}:{{Seconds}}")?, "03:30");
//! # Ok(())
//! # }
//! ```

pub use unitspan_core::{
    Adjuster, Breakdown, ConversionTable, Descriptor, Model, RawSpan, Selection, Span, SpanError,
    UnitEntry, UnitRef, UnitSpan, Value, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use unitspan_digi::DigiSpan;
pub use unitspan_temp::TempSpan;
pub use unitspan_time::{IntervalHandle, TimeSpan, TimeoutController};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DigiSpan, Span, SpanError, TempSpan, TimeSpan, Value};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_linear_round_trip() {
            assert_eq!(DigiSpan::from_bits(12.0).to("Bytes").unwrap(), 1.5);
            assert_eq!(TimeSpan::from_seconds(90.0).to("Minutes").unwrap(), 1.5);
        }

        #[test]
        fn test_to_is_idempotent() {
            let span = TimeSpan::from_minutes(5.5);
            let first = span.to("Hours").unwrap();
            let second = span.to("Hours").unwrap();
            assert_eq!(first, second);
            assert_eq!(first, 0.09166);
        }

        #[test]
        fn test_affine_temperature() {
            let boiling = TempSpan::from_fahrenheit(212.0);
            assert_eq!(boiling.to("Celsius").unwrap(), 100.0);
            assert_eq!(boiling.to("Kelvin").unwrap(), 373.15);
        }

        #[test]
        fn test_crossover_point_spans_are_equal() {
            // -40 degrees reads the same on both scales
            assert_eq!(TempSpan::from_fahrenheit(-40.0), TempSpan::from_celsius(-40.0));
            assert_eq!(TempSpan::from_celsius(-40.0).to("Fahrenheit").unwrap(), -40.0);
        }

        #[test]
        fn test_precision_rounds() {
            let span = TimeSpan::from_seconds(2.5);
            assert_eq!(span.precision(0).unwrap().to("Seconds").unwrap(), 2.0);
            let size = DigiSpan::from_unit("GiB", 1.0).unwrap();
            assert_eq!(size.precision(2).unwrap().to("Gigabytes").unwrap(), 1.07);
        }

        #[test]
        fn test_conversions_snapshot() {
            let all = TempSpan::from_celsius(100.0).conversions();
            assert_eq!(
                all,
                vec![("Kelvin", 373.15), ("Fahrenheit", 212.0), ("Celsius", 100.0)]
            );
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_add_milliseconds() {
            let span = TimeSpan::from_seconds(2.0)
                .add(|units| units.apply("Milliseconds", 500.0))
                .unwrap();
            assert_eq!(span.to("Seconds").unwrap(), 2.5);
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
        }

        #[test]
        fn test_cloning_independence() {
            let a = TimeSpan::from_seconds(2.0);
            let b = a.sub(|units| units.apply("Seconds", 1.0)).unwrap();
            assert_eq!(a.to("Seconds").unwrap(), 2.0);
            assert_eq!(b.to("Seconds").unwrap(), 1.0);
        }

        #[test]
        fn test_capability_composes_sequentially() {
            let span = TimeSpan::from_seconds(2.0)
                .add(|units| {
                    units.apply("Seconds", 1.0)?;
                    units.apply("Minutes", 1.0)
                })
                .unwrap();
            assert_eq!(span.to("Seconds").unwrap(), 63.0);
        }
    }

    mod template_tests {
        use super::*;

        #[test]
        fn test_clock_rendering() {
            let template = "{{Hours}}:{{Minutes}}:{{Seconds}}.{{Milliseconds}}";
            assert_eq!(
                TimeSpan::from_seconds(2.5).to(template).unwrap(),
                "00:00:02.500"
            );
            assert_eq!(
                TimeSpan::from_hours(2.5).to(template).unwrap(),
                "02:30:00.000"
            );
        }

        #[test]
        fn test_model_callback_composes_template() {
            let out = TimeSpan::from_minutes(90.0)
                .to_with(|m| Ok(format!("{}:{}", m.unit("Hours")?, m.unit("Minutes")?)))
                .unwrap();
            assert_eq!(out, "01:30");
        }

        #[test]
        fn test_unpadded_domain_renders_bare() {
            // no formatter table in the digital domain
            let out = DigiSpan::from_kibibytes(1.5)
                .to("{{Kibibytes}} KiB and {{Bytes}} B")
                .unwrap();
            assert_eq!(out, "1 KiB and 512 B");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_unknown_capability_unit() {
            let err = TimeSpan::from_seconds(1.0)
                .add(|units| units.apply("Parsecs", 1.0))
                .unwrap_err();
            assert_eq!(err, SpanError::InvalidUnit("Parsecs".to_string()));
        }

        #[test]
        fn test_unknown_template_unit() {
            let err = TimeSpan::from_seconds(1.0)
                .to("{{Parsecs}} to go")
                .unwrap_err();
            assert_eq!(err, SpanError::InvalidUnit("Parsecs".to_string()));
        }

        #[test]
        fn test_unknown_model_unit() {
            let err = TimeSpan::from_seconds(1.0)
                .to_with(|m| m.unit("Parsecs"))
                .unwrap_err();
            assert!(matches!(err, SpanError::InvalidUnit(_)));
        }

        #[test]
        fn test_precision_out_of_range() {
            let err = TimeSpan::from_seconds(1.0).precision(16).unwrap_err();
            assert!(matches!(err, SpanError::InvalidArgument(_)));
            assert!(err.to_string().contains("precision"));
        }

        #[test]
        fn test_error_display() {
            let err = SpanError::InvalidUnit("Parsecs".to_string());
            assert_eq!(err.to_string(), "unknown unit: Parsecs");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_time_span_round_trip() {
            let span = TimeSpan::from_minutes(5.5).precision(7).unwrap();
            let json = serde_json::to_string(&span).unwrap();
            let back: TimeSpan = serde_json::from_str(&json).unwrap();
            assert_eq!(back, span);
            assert_eq!(back.to("Minutes").unwrap(), 5.5);
        }

        #[test]
        fn test_value_tagged_representation() {
            let number = TimeSpan::from_seconds(2.5).to("Seconds").unwrap();
            assert_eq!(
                serde_json::to_string(&number).unwrap(),
                r#"{"type":"Number","value":2.5}"#
            );
            let text = TimeSpan::from_seconds(2.5).to("{{Minutes}}:{{Seconds}}").unwrap();
            assert_eq!(
                serde_json::to_string(&text).unwrap(),
                r#"{"type":"Text","value":"00:02"}"#
            );
        }

        #[test]
        fn test_raw_span_bridge() {
            let raw = TimeSpan::from_seconds(1.0).to_raw();
            assert_eq!(
                raw,
                RawSpan {
                    value: 1e9,
                    precision: DEFAULT_PRECISION
                }
            );
        }
    }

    mod prelude_tests {
        use crate::prelude::*;

        #[test]
        fn test_prelude_covers_common_surface() {
            let span: Result<Value, SpanError> = TimeSpan::from_seconds(1.0).to("Seconds");
            assert_eq!(span.unwrap(), 1.0);
            assert_eq!(DigiSpan::from_bytes(2.0).to("b").unwrap(), 16.0);
            assert_eq!(TempSpan::from_celsius(0.0).to("K").unwrap(), 273.15);
        }
    }
}
