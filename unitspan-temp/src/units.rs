//! Temperature units over a Kelvin base
//!
//! Celsius and Fahrenheit are affine, so they are carry pairs rather
//! than factors; adding ten Celsius degrees shifts the base by ten
//! kelvins, not by a scaled absolute reading.

use unitspan_core::{ConversionTable, Descriptor, UnitEntry};

pub(crate) fn celsius_to_kelvin(quantity: f64) -> f64 {
    quantity + 273.15
}

pub(crate) fn kelvin_to_celsius(base: f64) -> f64 {
    base - 273.15
}

pub(crate) fn fahrenheit_to_kelvin(quantity: f64) -> f64 {
    (quantity - 32.0) * 5.0 / 9.0 + 273.15
}

pub(crate) fn kelvin_to_fahrenheit(base: f64) -> f64 {
    (base - 273.15) * 9.0 / 5.0 + 32.0
}

/// Temperature conversion table, base unit Kelvin
pub static TEMPERATURE: ConversionTable = ConversionTable {
    units: &[
        UnitEntry {
            name: "Kelvin",
            descriptor: Descriptor::Linear(1.0),
        },
        UnitEntry {
            name: "Fahrenheit",
            descriptor: Descriptor::Carry {
                to_base: fahrenheit_to_kelvin,
                from_base: kelvin_to_fahrenheit,
            },
        },
        UnitEntry {
            name: "Celsius",
            descriptor: Descriptor::Carry {
                to_base: celsius_to_kelvin,
                from_base: kelvin_to_celsius,
            },
        },
    ],
    aliases: &[
        ("kelvin", "Kelvin"),
        ("K", "Kelvin"),
        ("fahrenheit", "Fahrenheit"),
        ("F", "Fahrenheit"),
        ("celsius", "Celsius"),
        ("C", "Celsius"),
    ],
    widths: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(celsius_to_kelvin(100.0), 373.15);
        assert_eq!(kelvin_to_celsius(0.0), -273.15);
        assert_eq!(fahrenheit_to_kelvin(212.0), 373.15);
        assert_eq!(fahrenheit_to_kelvin(98.6), 310.15);
        // raw pair carries float noise; the engine snaps it during convert
        assert!(kelvin_to_fahrenheit(fahrenheit_to_kelvin(0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(TEMPERATURE.resolve("K").unwrap().name, "Kelvin");
        assert_eq!(TEMPERATURE.resolve("C").unwrap().name, "Celsius");
        assert_eq!(TEMPERATURE.resolve("F").unwrap().name, "Fahrenheit");
        assert!(TEMPERATURE.resolve("Rankine").is_err());
    }
}
