//! Unit selection for `to` conversions
//!
//! The callback form hands the caller a `Model` that looks units up
//! explicitly instead of intercepting property access. A `UnitRef`
//! displays as its `{{Name}}` placeholder token, so a reference dropped
//! into a composed string takes the template path while a bare reference
//! resolves straight to a number.

use crate::{ConversionTable, SpanError};

/// Validated reference to a canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRef {
    name: &'static str,
}

impl UnitRef {
    /// Canonical unit name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for UnitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{{{}}}}}", self.name)
    }
}

/// Lookup surface handed to `to_with` callbacks
pub struct Model {
    table: &'static ConversionTable,
}

impl Model {
    pub(crate) fn new(table: &'static ConversionTable) -> Self {
        Model { table }
    }

    /// Reference a unit by name or alias
    pub fn unit(&self, name: &str) -> Result<UnitRef, SpanError> {
        let entry = self.table.resolve(name)?;
        Ok(UnitRef { name: entry.name })
    }
}

/// What a `to` call converts into: a unit reference, or text that is
/// either a unit key or a format template
#[derive(Debug, Clone)]
pub enum Selection {
    Unit(UnitRef),
    Text(String),
}

impl From<UnitRef> for Selection {
    fn from(unit: UnitRef) -> Self {
        Selection::Unit(unit)
    }
}

impl From<&str> for Selection {
    fn from(text: &str) -> Self {
        Selection::Text(text.to_string())
    }
}

impl From<String> for Selection {
    fn from(text: String) -> Self {
        Selection::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConversionTable, Descriptor, UnitEntry};

    static BYTES: ConversionTable = ConversionTable {
        units: &[
            UnitEntry {
                name: "Bits",
                descriptor: Descriptor::Linear(1.0),
            },
            UnitEntry {
                name: "Bytes",
                descriptor: Descriptor::Linear(1.0 / 8.0),
            },
        ],
        aliases: &[("B", "Bytes")],
        widths: &[],
    };

    #[test]
    fn test_unit_ref_displays_as_placeholder() {
        let model = Model::new(&BYTES);
        let bytes = model.unit("Bytes").unwrap();
        assert_eq!(format!("{}", bytes), "{{Bytes}}");
        assert_eq!(format!("{} free", bytes), "{{Bytes}} free");
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let model = Model::new(&BYTES);
        assert_eq!(model.unit("B").unwrap().name(), "Bytes");
    }

    #[test]
    fn test_unknown_unit() {
        let model = Model::new(&BYTES);
        assert!(matches!(model.unit("Nibbles"), Err(SpanError::InvalidUnit(_))));
    }

    #[test]
    fn test_selection_from() {
        assert!(matches!(Selection::from("{{Bits}}"), Selection::Text(_)));
        let model = Model::new(&BYTES);
        let unit = model.unit("Bits").unwrap();
        assert!(matches!(Selection::from(unit), Selection::Unit(_)));
    }
}
