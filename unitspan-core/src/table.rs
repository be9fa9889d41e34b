//! Static conversion tables
//!
//! A table is defined once as a `static` and read-only thereafter; spans
//! share it by reference. Lookup is case-sensitive, so `Seconds` and
//! `seconds` can coexist (the latter as an alias), as can `b` for Bits
//! and `B` for Bytes.

use crate::{Descriptor, SpanError};

/// One named unit in a conversion table
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    pub name: &'static str,
    pub descriptor: Descriptor,
}

/// Immutable unit registry: canonical units, aliases, template pad widths
#[derive(Debug)]
pub struct ConversionTable {
    /// Canonical units; exactly one entry is `Linear(1.0)` (the base unit)
    pub units: &'static [UnitEntry],
    /// Alternate spellings mapped to canonical names
    pub aliases: &'static [(&'static str, &'static str)],
    /// Zero-pad width per unit for template rendering; absent means none
    pub widths: &'static [(&'static str, usize)],
}

impl ConversionTable {
    /// Resolve a name or alias to its entry
    pub fn resolve(&self, name: &str) -> Result<&UnitEntry, SpanError> {
        if let Some(entry) = self.get(name) {
            return Ok(entry);
        }
        if let Some((_, canonical)) = self.aliases.iter().find(|(alias, _)| *alias == name) {
            if let Some(entry) = self.get(canonical) {
                return Ok(entry);
            }
        }
        Err(SpanError::invalid_unit(name))
    }

    /// Whether a name or alias is present
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Canonical entries in table order
    pub fn entries(&self) -> impl Iterator<Item = &UnitEntry> {
        self.units.iter()
    }

    /// Template pad width for a canonical unit name
    pub fn width(&self, name: &str) -> usize {
        self.widths
            .iter()
            .find(|(unit, _)| *unit == name)
            .map(|(_, width)| *width)
            .unwrap_or(0)
    }

    fn get(&self, name: &str) -> Option<&UnitEntry> {
        self.units.iter().find(|entry| entry.name == name)
    }
}
