//! Unit descriptors and breakdown arithmetic
//!
//! A descriptor ties one unit to its table's base unit: either a plain
//! scale factor, or a pair of functions for affine (temperature offset)
//! and clock-carry (hours/minutes/seconds) relationships. The engine
//! derives decompositions from the pair; tables only supply the value
//! mappings.

use serde::{Deserialize, Serialize};

/// How one unit relates to the table's base unit
#[derive(Debug, Clone, Copy)]
pub enum Descriptor {
    /// `quantity_in_unit = factor * base_value`
    Linear(f64),
    /// Function pair mapping unit values to and from base values
    Carry {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

/// Decomposition of a base value through one descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Whole-number component in the unit
    pub decimal: f64,
    /// Signed sub-unit fraction, floor-quantized at the precision scale
    pub fraction: f64,
    /// Leftover base-unit value after removing `decimal`
    pub remainder: f64,
}

/// Relative epsilon under which conversion noise snaps to a whole number
const SNAP_EPSILON: f64 = 1e-12;

impl Descriptor {
    /// Quantity this unit reads from a base value
    pub fn value_of(&self, base_value: f64) -> f64 {
        match self {
            Descriptor::Linear(factor) => factor * base_value,
            Descriptor::Carry { from_base, .. } => from_base(base_value),
        }
    }

    /// Base value seeded from a quantity expressed in this unit
    pub fn seed(&self, quantity: f64) -> f64 {
        match self {
            Descriptor::Linear(factor) => quantity / factor,
            Descriptor::Carry { to_base, .. } => to_base(quantity),
        }
    }

    /// Size of one unit in base units; orders template rendering
    pub fn unit_size(&self) -> f64 {
        match self {
            Descriptor::Linear(factor) => 1.0 / factor,
            Descriptor::Carry { to_base, .. } => to_base(1.0) - to_base(0.0),
        }
    }

    /// Base-unit equivalent of a whole-number quantity in this unit.
    /// The difference form cancels any affine offset.
    fn base_amount(&self, decimal: f64) -> f64 {
        match self {
            Descriptor::Linear(factor) => decimal / factor,
            Descriptor::Carry { to_base, .. } => to_base(decimal) - to_base(0.0),
        }
    }

    /// Decompose a base value at the given precision scale
    pub fn breakdown(&self, base_value: f64, scale: f64) -> Breakdown {
        let value = self.value_of(base_value);
        let (decimal, snapped) = snap_trunc(value);
        let raw_fraction = if snapped { 0.0 } else { value - decimal };
        Breakdown {
            decimal,
            fraction: snap_floor(raw_fraction * scale) / scale,
            remainder: base_value - self.base_amount(decimal),
        }
    }

    /// Scalar conversion of a base value at the given precision scale
    pub(crate) fn convert(&self, base_value: f64, scale: f64) -> f64 {
        match self {
            Descriptor::Linear(_) => round_to(self.value_of(base_value), scale),
            Descriptor::Carry { .. } => {
                let part = self.breakdown(base_value, scale);
                round_to(part.decimal + part.fraction, scale)
            }
        }
    }
}

/// Round half away from zero at the given scale
pub(crate) fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Truncate toward zero, snapping when within conversion noise of a whole
fn snap_trunc(value: f64) -> (f64, bool) {
    let nearest = value.round();
    if (value - nearest).abs() <= nearest.abs().max(1.0) * SNAP_EPSILON {
        (nearest, true)
    } else {
        (value.trunc(), false)
    }
}

/// Floor toward negative infinity, snapping when within conversion noise
fn snap_floor(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= nearest.abs().max(1.0) * SNAP_EPSILON {
        nearest
    } else {
        value.floor()
    }
}
