//! The generic span container
//!
//! `UnitSpan` stores a quantity in its table's base unit. All operations
//! are queries or copy-producing transforms: `add`/`sub`/`precision`
//! return a new span and never touch the receiver, so existing spans can
//! be read concurrently without locking.

use serde::{Deserialize, Serialize};

use crate::template::{parse_template, Segment};
use crate::{ConversionTable, Descriptor, Model, Selection, SpanError, UnitEntry, Value};

/// Decimal digits retained by conversions unless configured otherwise
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest accepted precision; f64 carries no meaning past this many digits
pub const MAX_PRECISION: u32 = 15;

/// Generic unit-of-measure container over a static conversion table
#[derive(Debug, Clone, Copy)]
pub struct UnitSpan {
    table: &'static ConversionTable,
    base_value: f64,
    digits: u32,
    scale: f64,
}

impl UnitSpan {
    /// New span at the default precision
    pub fn new(table: &'static ConversionTable, base_value: f64) -> Self {
        UnitSpan {
            table,
            base_value,
            digits: DEFAULT_PRECISION,
            scale: 10f64.powi(DEFAULT_PRECISION as i32),
        }
    }

    /// New span with an explicit precision
    pub fn with_precision(
        table: &'static ConversionTable,
        base_value: f64,
        digits: u32,
    ) -> Result<Self, SpanError> {
        UnitSpan::new(table, base_value).precision(digits)
    }

    /// New span seeded from a quantity in a named unit
    pub fn from_unit(
        table: &'static ConversionTable,
        unit: &str,
        quantity: f64,
    ) -> Result<Self, SpanError> {
        let entry = table.resolve(unit)?;
        Ok(UnitSpan::new(table, entry.descriptor.seed(quantity)))
    }

    /// Quantity in the table's base unit
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Decimal digits retained by conversions
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// The conversion table this span reads
    pub fn table(&self) -> &'static ConversionTable {
        self.table
    }

    // ========== Transforms (copy-producing, receiver untouched) ==========

    /// New span adjusted upward by the quantities applied in the callback
    pub fn add<F>(&self, adjust: F) -> Result<Self, SpanError>
    where
        F: FnOnce(&mut Adjuster<'_>) -> Result<(), SpanError>,
    {
        self.shift(1.0, adjust)
    }

    /// New span adjusted downward by the quantities applied in the callback
    pub fn sub<F>(&self, adjust: F) -> Result<Self, SpanError>
    where
        F: FnOnce(&mut Adjuster<'_>) -> Result<(), SpanError>,
    {
        self.shift(-1.0, adjust)
    }

    fn shift<F>(&self, direction: f64, adjust: F) -> Result<Self, SpanError>
    where
        F: FnOnce(&mut Adjuster<'_>) -> Result<(), SpanError>,
    {
        let mut pending = self.base_value;
        let mut adjuster = Adjuster {
            table: self.table,
            pending: &mut pending,
            direction,
        };
        adjust(&mut adjuster)?;
        Ok(UnitSpan {
            base_value: pending,
            ..*self
        })
    }

    /// New span with a different rounding precision
    pub fn precision(&self, digits: u32) -> Result<Self, SpanError> {
        if digits > MAX_PRECISION {
            return Err(SpanError::invalid_argument(format!(
                "precision {} exceeds maximum {}",
                digits, MAX_PRECISION
            )));
        }
        Ok(UnitSpan {
            digits,
            scale: 10f64.powi(digits as i32),
            ..*self
        })
    }

    // ========== Conversions ==========

    /// Convert by unit key or format template.
    ///
    /// Text naming a table key (or alias) yields the rounded quantity in
    /// that unit. Any other text is treated as a template: `{{UnitName}}`
    /// placeholders render as zero-padded whole components from largest to
    /// smallest referenced unit, with the remainder carried down; text
    /// without placeholders passes through unchanged.
    pub fn to<S>(&self, selector: S) -> Result<Value, SpanError>
    where
        S: Into<Selection>,
    {
        match selector.into() {
            Selection::Unit(unit) => {
                let entry = self.table.resolve(unit.name())?;
                Ok(Value::Number(self.convert_entry(entry)))
            }
            Selection::Text(text) => self.resolve_text(&text),
        }
    }

    /// Convert through a model callback, e.g.
    /// `span.to_with(|m| m.unit("Seconds"))` or
    /// `span.to_with(|m| Ok(format!("{}:{}", m.unit("h")?, m.unit("min")?)))`
    pub fn to_with<F, S>(&self, select: F) -> Result<Value, SpanError>
    where
        F: FnOnce(&Model) -> Result<S, SpanError>,
        S: Into<Selection>,
    {
        let model = Model::new(self.table);
        let selection = select(&model)?;
        self.to(selection)
    }

    /// Quantity in every canonical unit, in table order
    pub fn conversions(&self) -> Vec<(&'static str, f64)> {
        self.table
            .entries()
            .map(|entry| (entry.name, self.convert_entry(entry)))
            .collect()
    }

    fn convert_entry(&self, entry: &UnitEntry) -> f64 {
        entry.descriptor.convert(self.base_value, self.scale)
    }

    fn resolve_text(&self, text: &str) -> Result<Value, SpanError> {
        if let Ok(entry) = self.table.resolve(text) {
            return Ok(Value::Number(self.convert_entry(entry)));
        }

        let segments = parse_template(text);
        let placeholders: Vec<&str> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(*name),
                Segment::Literal(_) => None,
            })
            .collect();

        if placeholders.is_empty() {
            return Ok(Value::Text(text.to_string()));
        }
        if segments.len() == 1 && placeholders.len() == 1 {
            // a lone placeholder is the key form in disguise
            let entry = self.table.resolve(placeholders[0])?;
            return Ok(Value::Number(self.convert_entry(entry)));
        }
        self.render(&segments, &placeholders)
    }

    fn render(&self, segments: &[Segment<'_>], placeholders: &[&str]) -> Result<Value, SpanError> {
        let mut referenced: Vec<&UnitEntry> = Vec::with_capacity(placeholders.len());
        for name in placeholders {
            let entry = self.table.resolve(name)?;
            if !referenced.iter().any(|seen| std::ptr::eq(*seen, entry)) {
                referenced.push(entry);
            }
        }
        referenced.sort_by(|a, b| b.descriptor.unit_size().total_cmp(&a.descriptor.unit_size()));

        // walk largest to smallest, carrying the remainder; skipped table
        // units keep their share
        let mut rendered: Vec<(&str, String)> = Vec::with_capacity(referenced.len());
        let mut remaining = self.base_value;
        for entry in referenced {
            let part = entry.descriptor.breakdown(remaining, self.scale);
            remaining = part.remainder;
            rendered.push((entry.name, pad_decimal(part.decimal, self.table.width(entry.name))));
        }

        let mut out = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let canonical = self.table.resolve(name)?.name;
                    if let Some((_, text)) = rendered.iter().find(|(unit, _)| *unit == canonical) {
                        out.push_str(text);
                    }
                }
            }
        }
        Ok(Value::Text(out))
    }
}

impl PartialEq for UnitSpan {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table)
            && self.base_value == other.base_value
            && self.digits == other.digits
    }
}

fn pad_decimal(decimal: f64, width: usize) -> String {
    format!("{:0width$}", decimal as i64, width = width)
}

/// Capability object handed to `add`/`sub` callbacks
///
/// Each `apply` adjusts the pending value by a quantity expressed in any
/// table unit; calls compose sequentially, each seeing prior effects.
pub struct Adjuster<'a> {
    table: &'static ConversionTable,
    pending: &'a mut f64,
    direction: f64,
}

impl Adjuster<'_> {
    /// Adjust the pending value by `quantity` expressed in `unit`
    pub fn apply(&mut self, unit: &str, quantity: f64) -> Result<(), SpanError> {
        let entry = self.table.resolve(unit)?;
        match entry.descriptor {
            Descriptor::Linear(factor) => {
                *self.pending += self.direction * quantity / factor;
            }
            Descriptor::Carry { to_base, from_base } => {
                *self.pending = to_base(from_base(*self.pending) + self.direction * quantity);
            }
        }
        Ok(())
    }
}

/// Serialized form of a span: base value plus precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    pub value: f64,
    pub precision: u32,
}

/// Concrete span types over a fixed table.
///
/// Supplying the two factory methods gives a domain type the full
/// copy-on-write operation surface with its own concrete return type: a
/// time-span adjustment yields a time-span.
pub trait Span: Sized {
    fn as_unit_span(&self) -> &UnitSpan;
    fn from_unit_span(span: UnitSpan) -> Self;

    fn add<F>(&self, adjust: F) -> Result<Self, SpanError>
    where
        F: FnOnce(&mut Adjuster<'_>) -> Result<(), SpanError>,
    {
        Ok(Self::from_unit_span(self.as_unit_span().add(adjust)?))
    }

    fn sub<F>(&self, adjust: F) -> Result<Self, SpanError>
    where
        F: FnOnce(&mut Adjuster<'_>) -> Result<(), SpanError>,
    {
        Ok(Self::from_unit_span(self.as_unit_span().sub(adjust)?))
    }

    fn to<S>(&self, selector: S) -> Result<Value, SpanError>
    where
        S: Into<Selection>,
    {
        self.as_unit_span().to(selector)
    }

    fn to_with<F, S>(&self, select: F) -> Result<Value, SpanError>
    where
        F: FnOnce(&Model) -> Result<S, SpanError>,
        S: Into<Selection>,
    {
        self.as_unit_span().to_with(select)
    }

    fn precision(&self, digits: u32) -> Result<Self, SpanError> {
        Ok(Self::from_unit_span(self.as_unit_span().precision(digits)?))
    }

    fn conversions(&self) -> Vec<(&'static str, f64)> {
        self.as_unit_span().conversions()
    }

    fn base_value(&self) -> f64 {
        self.as_unit_span().base_value()
    }

    fn digits(&self) -> u32 {
        self.as_unit_span().digits()
    }

    fn to_raw(&self) -> RawSpan {
        RawSpan {
            value: self.base_value(),
            precision: self.digits(),
        }
    }
}
