//! Digital size units over a bit base
//!
//! Binary multiples step by 1024, decimal multiples by 1000. All units
//! are plain factors. Short aliases are case-sensitive: `b` is Bits,
//! `B` is Bytes, `kB` a kilobyte, `KiB` a kibibyte.

use unitspan_core::{ConversionTable, Descriptor, UnitEntry};

pub const BITS_PER_BYTE: f64 = 8.0;
pub const BITS_PER_KIBIBYTE: f64 = 1024.0 * BITS_PER_BYTE;
pub const BITS_PER_MEBIBYTE: f64 = 1024.0 * BITS_PER_KIBIBYTE;
pub const BITS_PER_GIBIBYTE: f64 = 1024.0 * BITS_PER_MEBIBYTE;
pub const BITS_PER_TEBIBYTE: f64 = 1024.0 * BITS_PER_GIBIBYTE;
pub const BITS_PER_KILOBYTE: f64 = 1000.0 * BITS_PER_BYTE;
pub const BITS_PER_MEGABYTE: f64 = 1000.0 * BITS_PER_KILOBYTE;
pub const BITS_PER_GIGABYTE: f64 = 1000.0 * BITS_PER_MEGABYTE;
pub const BITS_PER_TERABYTE: f64 = 1000.0 * BITS_PER_GIGABYTE;

/// Digital size conversion table, base unit Bits
pub static DIGITAL: ConversionTable = ConversionTable {
    units: &[
        UnitEntry {
            name: "Bits",
            descriptor: Descriptor::Linear(1.0),
        },
        UnitEntry {
            name: "Bytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_BYTE),
        },
        UnitEntry {
            name: "Kibibytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_KIBIBYTE),
        },
        UnitEntry {
            name: "Mebibytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_MEBIBYTE),
        },
        UnitEntry {
            name: "Gibibytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_GIBIBYTE),
        },
        UnitEntry {
            name: "Tebibytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_TEBIBYTE),
        },
        UnitEntry {
            name: "Kilobytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_KILOBYTE),
        },
        UnitEntry {
            name: "Megabytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_MEGABYTE),
        },
        UnitEntry {
            name: "Gigabytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_GIGABYTE),
        },
        UnitEntry {
            name: "Terabytes",
            descriptor: Descriptor::Linear(1.0 / BITS_PER_TERABYTE),
        },
    ],
    aliases: &[
        ("bits", "Bits"),
        ("b", "Bits"),
        ("bytes", "Bytes"),
        ("B", "Bytes"),
        ("kibibytes", "Kibibytes"),
        ("KiB", "Kibibytes"),
        ("mebibytes", "Mebibytes"),
        ("MiB", "Mebibytes"),
        ("gibibytes", "Gibibytes"),
        ("GiB", "Gibibytes"),
        ("tebibytes", "Tebibytes"),
        ("TiB", "Tebibytes"),
        ("kilobytes", "Kilobytes"),
        ("kB", "Kilobytes"),
        ("megabytes", "Megabytes"),
        ("MB", "Megabytes"),
        ("gigabytes", "Gigabytes"),
        ("GB", "Gigabytes"),
        ("terabytes", "Terabytes"),
        ("TB", "Terabytes"),
    ],
    widths: &[],
};
