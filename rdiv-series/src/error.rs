use std::fmt;

use thiserror::Error;

/// Errors that can occur when working with the preferred-value tables.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// The value cannot be expressed as a standard resistance.
    ///
    /// Raised for zero, negative, non-finite, and subnormal inputs.
    #[error("resistance must be positive, finite, and not subnormal, got {value} Ω")]
    InvalidInput { value: f64 },

    /// A window start is not an exact member of the named table.
    ///
    /// This is a caller contract violation, not a user-facing condition.
    #[error("{value} is not an entry of the {table} table")]
    TableLookupFailure { table: Table, value: f64 },
}

/// Identifies which preferred-value table a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Mantissa,
    Multiplier,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Mantissa => f.write_str("E96 mantissa"),
            Table::Multiplier => f.write_str("decade multiplier"),
        }
    }
}
