//! The E96 preferred-value series and the lookups built on it.
//!
//! Every standard resistance is a table mantissa times a decade multiplier.
//! This crate provides:
//!
//! - the immutable tables ([`E96`], [`DECADE_MULTIPLIERS`]),
//! - [`decompose`], splitting a value into `mantissa × 10^exponent`,
//! - [`bracket`], finding the nearest standard values around a target,
//! - [`generate_window`], producing runs of consecutive standard values.

mod bracket;
mod decompose;
mod error;
mod table;
mod window;

pub use bracket::{Bracket, bracket};
pub use decompose::{Decomposition, decompose};
pub use error::{SeriesError, Table};
pub use table::{DECADE_MULTIPLIERS, E96, multiplier_for_exponent, nearest_mantissa};
pub use window::{Walk, generate_window};
