use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use crate::{
    SeriesError,
    decompose::{Decomposition, decompose},
    table::{E96, power_of_ten},
};

/// Relative tolerance for treating a mantissa as an exact table entry.
///
/// Standard values built as `mantissa × multiplier` do not always decompose
/// back to the bit-identical table mantissa.
const MATCH_TOLERANCE: f64 = 1e-9;

/// The standard values nearest to a target resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// The target is itself a standard value.
    Exact(ElectricalResistance),
    /// The target lies strictly between two consecutive standard values.
    Between {
        below: ElectricalResistance,
        above: ElectricalResistance,
    },
    /// Only one neighbour exists within the target's decade.
    ///
    /// A mantissa above 9.76 has no higher entry in the table, so only
    /// `9.76 × 10^n` is reported.
    OneSided(ElectricalResistance),
}

impl Bracket {
    /// Iterates over the bracketing values in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = ElectricalResistance> + use<> {
        let (first, second) = match *self {
            Bracket::Exact(value) | Bracket::OneSided(value) => (value, None),
            Bracket::Between { below, above } => (below, Some(above)),
        };
        std::iter::once(first).chain(second)
    }

    /// Returns the lowest bracketing value.
    #[must_use]
    pub fn low(&self) -> ElectricalResistance {
        match *self {
            Bracket::Exact(value)
            | Bracket::OneSided(value)
            | Bracket::Between { below: value, .. } => value,
        }
    }

    /// Returns the highest bracketing value.
    #[must_use]
    pub fn high(&self) -> ElectricalResistance {
        match *self {
            Bracket::Exact(value)
            | Bracket::OneSided(value)
            | Bracket::Between { above: value, .. } => value,
        }
    }
}

/// Finds the standard E96 values immediately below and above `value`.
///
/// The target is decomposed with [`decompose`] and the table is scanned for
/// the first entry not less than its mantissa. That entry and the one before
/// it, scaled to the target's decade, form the bracket.
/// The scan never leaves the target's decade: a value between `9.76 × 10^n`
/// and `1.00 × 10^(n+1)` yields [`Bracket::OneSided`] with `9.76 × 10^n` only.
///
/// A mantissa within a relative `MATCH_TOLERANCE` of an entry counts as
/// that entry and is reported once. A mantissa that close to 10 is the next
/// decade's `1.00`.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidInput`] if `value` is not a positive, finite,
/// normal number.
pub fn bracket(value: ElectricalResistance) -> Result<Bracket, SeriesError> {
    let Decomposition { mantissa, exponent } = decompose(value.get::<ohm>())?;

    let position = E96.partition_point(|&entry| entry < mantissa);

    let exact = [position.checked_sub(1), Some(position)]
        .into_iter()
        .flatten()
        .find_map(|index| match E96.get(index) {
            Some(&entry) => is_match(entry, mantissa).then(|| scale(entry, exponent)),
            None => is_match(10.0, mantissa).then(|| scale(E96[0], exponent + 1)),
        });
    if let Some(exact) = exact {
        return Ok(Bracket::Exact(exact));
    }

    let below = position.checked_sub(1).map(|index| scale(E96[index], exponent));
    let above = E96.get(position).map(|&entry| scale(entry, exponent));

    Ok(match (below, above) {
        (Some(below), Some(above)) => Bracket::Between { below, above },
        (Some(only), None) | (None, Some(only)) => Bracket::OneSided(only),
        (None, None) => unreachable!("the E96 table is not empty"),
    })
}

fn is_match(entry: f64, mantissa: f64) -> bool {
    (entry - mantissa).abs() <= MATCH_TOLERANCE * entry
}

fn scale(mantissa: f64, exponent: i32) -> ElectricalResistance {
    ElectricalResistance::new::<ohm>(mantissa * power_of_ten(exponent))
}
