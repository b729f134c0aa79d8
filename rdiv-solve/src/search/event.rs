use std::fmt;

use rdiv_series::SeriesError;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance},
};

use crate::DividerSolution;

/// Control actions supported by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning and return the best pair seen so far.
    StopEarly,
}

/// Why a candidate was excluded before or after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    /// `Vo / Rbottom` exceeds the current limit.
    CurrentLimit { current: ElectricCurrent },
    /// The ideal upper leg `(Vin - Vo) / Ibottom` is not positive.
    NonPositiveIdealTop { ideal: ElectricalResistance },
    /// The ideal upper leg could not be bracketed to standard values.
    Bracketing(SeriesError),
    /// The pair's output voltage is above the target.
    Overshoot { v_out: ElectricPotential },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::CurrentLimit { current } => write!(
                f,
                "lower-leg current {:.6} A exceeds the limit",
                current.get::<ampere>()
            ),
            SkipReason::NonPositiveIdealTop { ideal } => {
                write!(f, "ideal upper leg {:.2} Ω is not positive", ideal.get::<ohm>())
            }
            SkipReason::Bracketing(error) => write!(f, "cannot bracket ideal upper leg: {error}"),
            SkipReason::Overshoot { v_out } => {
                write!(f, "output {:.4} V is above the target", v_out.get::<volt>())
            }
        }
    }
}

/// Event emitted by the search for each candidate decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A lower-leg candidate, or one of its bracketed pairs, was skipped.
    Skipped {
        r_bottom: ElectricalResistance,
        /// The upper leg, when the skip happened after bracketing.
        r_top: Option<ElectricalResistance>,
        reason: SkipReason,
    },
    /// A valid pair was evaluated.
    Evaluated {
        solution: &'a DividerSolution,
        /// True if this pair is now the best seen.
        is_best: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reasons_read_as_sentences() {
        let reason = SkipReason::CurrentLimit {
            current: ElectricCurrent::new::<ampere>(0.010_02),
        };
        assert_eq!(reason.to_string(), "lower-leg current 0.010020 A exceeds the limit");

        let reason = SkipReason::Overshoot {
            v_out: ElectricPotential::new::<volt>(5.0016),
        };
        assert_eq!(reason.to_string(), "output 5.0016 V is above the target");
    }
}
