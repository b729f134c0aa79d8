use rdiv_core::constraint::{Constrained, ConstraintError, StrictlyPositive};
use thiserror::Error;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance},
};

/// Errors returned when divider requirements are physically invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpecError {
    #[error("input voltage is invalid")]
    InputVoltage(#[source] ConstraintError),

    #[error("output voltage is invalid")]
    OutputVoltage(#[source] ConstraintError),

    #[error("maximum current is invalid")]
    MaxCurrent(#[source] ConstraintError),

    #[error("{quantity} must be finite")]
    NotFinite { quantity: &'static str },

    /// A divider can only step a voltage down.
    #[error("output voltage must be less than input voltage")]
    OutputNotBelowInput,
}

/// Validated requirements for a voltage divider.
///
/// Holds an input voltage, a target output voltage, and the maximum current
/// allowed through the lower leg. All three are finite and strictly positive,
/// and the output is strictly below the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerSpec {
    v_in: Constrained<ElectricPotential, StrictlyPositive>,
    v_out: Constrained<ElectricPotential, StrictlyPositive>,
    i_max: Constrained<ElectricCurrent, StrictlyPositive>,
}

impl DividerSpec {
    /// Validates and constructs a divider spec.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] if any quantity is non-finite or not strictly
    /// positive, or if `v_out >= v_in`.
    pub fn new(
        v_in: ElectricPotential,
        v_out: ElectricPotential,
        i_max: ElectricCurrent,
    ) -> Result<Self, SpecError> {
        if !v_in.is_finite() {
            return Err(SpecError::NotFinite {
                quantity: "input voltage",
            });
        }
        if !v_out.is_finite() {
            return Err(SpecError::NotFinite {
                quantity: "output voltage",
            });
        }
        if !i_max.is_finite() {
            return Err(SpecError::NotFinite {
                quantity: "maximum current",
            });
        }

        let v_in = StrictlyPositive::new(v_in).map_err(SpecError::InputVoltage)?;
        let v_out = StrictlyPositive::new(v_out).map_err(SpecError::OutputVoltage)?;
        let i_max = StrictlyPositive::new(i_max).map_err(SpecError::MaxCurrent)?;

        if v_out.as_ref().get::<volt>() >= v_in.as_ref().get::<volt>() {
            return Err(SpecError::OutputNotBelowInput);
        }

        Ok(Self { v_in, v_out, i_max })
    }

    #[must_use]
    pub fn v_in(&self) -> ElectricPotential {
        *self.v_in.as_ref()
    }

    /// Target output voltage.
    #[must_use]
    pub fn v_out(&self) -> ElectricPotential {
        *self.v_out.as_ref()
    }

    /// Maximum current allowed through the lower leg.
    #[must_use]
    pub fn i_max(&self) -> ElectricCurrent {
        *self.i_max.as_ref()
    }

    /// Smallest lower-leg resistance that keeps the current at or below the
    /// limit when the output sits at its target: `Vo / Imax`.
    #[must_use]
    pub fn r_bottom_min(&self) -> ElectricalResistance {
        self.v_out() / self.i_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::milliampere, electrical_resistance::ohm};

    fn volts(value: f64) -> ElectricPotential {
        ElectricPotential::new::<volt>(value)
    }

    fn milliamps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<milliampere>(value)
    }

    #[test]
    fn accepts_step_down_divider() {
        let spec = DividerSpec::new(volts(12.0), volts(5.0), milliamps(10.0)).unwrap();

        assert_eq!(spec.v_in(), volts(12.0));
        assert_eq!(spec.v_out(), volts(5.0));
        assert_eq!(spec.i_max(), milliamps(10.0));
        assert_relative_eq!(spec.r_bottom_min().get::<ohm>(), 500.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_quantities() {
        assert!(matches!(
            DividerSpec::new(volts(0.0), volts(5.0), milliamps(10.0)),
            Err(SpecError::InputVoltage(ConstraintError::Zero))
        ));
        assert!(matches!(
            DividerSpec::new(volts(12.0), volts(-5.0), milliamps(10.0)),
            Err(SpecError::OutputVoltage(ConstraintError::Negative))
        ));
        assert!(matches!(
            DividerSpec::new(volts(12.0), volts(5.0), milliamps(0.0)),
            Err(SpecError::MaxCurrent(ConstraintError::Zero))
        ));
    }

    #[test]
    fn rejects_output_at_or_above_input() {
        assert_eq!(
            DividerSpec::new(volts(5.0), volts(5.0), milliamps(1.0)),
            Err(SpecError::OutputNotBelowInput)
        );
        assert_eq!(
            DividerSpec::new(volts(3.3), volts(5.0), milliamps(1.0)),
            Err(SpecError::OutputNotBelowInput)
        );
    }

    #[test]
    fn rejects_non_finite_quantities() {
        assert!(matches!(
            DividerSpec::new(volts(f64::INFINITY), volts(5.0), milliamps(1.0)),
            Err(SpecError::NotFinite { .. })
        ));
        assert!(matches!(
            DividerSpec::new(volts(12.0), volts(f64::NAN), milliamps(1.0)),
            Err(SpecError::NotFinite { .. })
        ));
    }
}
