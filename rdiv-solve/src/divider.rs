//! Electrical evaluation of a two-resistor voltage divider.
//!
//! The divider is `Vin → Rtop → Vout → Rbottom → ground`, with no load on
//! the output node.

use uom::si::{
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power, Ratio},
    ratio::ratio,
};

/// Returns the unloaded output voltage `Vin * Rb / (Rb + Rt)`.
#[must_use]
pub fn actual_output(
    v_in: ElectricPotential,
    r_bottom: ElectricalResistance,
    r_top: ElectricalResistance,
) -> ElectricPotential {
    v_in * (r_bottom / (r_bottom + r_top))
}

/// Returns the fractional output error `|Vactual / Vo - 1|`.
#[must_use]
pub fn fractional_error(
    v_in: ElectricPotential,
    v_out: ElectricPotential,
    r_bottom: ElectricalResistance,
    r_top: ElectricalResistance,
) -> Ratio {
    let relative: Ratio = actual_output(v_in, r_bottom, r_top) / v_out;
    Ratio::new::<ratio>((relative.get::<ratio>() - 1.0).abs())
}

/// A fully evaluated resistor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerSolution {
    pub r_bottom: ElectricalResistance,
    pub r_top: ElectricalResistance,
    /// Output voltage actually produced by the pair.
    pub v_out: ElectricPotential,
    /// Fractional deviation of [`Self::v_out`] from the target.
    pub error: Ratio,
    /// Current through both legs.
    pub current: ElectricCurrent,
    pub power_top: Power,
    pub power_bottom: Power,
}

impl DividerSolution {
    /// Evaluates the pair `(r_bottom, r_top)` against a target output voltage.
    #[must_use]
    pub fn evaluate(
        v_in: ElectricPotential,
        v_target: ElectricPotential,
        r_bottom: ElectricalResistance,
        r_top: ElectricalResistance,
    ) -> Self {
        let current: ElectricCurrent = v_in / (r_bottom + r_top);

        Self {
            r_bottom,
            r_top,
            v_out: actual_output(v_in, r_bottom, r_top),
            error: fractional_error(v_in, v_target, r_bottom, r_top),
            current,
            power_top: r_top * current * current,
            power_bottom: r_bottom * current * current,
        }
    }
}
