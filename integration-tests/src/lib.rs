//! Shared helpers for the cross-crate scenario tests.

use rdiv_series::{
    SeriesError, Table, decompose, generate_window, multiplier_for_exponent, nearest_mantissa,
};
use rdiv_solve::DividerSpec;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance},
};

/// Builds a spec from plain SI numbers (volts, volts, amperes).
///
/// # Panics
///
/// Panics if the numbers do not form a valid divider spec.
#[must_use]
pub fn spec(v_in: f64, v_out: f64, i_max: f64) -> DividerSpec {
    DividerSpec::new(
        ElectricPotential::new::<volt>(v_in),
        ElectricPotential::new::<volt>(v_out),
        ElectricCurrent::new::<ampere>(i_max),
    )
    .expect("scenario spec should be valid")
}

/// Builds a window by hand: two 96-value runs starting at `mantissa`, one in
/// the decade of `10^exponent` and one in the decade above, concatenated.
///
/// # Errors
///
/// Returns an error if either start is not a table member.
pub fn two_decade_window(
    mantissa: f64,
    exponent: i32,
) -> Result<Vec<ElectricalResistance>, SeriesError> {
    let mut window = Vec::new();
    for exponent in [exponent, exponent + 1] {
        let multiplier = multiplier_for_exponent(exponent).ok_or(
            SeriesError::TableLookupFailure {
                table: Table::Multiplier,
                value: 10f64.powi(exponent),
            },
        )?;
        window.extend(generate_window(mantissa, multiplier, 96)?);
    }
    Ok(window)
}

/// Builds the two-decade window around `spec.r_bottom_min()` by hand.
///
/// # Errors
///
/// Returns an error if the window cannot be placed in the supported decades.
pub fn window_around_minimum(
    spec: &DividerSpec,
) -> Result<Vec<ElectricalResistance>, SeriesError> {
    let d = decompose(spec.r_bottom_min().get::<ohm>())?;
    two_decade_window(nearest_mantissa(d.mantissa), d.exponent)
}
