use rdiv_series::{
    Decomposition, SeriesError, Table, decompose, generate_window, multiplier_for_exponent,
    nearest_mantissa,
};
use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use crate::{Config, Error};

/// Builds the lower-leg candidate window around `r_bottom_min`.
///
/// The start is the E96 mantissa nearest to `r_bottom_min`'s mantissa, in
/// `r_bottom_min`'s decade. Each of `config.decades` consecutive decades then
/// contributes `config.window_len` values starting at that mantissa, and the
/// runs are concatenated in order. Runs overlap when `window_len` crosses a
/// decade boundary, so some values can appear twice.
/// Decades past the top of the multiplier table are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] for an invalid config, and
/// [`Error::Series`] if `r_bottom_min` is not a positive finite resistance or
/// its decade is outside the multiplier table.
pub fn place_window(
    r_bottom_min: ElectricalResistance,
    config: &Config,
) -> Result<Vec<ElectricalResistance>, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let Decomposition { mantissa, exponent } = decompose(r_bottom_min.get::<ohm>())?;
    let start = nearest_mantissa(mantissa);

    if multiplier_for_exponent(exponent).is_none() {
        return Err(SeriesError::TableLookupFailure {
            table: Table::Multiplier,
            value: 10f64.powi(exponent),
        }
        .into());
    }

    let mut window = Vec::with_capacity(config.window_len * config.decades);
    for multiplier in (exponent..)
        .take(config.decades)
        .map_while(multiplier_for_exponent)
    {
        window.extend(generate_window(start, multiplier, config.window_len)?);
    }

    Ok(window)
}
