use crate::{SeriesError, table::power_of_ten};

/// A positive value split into `mantissa × 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    /// Normalized leading value in `[1, 10)`.
    pub mantissa: f64,
    /// Integer decade exponent.
    pub exponent: i32,
}

/// Splits a positive, normal value into a mantissa in `[1, 10)` and an integer exponent.
///
/// The exponent comes from `floor(log10(value))`; the mantissa is then
/// renormalized in case rounding in `log10` lands one decade off
/// (which can happen right at powers of ten).
///
/// # Errors
///
/// Returns [`SeriesError::InvalidInput`] if `value` is not positive and finite,
/// or is subnormal (its decade's power of ten is not representable).
pub fn decompose(value: f64) -> Result<Decomposition, SeriesError> {
    if !value.is_normal() || value < 0.0 {
        return Err(SeriesError::InvalidInput { value });
    }

    // Normal positive f64 values have log10 in roughly [-308, 309].
    #[allow(clippy::cast_possible_truncation)]
    let mut exponent = value.log10().floor() as i32;
    let mut mantissa = value / power_of_ten(exponent);

    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    } else if mantissa < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }

    Ok(Decomposition { mantissa, exponent })
}
