/// Normalized mantissas of the E96 series, one decade in ascending order.
pub const E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, //
    1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40, 1.43, //
    1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, //
    1.78, 1.82, 1.87, 1.91, 1.96, 2.00, 2.05, 2.10, //
    2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, //
    2.61, 2.67, 2.74, 2.80, 2.87, 2.94, 3.01, 3.09, //
    3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, //
    3.83, 3.92, 4.02, 4.12, 4.22, 4.32, 4.42, 4.53, //
    4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, //
    5.62, 5.76, 5.90, 6.04, 6.19, 6.34, 6.49, 6.65, //
    6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, //
    8.25, 8.45, 8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// Decade multipliers in ohms, from 1 µΩ-scale up to 10 MΩ-scale.
pub const DECADE_MULTIPLIERS: [f64; 14] = [
    1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7,
];

/// Exponent of the first entry in [`DECADE_MULTIPLIERS`].
const MIN_EXPONENT: i32 = -6;

/// Returns the table multiplier for `10^exponent`, if the decade is supported.
///
/// Callers that need an exact member of [`DECADE_MULTIPLIERS`] (for example
/// to start a [`generate_window`](crate::generate_window) run) should use this
/// rather than computing the power of ten themselves.
#[must_use]
pub fn multiplier_for_exponent(exponent: i32) -> Option<f64> {
    let index = usize::try_from(exponent - MIN_EXPONENT).ok()?;
    DECADE_MULTIPLIERS.get(index).copied()
}

/// Returns the table entry closest to `mantissa` by absolute distance.
///
/// Ties resolve to the lower entry.
#[must_use]
pub fn nearest_mantissa(mantissa: f64) -> f64 {
    E96.iter()
        .copied()
        .reduce(|best, entry| {
            if (entry - mantissa).abs() < (best - mantissa).abs() {
                entry
            } else {
                best
            }
        })
        .unwrap_or(E96[0])
}

/// Returns `10^exponent`, preferring the exact table multiplier when available.
pub(crate) fn power_of_ten(exponent: i32) -> f64 {
    multiplier_for_exponent(exponent).unwrap_or_else(|| 10f64.powi(exponent))
}
