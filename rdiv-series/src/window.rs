use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use crate::{
    SeriesError, Table,
    table::{DECADE_MULTIPLIERS, E96},
};

/// Walks the standard values upward from a table position.
///
/// Advances through [`E96`] and rolls over to the next decade multiplier when
/// the mantissa table is exhausted. Iteration ends after the last entry of the
/// last supported decade.
#[derive(Debug, Clone)]
pub struct Walk {
    mantissa_index: usize,
    decade_index: usize,
}

impl Walk {
    /// Starts a walk at `mantissa × multiplier`.
    ///
    /// Both values are found by exact lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::TableLookupFailure`] if either value is not an
    /// exact member of its table.
    pub fn starting_at(mantissa: f64, multiplier: f64) -> Result<Self, SeriesError> {
        #[allow(clippy::float_cmp)]
        let mantissa_index = E96.iter().position(|&entry| entry == mantissa).ok_or(
            SeriesError::TableLookupFailure {
                table: Table::Mantissa,
                value: mantissa,
            },
        )?;

        #[allow(clippy::float_cmp)]
        let decade_index = DECADE_MULTIPLIERS
            .iter()
            .position(|&entry| entry == multiplier)
            .ok_or(SeriesError::TableLookupFailure {
                table: Table::Multiplier,
                value: multiplier,
            })?;

        Ok(Self {
            mantissa_index,
            decade_index,
        })
    }
}

impl Iterator for Walk {
    type Item = ElectricalResistance;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mantissa_index == E96.len() {
            self.mantissa_index = 0;
            self.decade_index += 1;
        }

        let multiplier = DECADE_MULTIPLIERS.get(self.decade_index)?;
        let mantissa = E96[self.mantissa_index];
        self.mantissa_index += 1;

        Some(ElectricalResistance::new::<ohm>(mantissa * multiplier))
    }
}

/// Generates up to `count` consecutive standard values starting at `mantissa × multiplier`.
///
/// The run may cross decade boundaries. It is shorter than `count` only when
/// the multiplier table runs out.
///
/// # Errors
///
/// Returns [`SeriesError::TableLookupFailure`] if `mantissa` or `multiplier`
/// is not an exact table member.
pub fn generate_window(
    mantissa: f64,
    multiplier: f64,
    count: usize,
) -> Result<Vec<ElectricalResistance>, SeriesError> {
    Ok(Walk::starting_at(mantissa, multiplier)?.take(count).collect())
}
