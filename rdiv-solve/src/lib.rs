//! Selects the E96 resistor pair that best realizes a voltage divider.
//!
//! A divider is described by a validated [`DividerSpec`]. The search walks a
//! window of lower-leg candidates, brackets the ideal upper leg for each, and
//! keeps the pair with the lowest fractional output error that neither
//! exceeds the current limit nor overshoots the target voltage.
//!
//! [`solve`] places the window automatically; [`search`] and
//! [`search_observed`] work on a caller-supplied window.

mod config;
mod divider;
mod error;
mod placement;
mod search;
mod spec;

pub use config::Config;
pub use divider::{DividerSolution, actual_output, fractional_error};
pub use error::Error;
pub use placement::place_window;
pub use search::{Action, Event, Outcome, SkipReason, Status, search, search_observed};
pub use spec::{DividerSpec, SpecError};

/// Places a window around the spec's minimum lower-leg resistance and searches it.
///
/// Returns `Ok(None)` when no pair in the window satisfies the constraints.
///
/// # Errors
///
/// Returns an error if the config is invalid or the window cannot be placed
/// within the supported decades.
pub fn solve(spec: &DividerSpec, config: &Config) -> Result<Option<DividerSolution>, Error> {
    let window = place_window(spec.r_bottom_min(), config)?;
    Ok(search(spec, &window))
}
