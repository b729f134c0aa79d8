//! # rdiv
//!
//! Picks the pair of E96 resistors that best realizes a voltage divider.
//!
//! ```sh
//! # Vin = 12 V, Vo = 5 V, Imax = 10 mA
//! rdiv 12 5 0.01
//!
//! # Prompt for the values instead
//! rdiv
//! ```
//!
//! Set `RUST_LOG=debug` to trace every candidate the search considers.

mod format;
mod input;
mod report;

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use log::{debug, info};
use rdiv_solve::{Action, Config, Event, place_window, search_observed};
use uom::si::{electric_potential::volt, ratio::percent};

use crate::input::Inputs;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = match Inputs::from_args(&args)? {
        Some(inputs) => inputs,
        None => Inputs::prompt(io::stdin().lock(), io::stdout())?,
    };
    let spec = inputs.to_spec()?;

    let config = Config::default();
    let window =
        place_window(spec.r_bottom_min(), &config).context("cannot place the search window")?;
    info!(
        "searching {} lower-leg candidates from {} to {}",
        window.len(),
        window.first().map_or_else(String::new, |r| format::resistance(*r)),
        window.last().map_or_else(String::new, |r| format::resistance(*r)),
    );

    let outcome = search_observed(&spec, &window, log_event);
    info!("evaluated {} valid pairs", outcome.evaluated);

    report::write(io::stdout().lock(), outcome.best.as_ref())
        .context("failed to write results")
}

/// Traces each search decision at debug level.
fn log_event(event: &Event<'_>) -> Option<Action> {
    match event {
        Event::Skipped {
            r_bottom,
            r_top: Some(r_top),
            reason,
        } => debug!(
            "Rb={} Rt={} => SKIP: {reason}",
            format::resistance(*r_bottom),
            format::resistance(*r_top)
        ),
        Event::Skipped {
            r_bottom,
            r_top: None,
            reason,
        } => debug!("Rb={} => SKIP: {reason}", format::resistance(*r_bottom)),
        Event::Evaluated { solution, is_best } => debug!(
            "Rb={} Rt={} => Vout={:.4} V Error={:.2}%{}",
            format::resistance(solution.r_bottom),
            format::resistance(solution.r_top),
            solution.v_out.get::<volt>(),
            solution.error.get::<percent>(),
            if *is_best { " (best so far)" } else { "" },
        ),
    }
    None
}
