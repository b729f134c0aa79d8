mod event;

pub use event::{Action, Event, SkipReason};

use rdiv_core::Observer;
use rdiv_series::bracket;
use uom::{
    ConstZero,
    si::f64::{ElectricCurrent, ElectricalResistance},
};

use crate::{DividerSolution, DividerSpec};

/// Indicates why the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every candidate in the window was considered.
    Exhausted,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an observed search.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Lowest-error valid pair, or `None` if no pair satisfied the constraints.
    pub best: Option<DividerSolution>,
    pub status: Status,
    /// Number of pairs that passed all constraints and were scored.
    pub evaluated: usize,
}

/// Searches `window` for the lower-leg/upper-leg pair with the lowest output error.
///
/// For each lower-leg candidate `Rb`, in window order:
///
/// 1. skips it if `Vo / Rb` exceeds the current limit,
/// 2. computes the ideal upper leg `(Vin - Vo) / (Vo / Rb)` and skips it if
///    that is not positive,
/// 3. brackets the ideal upper leg to one or two standard values,
/// 4. evaluates each pair, skipping any whose output is above `Vo`.
///
/// The pair with the strictly lowest fractional error wins, so among equal
/// errors the first one encountered is kept.
/// Every decision is reported to `observer`, which may stop the scan early.
pub fn search_observed<Obs>(
    spec: &DividerSpec,
    window: &[ElectricalResistance],
    mut observer: Obs,
) -> Outcome
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let v_in = spec.v_in();
    let v_out = spec.v_out();
    let i_max = spec.i_max();

    let mut best: Option<DividerSolution> = None;
    let mut evaluated = 0;

    let stopped = |best, evaluated| Outcome {
        best,
        status: Status::StoppedByObserver,
        evaluated,
    };

    for &r_bottom in window {
        let i_bottom: ElectricCurrent = v_out / r_bottom;
        if i_bottom > i_max {
            let reason = SkipReason::CurrentLimit { current: i_bottom };
            if skip(&mut observer, r_bottom, None, reason) {
                return stopped(best, evaluated);
            }
            continue;
        }

        let ideal_top: ElectricalResistance = (v_in - v_out) / i_bottom;
        if ideal_top <= ElectricalResistance::ZERO {
            let reason = SkipReason::NonPositiveIdealTop { ideal: ideal_top };
            if skip(&mut observer, r_bottom, None, reason) {
                return stopped(best, evaluated);
            }
            continue;
        }

        let tops = match bracket(ideal_top) {
            Ok(tops) => tops,
            Err(error) => {
                if skip(&mut observer, r_bottom, None, SkipReason::Bracketing(error)) {
                    return stopped(best, evaluated);
                }
                continue;
            }
        };

        for r_top in tops.iter() {
            let solution = DividerSolution::evaluate(v_in, v_out, r_bottom, r_top);

            if solution.v_out > v_out {
                let reason = SkipReason::Overshoot {
                    v_out: solution.v_out,
                };
                if skip(&mut observer, r_bottom, Some(r_top), reason) {
                    return stopped(best, evaluated);
                }
                continue;
            }

            evaluated += 1;
            let is_best = best
                .as_ref()
                .is_none_or(|current| solution.error < current.error);

            let action = observer.observe(&Event::Evaluated {
                solution: &solution,
                is_best,
            });

            if is_best {
                best = Some(solution);
            }

            if matches!(action, Some(Action::StopEarly)) {
                return stopped(best, evaluated);
            }
        }
    }

    Outcome {
        best,
        status: Status::Exhausted,
        evaluated,
    }
}

/// Searches `window` without observation.
///
/// Returns `None` when no pair satisfies the current limit and the
/// no-overshoot rule.
#[must_use]
pub fn search(spec: &DividerSpec, window: &[ElectricalResistance]) -> Option<DividerSolution> {
    search_observed(spec, window, ()).best
}

/// Reports a skipped candidate and returns true if the observer asked to stop.
fn skip<Obs>(
    observer: &mut Obs,
    r_bottom: ElectricalResistance,
    r_top: Option<ElectricalResistance>,
    reason: SkipReason,
) -> bool
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let event = Event::Skipped {
        r_bottom,
        r_top,
        reason,
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::{ampere, milliampere},
        electric_potential::volt,
        electrical_resistance::ohm,
        f64::ElectricPotential,
        ratio::ratio,
    };

    use crate::{Config, place_window};

    fn spec(v_in: f64, v_out: f64, i_max_ma: f64) -> DividerSpec {
        DividerSpec::new(
            ElectricPotential::new::<volt>(v_in),
            ElectricPotential::new::<volt>(v_out),
            ElectricCurrent::new::<milliampere>(i_max_ma),
        )
        .expect("valid spec")
    }

    fn ohms(values: &[f64]) -> Vec<ElectricalResistance> {
        values
            .iter()
            .map(|&v| ElectricalResistance::new::<ohm>(v))
            .collect()
    }

    fn assert_within_constraints(spec: &DividerSpec, solution: &DividerSolution) {
        let i_bottom: ElectricCurrent = spec.v_out() / solution.r_bottom;
        assert!(i_bottom <= spec.i_max(), "{solution:?}");
        assert!(solution.v_out <= spec.v_out(), "{solution:?}");
        assert!(solution.current <= spec.i_max(), "{solution:?}");
    }

    #[test]
    fn finds_close_pair_for_twelve_to_five_volts() {
        let spec = spec(12.0, 5.0, 10.0);
        let window = place_window(spec.r_bottom_min(), &Config::default()).unwrap();

        let best = search(&spec, &window).expect("a valid pair exists");

        assert_within_constraints(&spec, &best);
        assert_relative_eq!(best.v_out.get::<volt>(), 5.0, max_relative = 0.05);
        assert!(best.error.get::<ratio>() < 0.01);
    }

    #[test]
    fn never_violates_constraints() {
        let cases = [
            (12.0, 5.0, 10.0),
            (3.3, 1.8, 100.0),
            (5.0, 2.0, 1.0),
            (24.0, 3.3, 0.5),
            (1.8, 0.9, 2000.0),
            (48.0, 1.2, 0.05),
        ];
        for (v_in, v_out, i_max_ma) in cases {
            let spec = spec(v_in, v_out, i_max_ma);
            let window = place_window(spec.r_bottom_min(), &Config::default()).unwrap();
            let best = search(&spec, &window).expect("a valid pair exists");
            assert_within_constraints(&spec, &best);
        }
    }

    #[test]
    fn empty_window_has_no_solution() {
        let spec = spec(12.0, 5.0, 10.0);
        assert_eq!(search(&spec, &[]), None);
    }

    #[test]
    fn window_entirely_over_current_limit_has_no_solution() {
        let spec = spec(12.0, 5.0, 10.0);
        // All below Vo / Imax = 500 Ω.
        let window = ohms(&[100.0, 200.0, 499.0]);

        let mut skips = 0;
        let observer = |event: &Event<'_>| -> Option<Action> {
            if let Event::Skipped {
                reason: SkipReason::CurrentLimit { .. },
                ..
            } = event
            {
                skips += 1;
            }
            None
        };

        let outcome = search_observed(&spec, &window, observer);
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.status, Status::Exhausted);
        assert_eq!(outcome.evaluated, 0);
        assert_eq!(skips, 3);
    }

    #[test]
    fn overshooting_pairs_are_never_selected() {
        let spec = spec(12.0, 5.0, 10.0);
        // Ideal top for 511 Ω is 715.4 Ω: 715 Ω overshoots, 732 Ω undershoots.
        let window = ohms(&[511.0]);

        let mut overshoots = Vec::new();
        let observer = |event: &Event<'_>| -> Option<Action> {
            if let Event::Skipped {
                r_top: Some(r_top),
                reason: SkipReason::Overshoot { .. },
                ..
            } = event
            {
                overshoots.push(r_top.get::<ohm>());
            }
            None
        };

        let outcome = search_observed(&spec, &window, observer);
        let best = outcome.best.expect("732 Ω is valid");

        assert_eq!(overshoots.len(), 1);
        assert_relative_eq!(overshoots[0], 715.0, max_relative = 1e-12);
        assert_relative_eq!(best.r_top.get::<ohm>(), 732.0, max_relative = 1e-12);
        assert_eq!(outcome.evaluated, 1);
    }

    #[test]
    fn top_of_decade_ideal_offers_only_the_lower_neighbour() {
        let spec = spec(12.0, 5.0, 10.0);
        // Ideal top for 698 Ω is 977.2 Ω, above the decade's last entry.
        // 976 Ω overshoots and 1 kΩ is not offered.
        let window = ohms(&[698.0]);

        let mut overshoots = Vec::new();
        let observer = |event: &Event<'_>| -> Option<Action> {
            if let Event::Skipped {
                r_top: Some(r_top),
                reason: SkipReason::Overshoot { .. },
                ..
            } = event
            {
                overshoots.push(r_top.get::<ohm>());
            }
            None
        };

        let outcome = search_observed(&spec, &window, observer);
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.evaluated, 0);
        assert_eq!(overshoots.len(), 1);
        assert_relative_eq!(overshoots[0], 976.0, max_relative = 1e-12);
    }

    #[test]
    fn non_positive_lower_leg_is_skipped() {
        let spec = spec(12.0, 5.0, 10.0);
        let window = ohms(&[-1000.0]);

        let mut reasons = Vec::new();
        let observer = |event: &Event<'_>| -> Option<Action> {
            if let Event::Skipped { reason, .. } = event {
                reasons.push(*reason);
            }
            None
        };

        let outcome = search_observed(&spec, &window, observer);
        assert_eq!(outcome.best, None);
        assert!(matches!(
            reasons.as_slice(),
            [SkipReason::NonPositiveIdealTop { .. }]
        ));
    }

    #[test]
    fn first_of_equal_errors_wins() {
        let spec = spec(12.0, 5.0, 10.0);
        let window = ohms(&[511.0, 511.0]);

        let mut flags = Vec::new();
        let observer = |event: &Event<'_>| -> Option<Action> {
            if let Event::Evaluated { is_best, .. } = event {
                flags.push(*is_best);
            }
            None
        };

        let outcome = search_observed(&spec, &window, observer);
        assert_eq!(flags, vec![true, false]);
        assert_eq!(outcome.evaluated, 2);
    }

    #[test]
    fn observer_can_stop_search() {
        let spec = spec(12.0, 5.0, 10.0);
        let window = place_window(spec.r_bottom_min(), &Config::default()).unwrap();

        let mut calls = 0usize;
        let observer = |event: &Event<'_>| -> Option<Action> {
            calls += 1;
            matches!(event, Event::Evaluated { .. }).then_some(Action::StopEarly)
        };

        let outcome = search_observed(&spec, &window, observer);

        assert_eq!(outcome.status, Status::StoppedByObserver);
        assert_eq!(outcome.evaluated, 1);
        assert!(outcome.best.is_some());
        // 499 Ω is over the limit, then 511/715 overshoots, then 511/732 is evaluated.
        assert_eq!(calls, 3);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let spec = spec(5.0, 2.0, 1.0);
        let window = place_window(spec.r_bottom_min(), &Config::default()).unwrap();

        let first = search(&spec, &window);
        let second = search(&spec, &window);

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn string_current_matches_ohms_law() {
        let spec = spec(3.3, 1.8, 100.0);
        let window = place_window(spec.r_bottom_min(), &Config::default()).unwrap();
        let best = search(&spec, &window).unwrap();

        let total = best.r_bottom + best.r_top;
        assert_relative_eq!(
            best.current.get::<ampere>(),
            3.3 / total.get::<ohm>(),
            max_relative = 1e-12
        );
    }
}
