//! Greedy ride selection.
//!
//! A heuristic: rides are taken in order of time per dollar while they fit
//! in the remaining budget. It is fast but not guaranteed to be optimal.

use tracing::{debug, trace};

use super::rank::ranked_indices;
use crate::domain::{RideItem, RideSet};

/// Select rides greedily by descending time per dollar.
///
/// Makes a single pass over the ranked rides. A ride that would push the
/// total cost over `budget` is skipped and never reconsidered.
///
/// The result is in input order, the same order exhaustive search returns
/// and sums in, so equal selections always report identical totals.
pub fn greedy_max_time<'a>(rides: &[&'a RideItem], budget: f64) -> RideSet<'a> {
    let mut taken = vec![false; rides.len()];
    let mut spent = 0.0;

    for index in ranked_indices(rides) {
        let ride = rides[index];
        let estimate = spent + ride.cost();

        if fits(rides, &taken, index, estimate, budget) {
            trace!(ride = ride.description(), ratio = ride.ratio(), "taking ride");
            taken[index] = true;
            spent = estimate;
        } else {
            trace!(ride = ride.description(), spent, "ride does not fit");
        }
    }

    let selected: RideSet<'a> = rides
        .iter()
        .zip(&taken)
        .filter(|(_, taken)| **taken)
        .map(|(ride, _)| *ride)
        .collect();

    debug!(
        considered = rides.len(),
        selected = selected.len(),
        spent,
        "greedy selection done"
    );
    selected
}

/// Whether taking `rides[extra]` on top of `taken` keeps the cost, summed in
/// input order, within `budget`.
///
/// `estimate` is the same cost summed in ranking order. Reordering a sum of
/// `n` positive terms moves it by well under `2 * n * EPSILON` relative, so
/// the exact input-order sum is only needed near the budget boundary.
fn fits(rides: &[&RideItem], taken: &[bool], extra: usize, estimate: f64, budget: f64) -> bool {
    let slack = 2.0 * rides.len() as f64 * f64::EPSILON * estimate;
    if estimate + slack <= budget {
        return true;
    }
    if estimate - slack > budget {
        return false;
    }

    let cost = rides
        .iter()
        .enumerate()
        .filter(|&(j, _)| taken[j] || j == extra)
        .fold(0.0, |acc, (_, ride)| acc + ride.cost());
    cost <= budget
}
