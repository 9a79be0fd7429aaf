//! Exhaustive ride selection.
//!
//! Every subset of the input is enumerated as a bitmask over the rides, so
//! the answer is the true optimum. Runtime is `O(2^n * n)`; callers are
//! expected to narrow the input with a [`RideFilter`](super::RideFilter)
//! first.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::domain::{RideItem, RideSet, Totals};

/// Maximum number of rides considered by exhaustive search.
///
/// Each ride maps to one bit of a `u64` enumeration index.
pub const MAX_EXHAUSTIVE_ITEMS: usize = 63;

/// Best candidate found so far: its enumeration index and time.
#[derive(Debug, Clone, Copy)]
struct Best {
    bits: u64,
    time: f64,
}

/// Select the subset of rides with the greatest total time within `budget`.
///
/// Only the first [`MAX_EXHAUSTIVE_ITEMS`] rides are considered. Among
/// subsets with equal time, the one enumerated first (lowest index) wins.
/// The empty subset always fits a non-negative budget, so if no ride fits
/// the result is empty. The result is in input order.
pub fn exhaustive_max_time<'a>(rides: &[&'a RideItem], budget: f64) -> RideSet<'a> {
    let rides = bounded(rides);
    let mut best: Option<Best> = None;

    for bits in 0..=last_index(rides.len()) {
        let totals = subset_totals(rides, bits);
        if !totals.fits(budget) {
            continue;
        }
        match best {
            Some(current) if totals.time <= current.time => {}
            _ => {
                best = Some(Best {
                    bits,
                    time: totals.time,
                })
            }
        }
    }

    finish(rides, best)
}

/// Same as [`exhaustive_max_time`], with the enumeration spread over the
/// rayon thread pool.
///
/// Candidates are combined by preferring the greater time and, on equal
/// time, the lower enumeration index, so the result is identical to the
/// sequential search.
pub fn exhaustive_max_time_parallel<'a>(rides: &[&'a RideItem], budget: f64) -> RideSet<'a> {
    let rides = bounded(rides);

    let best = (0..=last_index(rides.len()))
        .into_par_iter()
        .filter_map(|bits| {
            let totals = subset_totals(rides, bits);
            totals.fits(budget).then_some(Best {
                bits,
                time: totals.time,
            })
        })
        .reduce_with(prefer);

    finish(rides, best)
}

/// Truncate to the rides exhaustive search may consider.
pub(crate) fn bounded<'s, 'a>(rides: &'s [&'a RideItem]) -> &'s [&'a RideItem] {
    if rides.len() > MAX_EXHAUSTIVE_ITEMS {
        warn!(
            rides = rides.len(),
            limit = MAX_EXHAUSTIVE_ITEMS,
            "too many rides for exhaustive search, ignoring the rest"
        );
        &rides[..MAX_EXHAUSTIVE_ITEMS]
    } else {
        rides
    }
}

/// Highest enumeration index for `n` rides: `2^n - 1`.
fn last_index(n: usize) -> u64 {
    debug_assert!(n <= MAX_EXHAUSTIVE_ITEMS);
    (1u64 << n) - 1
}

/// Totals of the rides whose bits are set in `bits`, summed in input order.
fn subset_totals(rides: &[&RideItem], bits: u64) -> Totals {
    let mut totals = Totals::ZERO;
    let mut remaining = bits;
    while remaining != 0 {
        let j = remaining.trailing_zeros() as usize;
        totals = totals + Totals::of(rides[j]);
        remaining &= remaining - 1;
    }
    totals
}

fn materialize<'a>(rides: &[&'a RideItem], bits: u64) -> RideSet<'a> {
    rides
        .iter()
        .enumerate()
        .filter(|(j, _)| (bits >> j) & 1 == 1)
        .map(|(_, ride)| *ride)
        .collect()
}

fn prefer(a: Best, b: Best) -> Best {
    if b.time > a.time || (b.time == a.time && b.bits < a.bits) {
        b
    } else {
        a
    }
}

fn finish<'a>(rides: &[&'a RideItem], best: Option<Best>) -> RideSet<'a> {
    let selected = best
        .map(|best| materialize(rides, best.bits))
        .unwrap_or_default();
    debug!(
        considered = rides.len(),
        selected = selected.len(),
        "exhaustive selection done"
    );
    selected
}
