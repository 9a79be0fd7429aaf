//! Running and comparing the selectors.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use super::config::PlannerConfig;
use super::exhaustive::{exhaustive_max_time, exhaustive_max_time_parallel};
use super::greedy::greedy_max_time;
use crate::domain::{RideItem, RideSet, Totals, aggregate};

/// The available selection algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Time-per-dollar heuristic.
    Greedy,
    /// Enumeration of every subset.
    Exhaustive,
    /// Enumeration of every subset across the rayon thread pool.
    ExhaustiveParallel,
}

impl Algorithm {
    /// Run this algorithm over `rides` and time it.
    pub fn select<'a>(self, rides: &[&'a RideItem], budget: f64) -> Selection<'a> {
        let start = Instant::now();
        let selected = match self {
            Algorithm::Greedy => greedy_max_time(rides, budget),
            Algorithm::Exhaustive => exhaustive_max_time(rides, budget),
            Algorithm::ExhaustiveParallel => exhaustive_max_time_parallel(rides, budget),
        };
        let elapsed = start.elapsed();

        Selection::new(self, selected, elapsed)
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::ExhaustiveParallel => "exhaustive-parallel",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rides chosen by one algorithm, with their totals.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub algorithm: Algorithm,

    /// Chosen rides, in input order.
    pub rides: RideSet<'a>,

    pub totals: Totals,

    /// Wall-clock time spent selecting.
    pub elapsed: Duration,
}

impl<'a> Selection<'a> {
    /// Bundle selected rides with their totals.
    pub fn new(algorithm: Algorithm, rides: RideSet<'a>, elapsed: Duration) -> Self {
        let totals = aggregate(&rides);
        Self {
            algorithm,
            rides,
            totals,
            elapsed,
        }
    }
}

/// Greedy and exhaustive selections over the same rides.
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    pub budget: f64,

    /// Number of rides both algorithms were given.
    pub candidates: usize,

    pub greedy: Selection<'a>,
    pub exhaustive: Selection<'a>,
}

impl Comparison<'_> {
    /// Extra minutes of ride time the exhaustive search found over greedy.
    ///
    /// Never negative, since both run on the same rides.
    pub fn time_gap(&self) -> f64 {
        self.exhaustive.totals.time - self.greedy.totals.time
    }

    /// Whether greedy found an optimal selection.
    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy.totals.time >= self.exhaustive.totals.time
    }
}

/// Filter `rides` with the configured filter, then run greedy and
/// exhaustive selection on the result.
pub fn compare<'a>(rides: &[&'a RideItem], config: &PlannerConfig) -> Comparison<'a> {
    let candidates = config.filter.apply(rides);

    let greedy = Algorithm::Greedy.select(&candidates, config.budget);
    let exhaustive = Algorithm::Exhaustive.select(&candidates, config.budget);

    info!(
        candidates = candidates.len(),
        budget = config.budget,
        greedy_time = greedy.totals.time,
        exhaustive_time = exhaustive.totals.time,
        greedy_us = micros(greedy.elapsed),
        exhaustive_us = micros(exhaustive.elapsed),
        "compared selectors"
    );

    Comparison {
        budget: config.budget,
        candidates: candidates.len(),
        greedy,
        exhaustive,
    }
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
pub(crate) fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
