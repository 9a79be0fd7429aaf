//! Rendering selections for people and for machines.

mod dto;

use std::fmt;

use crate::domain::{RideItem, aggregate};
use crate::planner::{Comparison, Selection};

pub use dto::{ComparisonDto, RideDto, SelectionDto};

/// Plain-text listing of a set of rides and their grand totals.
pub struct RideListing<'r, 'a> {
    rides: &'r [&'a RideItem],
}

impl<'r, 'a> RideListing<'r, 'a> {
    pub fn new(rides: &'r [&'a RideItem]) -> Self {
        Self { rides }
    }
}

impl fmt::Display for RideListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rides.is_empty() {
            return writeln!(f, "[empty ride list]");
        }

        for ride in self.rides {
            writeln!(
                f,
                "{} ==> cost {} dollars; time {} minutes",
                ride.description(),
                ride.cost(),
                ride.time()
            )?;
        }

        let totals = aggregate(self.rides);
        writeln!(f, "> Grand total cost: {} dollars", totals.cost)?;
        writeln!(f, "> Grand total time: {} minutes", totals.time)
    }
}

/// Plain-text report of one selection.
pub struct SelectionReport<'s, 'a>(pub &'s Selection<'a>);

impl fmt::Display for SelectionReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selection = self.0;
        writeln!(
            f,
            "*** {} selection ({:.2?}) ***",
            selection.algorithm, selection.elapsed
        )?;
        write!(f, "{}", RideListing::new(&selection.rides))
    }
}

/// Plain-text report of a greedy/exhaustive comparison.
pub struct ComparisonReport<'c, 'a>(pub &'c Comparison<'a>);

impl fmt::Display for ComparisonReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.0;
        writeln!(
            f,
            "Budget: {} dollars over {} candidate rides",
            comparison.budget, comparison.candidates
        )?;
        writeln!(f)?;
        writeln!(f, "{}", SelectionReport(&comparison.greedy))?;
        writeln!(f, "{}", SelectionReport(&comparison.exhaustive))?;

        if comparison.greedy_is_optimal() {
            writeln!(f, "Greedy selection is optimal.")
        } else {
            writeln!(
                f,
                "Exhaustive search found {} more minutes than greedy.",
                comparison.time_gap()
            )
        }
    }
}
