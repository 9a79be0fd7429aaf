//! Aggregate cost and time of a set of rides.

use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use super::RideItem;

/// Ordered borrowed view of rides owned by a [`Catalog`](crate::catalog::Catalog).
///
/// Used for the full catalog, filtered subsets and selection results alike.
pub type RideSet<'a> = Vec<&'a RideItem>;

/// Total cost (dollars) and time (minutes) of a set of rides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub cost: f64,
    pub time: f64,
}

impl Totals {
    /// The totals of an empty set.
    pub const ZERO: Totals = Totals {
        cost: 0.0,
        time: 0.0,
    };

    /// Totals of a single ride.
    pub fn of(ride: &RideItem) -> Self {
        Self {
            cost: ride.cost(),
            time: ride.time(),
        }
    }

    /// Whether the cost fits within `budget` (inclusive).
    pub fn fits(&self, budget: f64) -> bool {
        self.cost <= budget
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            cost: self.cost + rhs.cost,
            time: self.time + rhs.time,
        }
    }
}

impl<'a> Sum<&'a RideItem> for Totals {
    fn sum<I: Iterator<Item = &'a RideItem>>(iter: I) -> Self {
        iter.fold(Totals::ZERO, |acc, ride| acc + Totals::of(ride))
    }
}

/// Sum the costs and times of `rides`, in order.
///
/// An empty slice yields [`Totals::ZERO`].
pub fn aggregate(rides: &[&RideItem]) -> Totals {
    rides.iter().copied().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(desc: &str, cost: f64, time: f64) -> RideItem {
        RideItem::new(desc, cost, time).unwrap()
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(aggregate(&[]), Totals::ZERO);
    }

    #[test]
    fn sums_cost_and_time() {
        let a = ride("a", 10.0, 60.0);
        let b = ride("b", 20.0, 50.0);
        let c = ride("c", 15.0, 90.0);

        let totals = aggregate(&[&a, &b, &c]);
        assert_eq!(totals.cost, 45.0);
        assert_eq!(totals.time, 200.0);
    }

    #[test]
    fn negative_time_counts() {
        let a = ride("a", 1.0, 10.0);
        let b = ride("b", 1.0, -4.0);
        assert_eq!(aggregate(&[&a, &b]).time, 6.0);
    }

    #[test]
    fn fits_is_inclusive() {
        let totals = Totals {
            cost: 25.0,
            time: 1.0,
        };
        assert!(totals.fits(25.0));
        assert!(totals.fits(30.0));
        assert!(!totals.fits(24.99));
    }
}
