//! Narrowing a ride set before selection.
//!
//! Exhaustive search is exponential in its input size, so callers shrink the
//! catalog with a [`RideFilter`] first.

use crate::domain::{RideItem, RideSet};

/// Time-range predicate with an output size cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideFilter {
    /// Minimum ride time in minutes (inclusive).
    pub min_time: f64,

    /// Maximum ride time in minutes (inclusive).
    pub max_time: f64,

    /// Maximum number of rides to keep.
    pub max_size: usize,
}

impl RideFilter {
    /// Create a filter with the given parameters.
    pub fn new(min_time: f64, max_time: f64, max_size: usize) -> Self {
        Self {
            min_time,
            max_time,
            max_size,
        }
    }

    /// Whether a ride passes the time predicate, ignoring the size cap.
    pub fn matches(&self, ride: &RideItem) -> bool {
        let time = ride.time();
        time > 0.0 && time >= self.min_time && time <= self.max_time
    }

    /// Apply the filter to `source`. See [`filter_rides`].
    pub fn apply<'a>(&self, source: &[&'a RideItem]) -> RideSet<'a> {
        source
            .iter()
            .copied()
            .filter(|ride| self.matches(ride))
            .take(self.max_size)
            .collect()
    }
}

impl Default for RideFilter {
    fn default() -> Self {
        Self {
            min_time: 0.0,
            max_time: 2000.0,
            max_size: 20,
        }
    }
}

/// Keep, in source order, the first `max_size` rides whose time lies in
/// `[min_time, max_time]` and is strictly positive.
///
/// Rides with zero or negative time never help a time-maximizing selection,
/// so they are dropped even when the range would include them.
pub fn filter_rides<'a>(
    source: &[&'a RideItem],
    min_time: f64,
    max_time: f64,
    max_size: usize,
) -> RideSet<'a> {
    RideFilter::new(min_time, max_time, max_size).apply(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(desc: &str, time: f64) -> RideItem {
        RideItem::new(desc, 1.0, time).unwrap()
    }

    fn names<'a>(rides: &[&'a RideItem]) -> Vec<&'a str> {
        rides.iter().map(|r| r.description()).collect()
    }

    #[test]
    fn keeps_rides_in_range() {
        let a = ride("a", 5.0);
        let b = ride("b", 50.0);
        let c = ride("c", 10.0);
        let d = ride("d", 20.0);

        let out = filter_rides(&[&a, &b, &c, &d], 10.0, 20.0, 10);
        assert_eq!(names(&out), vec!["c", "d"]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let a = ride("a", 10.0);
        let b = ride("b", 20.0);
        let out = filter_rides(&[&a, &b], 10.0, 20.0, 10);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn drops_non_positive_time_even_in_range() {
        let zero = ride("zero", 0.0);
        let neg = ride("neg", -3.0);
        let pos = ride("pos", 1.0);

        let out = filter_rides(&[&zero, &neg, &pos], -10.0, 10.0, 10);
        assert_eq!(names(&out), vec!["pos"]);
    }

    #[test]
    fn stops_at_max_size() {
        let rides: Vec<RideItem> = (1..=10).map(|i| ride(&format!("r{i}"), i as f64)).collect();
        let view: Vec<&RideItem> = rides.iter().collect();

        let out = filter_rides(&view, 0.0, 100.0, 3);
        assert_eq!(names(&out), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn zero_max_size_is_empty() {
        let a = ride("a", 5.0);
        assert!(filter_rides(&[&a], 0.0, 10.0, 0).is_empty());
    }

    #[test]
    fn empty_source() {
        assert!(filter_rides(&[], 0.0, 10.0, 5).is_empty());
    }

    #[test]
    fn preserves_identity() {
        let a = ride("a", 5.0);
        let out = filter_rides(&[&a], 0.0, 10.0, 5);
        assert!(std::ptr::eq(out[0], &a));
    }

    #[test]
    fn default_filter() {
        let filter = RideFilter::default();
        assert_eq!(filter.min_time, 0.0);
        assert_eq!(filter.max_time, 2000.0);
        assert_eq!(filter.max_size, 20);
    }
}
