//! Ride ranking for the greedy selector.

use crate::domain::{RideItem, RideSet};

/// Rank rides by time per dollar, best first.
///
/// The sort is stable, so rides with equal ratios keep their input order.
/// Returns a new ordering; the input is untouched.
pub fn rank_by_ratio<'a>(rides: &[&'a RideItem]) -> RideSet<'a> {
    ranked_indices(rides).into_iter().map(|i| rides[i]).collect()
}

/// Input positions of `rides`, ordered as [`rank_by_ratio`] orders them.
pub(crate) fn ranked_indices(rides: &[&RideItem]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..rides.len()).collect();
    // Highest ratio first, hence b cmp a
    ranked.sort_by(|&a, &b| rides[b].ratio().total_cmp(&rides[a].ratio()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(desc: &str, cost: f64, time: f64) -> RideItem {
        RideItem::new(desc, cost, time).unwrap()
    }

    fn names<'a>(rides: &[&'a RideItem]) -> Vec<&'a str> {
        rides.iter().map(|r| r.description()).collect()
    }

    #[test]
    fn highest_ratio_first() {
        let a = ride("a", 10.0, 10.0); // 1.0
        let b = ride("b", 2.0, 10.0); // 5.0
        let c = ride("c", 4.0, 10.0); // 2.5

        assert_eq!(names(&rank_by_ratio(&[&a, &b, &c])), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let a = ride("a", 10.0, 60.0); // 6.0
        let b = ride("b", 20.0, 50.0); // 2.5
        let c = ride("c", 15.0, 90.0); // 6.0

        assert_eq!(names(&rank_by_ratio(&[&a, &b, &c])), vec!["a", "c", "b"]);
        assert_eq!(names(&rank_by_ratio(&[&c, &b, &a])), vec!["c", "a", "b"]);
    }

    #[test]
    fn negative_time_ranks_last() {
        let neg = ride("neg", 1.0, -1.0);
        let zero = ride("zero", 1.0, 0.0);
        let pos = ride("pos", 1.0, 1.0);

        assert_eq!(
            names(&rank_by_ratio(&[&neg, &zero, &pos])),
            vec!["pos", "zero", "neg"]
        );
    }

    #[test]
    fn input_untouched() {
        let a = ride("a", 10.0, 1.0);
        let b = ride("b", 1.0, 10.0);
        let input = vec![&a, &b];
        let _ = rank_by_ratio(&input);
        assert_eq!(names(&input), vec!["a", "b"]);
    }

    #[test]
    fn indices_follow_ranking() {
        let a = ride("a", 10.0, 10.0); // 1.0
        let b = ride("b", 2.0, 10.0); // 5.0
        let c = ride("c", 4.0, 10.0); // 2.5

        assert_eq!(ranked_indices(&[&a, &b, &c]), vec![1, 2, 0]);
    }

    #[test]
    fn empty() {
        assert!(rank_by_ratio(&[]).is_empty());
        assert!(ranked_indices(&[]).is_empty());
    }
}
