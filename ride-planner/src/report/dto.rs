//! Serializable views of selections for JSON output.

use serde::Serialize;

use crate::domain::{RideItem, Totals};
use crate::planner::{Algorithm, Comparison, Selection};
use crate::planner::micros;

/// A ride in a selection.
#[derive(Debug, Serialize)]
pub struct RideDto {
    /// Ride description
    pub description: String,

    /// Cost in dollars
    pub cost: f64,

    /// Ride time in minutes
    pub time: f64,
}

impl From<&RideItem> for RideDto {
    fn from(ride: &RideItem) -> Self {
        Self {
            description: ride.description().to_string(),
            cost: ride.cost(),
            time: ride.time(),
        }
    }
}

/// The result of one selector.
#[derive(Debug, Serialize)]
pub struct SelectionDto {
    pub algorithm: Algorithm,

    /// Selected rides, in input order
    pub rides: Vec<RideDto>,

    pub totals: Totals,

    /// Time spent selecting, in microseconds
    pub elapsed_us: u64,
}

impl From<&Selection<'_>> for SelectionDto {
    fn from(selection: &Selection<'_>) -> Self {
        Self {
            algorithm: selection.algorithm,
            rides: selection.rides.iter().map(|r| RideDto::from(*r)).collect(),
            totals: selection.totals,
            elapsed_us: micros(selection.elapsed),
        }
    }
}

/// Greedy and exhaustive results side by side.
#[derive(Debug, Serialize)]
pub struct ComparisonDto {
    pub budget: f64,

    /// Number of rides left after filtering
    pub candidates: usize,

    pub greedy: SelectionDto,
    pub exhaustive: SelectionDto,

    /// Extra minutes found by exhaustive search
    pub time_gap: f64,
}

impl From<&Comparison<'_>> for ComparisonDto {
    fn from(comparison: &Comparison<'_>) -> Self {
        Self {
            budget: comparison.budget,
            candidates: comparison.candidates,
            greedy: SelectionDto::from(&comparison.greedy),
            exhaustive: SelectionDto::from(&comparison.exhaustive),
            time_gap: comparison.time_gap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn selection_json() {
        let a = RideItem::new("teacups", 2.0, 3.0).unwrap();
        let selection = Selection::new(Algorithm::Greedy, vec![&a], Duration::from_micros(42));

        let json = serde_json::to_value(SelectionDto::from(&selection)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "algorithm": "greedy",
                "rides": [{"description": "teacups", "cost": 2.0, "time": 3.0}],
                "totals": {"cost": 2.0, "time": 3.0},
                "elapsed_us": 42
            })
        );
    }

    #[test]
    fn comparison_json() {
        let a = RideItem::new("A", 10.0, 60.0).unwrap();
        let b = RideItem::new("B", 10.0, 55.0).unwrap();
        let d = RideItem::new("D", 11.0, 70.0).unwrap();

        let config = crate::planner::PlannerConfig::default().with_budget(20.0);
        let comparison = crate::planner::compare(&[&a, &b, &d], &config);

        let json = serde_json::to_value(ComparisonDto::from(&comparison)).unwrap();
        assert_eq!(json["candidates"], 3);
        assert_eq!(json["time_gap"], 45.0);
        assert_eq!(json["exhaustive"]["algorithm"], "exhaustive");
        assert_eq!(json["exhaustive"]["rides"].as_array().unwrap().len(), 2);
        assert_eq!(json["greedy"]["rides"][0]["description"], "D");
    }
}
