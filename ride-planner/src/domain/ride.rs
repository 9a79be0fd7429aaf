//! Ride item type.

use std::fmt;

/// Error returned when constructing an invalid ride item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ride: {reason}")]
pub struct InvalidRide {
    reason: &'static str,
}

impl InvalidRide {
    /// Returns the reason the ride was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// One ride available for purchase.
///
/// A `RideItem` is valid by construction: the description is non-empty,
/// the cost is strictly positive and both numbers are finite. Selectors
/// rely on the positive cost when ranking by time per dollar.
///
/// # Examples
///
/// ```
/// use ride_planner::domain::RideItem;
///
/// let ride = RideItem::new("haunted mansion", 12.5, 45.0).unwrap();
/// assert_eq!(ride.description(), "haunted mansion");
/// assert_eq!(ride.ratio(), 3.6);
///
/// // Free rides are rejected
/// assert!(RideItem::new("carousel", 0.0, 10.0).is_err());
///
/// // So are unnamed ones
/// assert!(RideItem::new("", 5.0, 10.0).is_err());
/// ```
#[derive(Clone, PartialEq)]
pub struct RideItem {
    description: String,
    cost: f64,
    time: f64,
}

impl RideItem {
    /// Create a ride item, validating its fields.
    ///
    /// `cost` is in dollars and `time` in minutes. A zero or negative time
    /// is accepted; such rides are dropped by the subset filter.
    pub fn new(description: impl Into<String>, cost: f64, time: f64) -> Result<Self, InvalidRide> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(InvalidRide {
                reason: "description must not be empty",
            });
        }

        if !cost.is_finite() || !time.is_finite() {
            return Err(InvalidRide {
                reason: "cost and time must be finite",
            });
        }

        if cost <= 0.0 {
            return Err(InvalidRide {
                reason: "cost must be positive",
            });
        }

        Ok(Self {
            description,
            cost,
            time,
        })
    }

    /// Human-readable description, e.g. "new enchanted world".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cost in dollars. Always positive.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Ride time in minutes.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Minutes of ride time per dollar spent.
    pub fn ratio(&self) -> f64 {
        self.time / self.cost
    }
}

impl fmt::Debug for RideItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RideItem({}, ${}, {}min)",
            self.description, self.cost, self.time
        )
    }
}

impl fmt::Display for RideItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
