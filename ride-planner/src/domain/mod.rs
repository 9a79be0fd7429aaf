//! Domain types for the ride planner.
//!
//! Rides enforce their invariants at construction time, so the selectors
//! that receive them can trust every cost to be positive.

mod ride;
mod totals;

pub use ride::{InvalidRide, RideItem};
pub use totals::{RideSet, Totals, aggregate};
