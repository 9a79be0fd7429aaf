//! Ride planner.
//!
//! Picks the rides that maximize total ride time within a dollar budget,
//! contrasting a greedy time-per-dollar heuristic with an exhaustive search
//! over every subset of a small ride set.

pub mod catalog;
pub mod domain;
pub mod planner;
pub mod report;
