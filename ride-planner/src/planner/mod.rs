//! Ride selection within a budget.
//!
//! Two selectors are provided so their results and running times can be
//! contrasted: a greedy heuristic ranking rides by time per dollar, and an
//! exhaustive search over every subset of a small ride set.

mod compare;
mod config;
mod exhaustive;
mod filter;
mod greedy;
mod rank;

pub use compare::{Algorithm, Comparison, Selection, compare};
pub(crate) use compare::micros;
pub use config::PlannerConfig;
pub use exhaustive::{MAX_EXHAUSTIVE_ITEMS, exhaustive_max_time, exhaustive_max_time_parallel};
pub use filter::{RideFilter, filter_rides};
pub use greedy::greedy_max_time;
pub use rank::rank_by_ratio;
