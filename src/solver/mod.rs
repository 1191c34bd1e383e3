//! Backtracking search engine.
//!
//! Finds one complete assignment of courses to (slot, room, teacher)
//! triples satisfying all cross-course constraints, or proves that
//! none exists. The engine is single-threaded and deterministic;
//! `portfolio` layers optional parallel workers on top without
//! sharing any search state.
//!
//! # Outcomes
//!
//! `solve` returns a `SearchOutcome`: `Solved` with a timetable,
//! `Infeasible` (a proof, not an error), or `TimedOut` when a
//! deadline cut the run short. Timeout and infeasibility are distinct
//! everywhere; only `Infeasible` means "no schedule exists".

mod deadline;
mod portfolio;
mod search;
mod trackers;

pub use deadline::Deadline;
pub use portfolio::{solve_portfolio, PortfolioConfig};
pub use search::{solve, SearchOutcome};
