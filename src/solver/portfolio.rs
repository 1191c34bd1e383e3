//! Portfolio search: independent workers over reordered candidates.
//!
//! Each worker runs the plain backtracking search on its own copy of
//! the mutable state; worker 0 keeps the baseline candidate order,
//! every other worker searches a seeded shuffle of the same sets.
//! Workers share exactly two things: a cancellation flag, observed at
//! their periodic poll point, and a write-once result slot. The first
//! definitive outcome — `Solved` or `Infeasible`, either of which
//! holds for every ordering — wins and cancels the rest. `TimedOut`
//! is returned only when no worker finished.
//!
//! A correctness-neutral accelerator: anything the portfolio solves,
//! the plain search also solves given enough time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::thread;

use log::debug;

use crate::candidates::PerCourseCandidates;
use crate::models::DomainModel;

use super::deadline::Deadline;
use super::search::{solve_cancellable, SearchOutcome};

/// Portfolio runner settings.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioConfig {
    /// Number of workers. One worker degenerates to the plain search.
    pub workers: usize,
    /// Base seed for the candidate shuffles of workers 1..n.
    pub seed: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            seed: 0x5c4ed,
        }
    }
}

/// Runs `workers` independent searches and returns the first
/// definitive outcome.
///
/// Unlike the plain search, which worker finishes first may vary from
/// run to run; the *status* is still deterministic without a deadline
/// (a feasible instance is always `Solved`, an infeasible one always
/// `Infeasible`), but the returned timetable may be any worker's.
pub fn solve_portfolio(
    domain: &DomainModel,
    candidates: &PerCourseCandidates,
    deadline: Deadline,
    config: PortfolioConfig,
) -> SearchOutcome {
    if config.workers <= 1 {
        return solve_cancellable(domain, candidates, deadline, None);
    }

    let stop = AtomicBool::new(false);
    let slot: OnceLock<SearchOutcome> = OnceLock::new();

    thread::scope(|scope| {
        for worker in 0..config.workers {
            let stop = &stop;
            let slot = &slot;
            let ordered = if worker == 0 {
                candidates.clone()
            } else {
                candidates.shuffled(config.seed.wrapping_add(worker as u64))
            };
            let _ = scope.spawn(move || {
                let outcome = solve_cancellable(domain, &ordered, deadline, Some(stop));
                match outcome {
                    SearchOutcome::Solved(_) | SearchOutcome::Infeasible => {
                        // Write-once: a slower definitive worker loses
                        // the set race and changes nothing.
                        if slot.set(outcome).is_ok() {
                            debug!("portfolio worker {worker} finished first");
                            stop.store(true, Ordering::Relaxed);
                        }
                    }
                    SearchOutcome::TimedOut => {}
                }
            });
        }
    });

    slot.into_inner().unwrap_or(SearchOutcome::TimedOut)
}
