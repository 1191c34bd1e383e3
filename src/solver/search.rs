//! Backtracking search over per-course candidate sets.
//!
//! Courses are searched most-constrained-first (smallest candidate
//! set, ties by course order — MRV). Each step commits one candidate
//! triple, updating the occupancy, load, and window trackers, and
//! recurses; a dead end retracts the commit and tries the next
//! candidate. The run is fully deterministic for a given domain and
//! candidate ordering unless a deadline interrupts it.
//!
//! # Reference
//! Russell & Norvig (2021), "Artificial Intelligence", Ch. 6:
//! Constraint Satisfaction Problems

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};

use crate::candidates::{Candidate, PerCourseCandidates};
use crate::models::{Assignment, DayGrid, DomainModel, Timetable};

use super::deadline::Deadline;
use super::trackers::{LoadTracker, OccupancyTracker, WindowTracker};

/// Expansions between deadline (and cancellation) polls.
const POLL_INTERVAL: u64 = 1024;

/// Result of one search run.
///
/// All three variants are ordinary outcomes. `Infeasible` is a proof
/// that no complete assignment exists; `TimedOut` means the search was
/// cut short and feasibility is unknown. The two are never collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete, valid timetable was found.
    Solved(Timetable),
    /// No assignment satisfies all constraints.
    Infeasible,
    /// The deadline passed (or the run was cancelled) before the
    /// search finished.
    TimedOut,
}

impl SearchOutcome {
    /// Whether this outcome carries a timetable.
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// The timetable, if solved.
    pub fn timetable(&self) -> Option<&Timetable> {
        match self {
            SearchOutcome::Solved(t) => Some(t),
            _ => None,
        }
    }
}

/// Searches for a complete assignment.
///
/// Returns `Infeasible` without searching when some course has an
/// empty candidate set. With `Deadline::none()` the result is
/// deterministic: identical inputs produce identical outcomes and,
/// when solved, identical timetables.
pub fn solve(
    domain: &DomainModel,
    candidates: &PerCourseCandidates,
    deadline: Deadline,
) -> SearchOutcome {
    solve_cancellable(domain, candidates, deadline, None)
}

/// `solve` with an external cancellation flag, polled together with
/// the deadline. Used by the portfolio runner; a cancelled run
/// reports `TimedOut`.
pub(crate) fn solve_cancellable(
    domain: &DomainModel,
    candidates: &PerCourseCandidates,
    deadline: Deadline,
    cancel: Option<&AtomicBool>,
) -> SearchOutcome {
    if let Some(course) = candidates.first_empty_set() {
        info!(
            "course `{}` has no feasible (slot, room, teacher) triple; instance is infeasible",
            domain.courses[course].id
        );
        return SearchOutcome::Infeasible;
    }
    if deadline.is_exceeded() {
        return SearchOutcome::TimedOut;
    }

    let grid = domain.day_grid();
    let mut engine = Engine {
        domain,
        grid: &grid,
        candidates,
        order: mrv_order(candidates),
        chosen: vec![None; domain.course_count()],
        occupancy: OccupancyTracker::new(
            domain.slot_count(),
            domain.room_count(),
            domain.teacher_count(),
        ),
        load: LoadTracker::new(domain, &grid),
        window: WindowTracker::new(
            &grid,
            domain.teacher_count(),
            domain.limits.max_consecutive_teaching,
        ),
        deadline,
        cancel,
        expansions: 0,
    };

    let outcome = match engine.descend(0) {
        Step::Complete => SearchOutcome::Solved(engine.assemble()),
        Step::Exhausted => SearchOutcome::Infeasible,
        Step::Aborted => SearchOutcome::TimedOut,
    };
    debug!(
        "search finished after {} node expansions: {}",
        engine.expansions,
        match &outcome {
            SearchOutcome::Solved(_) => "solved",
            SearchOutcome::Infeasible => "infeasible",
            SearchOutcome::TimedOut => "timed out",
        }
    );
    outcome
}

/// Course order: ascending candidate count, ties by course index.
fn mrv_order(candidates: &PerCourseCandidates) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.course_count()).collect();
    order.sort_by_key(|&c| (candidates.for_course(c).len(), c));
    order
}

enum Step {
    /// Every course below this depth is assigned.
    Complete,
    /// No candidate works at this depth; backtrack.
    Exhausted,
    /// Deadline passed or cancellation observed.
    Aborted,
}

struct Engine<'a> {
    domain: &'a DomainModel,
    grid: &'a DayGrid,
    candidates: &'a PerCourseCandidates,
    order: Vec<usize>,
    chosen: Vec<Option<Candidate>>,
    occupancy: OccupancyTracker,
    load: LoadTracker,
    window: WindowTracker,
    deadline: Deadline,
    cancel: Option<&'a AtomicBool>,
    expansions: u64,
}

impl Engine<'_> {
    fn descend(&mut self, depth: usize) -> Step {
        if depth == self.order.len() {
            return Step::Complete;
        }
        let course = self.order[depth];

        for &cand in self.candidates.for_course(course) {
            self.expansions += 1;
            if self.expansions % POLL_INTERVAL == 0 && self.should_abort() {
                return Step::Aborted;
            }

            let day = self.grid.day_of(cand.slot);
            let pos = self.grid.position_of(cand.slot);

            // Cheapest check first; reject on the first failure.
            if !self.occupancy.room_free(cand.slot, cand.room)
                || !self.occupancy.teacher_free(cand.slot, cand.teacher)
                || !self.load.can_assign(cand.teacher, day)
                || !self.window.fits(cand.teacher, day, pos, self.grid.day_len(day))
            {
                continue;
            }

            self.occupancy.claim(cand.slot, cand.room, cand.teacher);
            self.load.record(cand.teacher, day);
            self.window.set(cand.teacher, day, pos);
            self.chosen[course] = Some(cand);

            match self.descend(depth + 1) {
                Step::Complete => return Step::Complete,
                Step::Aborted => return Step::Aborted,
                Step::Exhausted => {
                    self.occupancy.release(cand.slot, cand.room, cand.teacher);
                    self.load.erase(cand.teacher, day);
                    self.window.clear(cand.teacher, day, pos);
                    self.chosen[course] = None;
                }
            }
        }

        Step::Exhausted
    }

    fn should_abort(&self) -> bool {
        if self.deadline.is_exceeded() {
            return true;
        }
        match self.cancel {
            Some(flag) => flag.load(Ordering::Relaxed),
            None => false,
        }
    }

    /// Converts the completed assignment state into a timetable, one
    /// record per course in course order. Validity was guaranteed
    /// incrementally; nothing is re-checked here.
    fn assemble(&self) -> Timetable {
        let mut timetable = Timetable::new();
        for (course, chosen) in self.domain.courses.iter().zip(&self.chosen) {
            let cand = chosen.expect("complete search left a course unassigned");
            timetable.add_assignment(Assignment::new(
                &course.id,
                &self.domain.slots[cand.slot].id,
                &self.domain.rooms[cand.room].id,
                &self.domain.teachers[cand.teacher].id,
            ));
        }
        timetable
    }
}
