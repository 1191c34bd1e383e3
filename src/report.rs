//! Human-readable rendering of search outcomes.
//!
//! Produces an itemized schedule plus a per-teacher load summary for
//! solved instances, and clearly distinct statements for the two
//! unsolved outcomes: "no feasible schedule exists" (proven) versus
//! "did not finish in time" (unknown).

use std::fmt::Write;

use crate::models::{DomainModel, Timetable};
use crate::solver::SearchOutcome;

/// Renders an outcome as display text.
pub fn render_outcome(domain: &DomainModel, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Solved(timetable) => render_timetable(domain, timetable),
        SearchOutcome::Infeasible => {
            "No feasible schedule exists under the current constraints.\n".to_string()
        }
        SearchOutcome::TimedOut => {
            "The search did not finish before the deadline; feasibility is unknown.\n".to_string()
        }
    }
}

/// Renders a timetable: assignments ordered by day, hour, then room,
/// followed by the teacher load summary.
pub fn render_timetable(domain: &DomainModel, timetable: &Timetable) -> String {
    let grid = domain.day_grid();
    let slot_rank = |slot_id: &str| -> (usize, usize) {
        domain
            .slots
            .iter()
            .position(|s| s.id == slot_id)
            .map(|i| (grid.day_of(i), grid.position_of(i)))
            .unwrap_or((usize::MAX, usize::MAX))
    };

    let mut rows: Vec<_> = timetable.assignments.iter().collect();
    rows.sort_by(|a, b| {
        (slot_rank(&a.slot_id), &a.room_id).cmp(&(slot_rank(&b.slot_id), &b.room_id))
    });

    let mut out = String::from("Schedule found:\n");
    for a in rows {
        let _ = writeln!(
            out,
            "{:<14} -> {:<11} | {:<25} | Teacher: {}",
            a.course_id, a.slot_id, a.room_id, a.teacher_id
        );
    }

    out.push_str("\nTeacher load summary:\n");
    for (teacher, load) in timetable.teacher_loads() {
        let _ = writeln!(out, "{teacher:<14} : {load}");
    }
    out
}
