//! Per-course candidate generation (unary pruning).
//!
//! For each course, computes the (slot, room, teacher) triples that
//! satisfy every constraint depending on that course alone:
//!
//! 1. The teacher is qualified for the course.
//! 2. If the course is AP, the teacher holds the AP certification.
//! 3. The room's category matches the course's required category.
//! 4. The teacher is available in the slot.
//! 5. The room is available in the slot.
//!
//! Only feasible triples are materialized, so the representation
//! scales with what survives pruning rather than with the full
//! course × slot × room × teacher cross product. Cross-course
//! constraints (occupancy, daily load, consecutive teaching) are
//! enforced later, during search.

use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::DomainModel;

/// A feasible (slot, room, teacher) triple for one course.
///
/// Fields are indices into the `DomainModel` entity vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Slot index.
    pub slot: usize,
    /// Room index.
    pub room: usize,
    /// Teacher index.
    pub teacher: usize,
}

/// The candidate sets of every course, in course order.
///
/// Built once per run and read-only during search. Within a course,
/// candidates are ordered by (slot, room, teacher) index, so two
/// builds over the same domain are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerCourseCandidates {
    sets: Vec<Vec<Candidate>>,
}

impl PerCourseCandidates {
    /// Builds from explicit per-course sets.
    #[cfg(test)]
    pub(crate) fn from_sets(sets: Vec<Vec<Candidate>>) -> Self {
        Self { sets }
    }

    /// Candidate set of a course.
    pub fn for_course(&self, course: usize) -> &[Candidate] {
        &self.sets[course]
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.sets.len()
    }

    /// Index of the first course with no candidates, if any.
    ///
    /// Such a course proves the instance infeasible before any
    /// search starts.
    pub fn first_empty_set(&self) -> Option<usize> {
        self.sets.iter().position(|s| s.is_empty())
    }

    /// Total number of candidates across all courses.
    pub fn total_candidates(&self) -> usize {
        self.sets.iter().map(|s| s.len()).sum()
    }

    /// A copy with every course's candidate order shuffled by a
    /// seeded RNG. Used by portfolio workers to explore the same
    /// sets in different orders; the sets themselves are unchanged.
    pub fn shuffled(&self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sets = self.sets.clone();
        for set in &mut sets {
            set.shuffle(&mut rng);
        }
        Self { sets }
    }
}

/// Builds the per-course candidate sets for a domain.
///
/// Pure function of the domain: no side effects beyond logging, and
/// deterministic. An empty set for some course is an expected
/// outcome (the instance is infeasible), not an error.
pub fn build_candidates(domain: &DomainModel) -> PerCourseCandidates {
    // Availability lookups once per entity instead of per triple.
    let teacher_slots: Vec<HashSet<usize>> = domain
        .teachers
        .iter()
        .map(|t| {
            domain
                .slots
                .iter()
                .enumerate()
                .filter(|(_, s)| t.is_available(&s.id))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();
    let room_slots: Vec<HashSet<usize>> = domain
        .rooms
        .iter()
        .map(|r| {
            domain
                .slots
                .iter()
                .enumerate()
                .filter(|(_, s)| r.is_available(&s.id))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let mut sets = Vec::with_capacity(domain.course_count());

    for course in &domain.courses {
        let rooms_ok: Vec<usize> = domain
            .rooms
            .iter()
            .enumerate()
            .filter(|(_, r)| r.category == course.room_category)
            .map(|(i, _)| i)
            .collect();
        let teachers_ok: Vec<usize> = domain
            .teachers
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                t.is_qualified(&course.id) && (!course.ap || t.is_ap_certified(&course.id))
            })
            .map(|(i, _)| i)
            .collect();

        let mut set = Vec::new();
        for slot in 0..domain.slot_count() {
            for &room in &rooms_ok {
                if !room_slots[room].contains(&slot) {
                    continue;
                }
                for &teacher in &teachers_ok {
                    if !teacher_slots[teacher].contains(&slot) {
                        continue;
                    }
                    set.push(Candidate {
                        slot,
                        room,
                        teacher,
                    });
                }
            }
        }

        debug!(
            "course `{}`: {} candidates ({} rooms, {} teachers)",
            course.id,
            set.len(),
            rooms_ok.len(),
            teachers_ok.len()
        );
        sets.push(set);
    }

    let candidates = PerCourseCandidates { sets };
    let cross_product =
        domain.course_count() * domain.slot_count() * domain.room_count() * domain.teacher_count();
    info!(
        "candidate generation: {} feasible triples out of {} combinations",
        candidates.total_candidates(),
        cross_product
    );
    candidates
}
