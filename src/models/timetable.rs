//! Timetable (solution) model.
//!
//! A timetable is a complete assignment of courses to (slot, room,
//! teacher) triples. It is only ever produced by the search engine,
//! whose incremental checks guarantee validity, so it carries no
//! violation bookkeeping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single course placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned course ID.
    pub course_id: String,
    /// Assigned slot ID.
    pub slot_id: String,
    /// Assigned room ID.
    pub room_id: String,
    /// Assigned teacher ID.
    pub teacher_id: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        course_id: impl Into<String>,
        slot_id: impl Into<String>,
        room_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            slot_id: slot_id.into(),
            room_id: room_id.into(),
            teacher_id: teacher_id.into(),
        }
    }
}

/// A complete schedule: one assignment per course, in course order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Course assignments.
    pub assignments: Vec<Assignment>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds the assignment for a course.
    pub fn assignment_for_course(&self, course_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.course_id == course_id)
    }

    /// Returns all assignments for a teacher.
    pub fn assignments_for_teacher(&self, teacher_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .collect()
    }

    /// Returns all assignments in a slot.
    pub fn assignments_in_slot(&self, slot_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.slot_id == slot_id)
            .collect()
    }

    /// Per-teacher count of assigned classes.
    ///
    /// Pure derived view; teachers with no assignments are absent.
    pub fn teacher_loads(&self) -> BTreeMap<String, usize> {
        let mut loads = BTreeMap::new();
        for a in &self.assignments {
            *loads.entry(a.teacher_id.clone()).or_insert(0) += 1;
        }
        loads
    }
}
