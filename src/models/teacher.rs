//! Teacher model.
//!
//! Teachers carry their course qualifications, the AP subset of those
//! qualifications they are certified for, the slots they are available
//! in, and the number of prep periods they must keep free each day.

use serde::{Deserialize, Serialize};

/// A teacher that can be assigned to courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Course IDs this teacher is qualified to teach.
    pub qualifications: Vec<String>,
    /// AP course IDs this teacher is certified for.
    /// Must be a subset of `qualifications`.
    pub ap_certified: Vec<String>,
    /// Slot IDs this teacher is available in.
    pub availability: Vec<String>,
    /// Prep periods that must remain free per day.
    pub prep_periods_per_day: i32,
}

impl Teacher {
    /// Creates a new teacher with no qualifications and no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            qualifications: Vec::new(),
            ap_certified: Vec::new(),
            availability: Vec::new(),
            prep_periods_per_day: 0,
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a course qualification.
    pub fn with_qualification(mut self, course_id: impl Into<String>) -> Self {
        self.qualifications.push(course_id.into());
        self
    }

    /// Adds an AP certification. The course should also appear in
    /// `qualifications`; `validation` flags entries that do not.
    pub fn with_ap_certification(mut self, course_id: impl Into<String>) -> Self {
        self.ap_certified.push(course_id.into());
        self
    }

    /// Sets the available slot IDs.
    pub fn with_availability(mut self, slot_ids: Vec<String>) -> Self {
        self.availability = slot_ids;
        self
    }

    /// Sets the required prep periods per day.
    pub fn with_prep_periods(mut self, periods: i32) -> Self {
        self.prep_periods_per_day = periods;
        self
    }

    /// Whether this teacher is qualified for a course.
    pub fn is_qualified(&self, course_id: &str) -> bool {
        self.qualifications.iter().any(|c| c == course_id)
    }

    /// Whether this teacher holds the AP certification for a course.
    pub fn is_ap_certified(&self, course_id: &str) -> bool {
        self.ap_certified.iter().any(|c| c == course_id)
    }

    /// Whether this teacher is available in a slot.
    pub fn is_available(&self, slot_id: &str) -> bool {
        self.availability.iter().any(|s| s == slot_id)
    }
}
