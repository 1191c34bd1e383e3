//! Course model.
//!
//! A course is a unit of instruction to be placed into exactly one
//! (time slot, room, teacher) triple. Courses carry their room
//! requirements and an AP flag that restricts which teachers may
//! take them.

use serde::{Deserialize, Serialize};

/// A course to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Required room category (e.g. "standard", "science_lab").
    pub room_category: String,
    /// Whether this is an AP course. AP courses may only be taught by
    /// teachers holding the matching AP certification.
    pub ap: bool,
}

impl Course {
    /// Creates a new course requiring a standard room.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            room_category: "standard".to_string(),
            ap: false,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the required room category.
    pub fn with_room_category(mut self, category: impl Into<String>) -> Self {
        self.room_category = category.into();
        self
    }

    /// Marks this course as AP.
    pub fn with_ap(mut self) -> Self {
        self.ap = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("PHY101")
            .with_name("Physics 101")
            .with_room_category("science_lab");

        assert_eq!(c.id, "PHY101");
        assert_eq!(c.name, "Physics 101");
        assert_eq!(c.room_category, "science_lab");
        assert!(!c.ap);
    }

    #[test]
    fn test_course_defaults_to_standard_room() {
        let c = Course::new("ENG101");
        assert_eq!(c.room_category, "standard");
    }

    #[test]
    fn test_ap_course() {
        let c = Course::new("APCALC").with_ap();
        assert!(c.ap);
    }
}
