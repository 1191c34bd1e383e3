//! Room model.
//!
//! Rooms carry a category that must match the category a course
//! requires, and an optional availability list. A room without an
//! availability list is usable in every slot.

use serde::{Deserialize, Serialize};

/// A room that can host courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room category (e.g. "standard", "science_lab").
    pub category: String,
    /// Slot IDs in which this room may be used.
    /// `None` = available in every slot.
    pub availability: Option<Vec<String>>,
}

impl Room {
    /// Creates a new standard room, available in every slot.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: "standard".to_string(),
            availability: None,
        }
    }

    /// Sets the room category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Restricts availability to the given slot IDs.
    pub fn with_availability(mut self, slot_ids: Vec<String>) -> Self {
        self.availability = Some(slot_ids);
        self
    }

    /// Whether this room may be used in the given slot.
    pub fn is_available(&self, slot_id: &str) -> bool {
        match &self.availability {
            None => true,
            Some(slots) => slots.iter().any(|s| s == slot_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("A-Lab-201").with_category("science_lab");
        assert_eq!(r.id, "A-Lab-201");
        assert_eq!(r.category, "science_lab");
    }

    #[test]
    fn test_room_default_availability() {
        let r = Room::new("A-101");
        assert!(r.is_available("Mon 8-9"));
        assert!(r.is_available("anything"));
    }

    #[test]
    fn test_room_restricted_availability() {
        let r = Room::new("A-101").with_availability(vec!["Mon 8-9".into(), "Tue 8-9".into()]);
        assert!(r.is_available("Mon 8-9"));
        assert!(!r.is_available("Wed 8-9"));
    }
}
