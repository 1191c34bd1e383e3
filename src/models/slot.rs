//! Time slot model.
//!
//! A time slot is one teachable period: a named day plus an hour
//! within that day. The hour orders slots within a day and drives
//! the consecutive-teaching window checks.

use serde::{Deserialize, Serialize};

/// A single teachable period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier (e.g. "Mon 8-9").
    pub id: String,
    /// Day label (e.g. "Mon"). Slots sharing a label belong to one day.
    pub day: String,
    /// Hour within the day (24h). Orders slots inside a day.
    pub hour: i32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(id: impl Into<String>, day: impl Into<String>, hour: i32) -> Self {
        Self {
            id: id.into(),
            day: day.into(),
            hour,
        }
    }
}
