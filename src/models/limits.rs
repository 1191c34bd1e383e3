//! Global scheduling limits.

use serde::{Deserialize, Serialize};

/// Global hard limits applied to every teacher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SchedulingLimits {
    /// Maximum number of consecutive teaching slots within a day.
    pub max_consecutive_teaching: i32,
    /// Maximum classes any teacher may teach in one day (before the
    /// prep-period reduction is applied).
    pub max_classes_per_day: i32,
}

impl SchedulingLimits {
    /// Creates limits with explicit values.
    pub fn new(max_consecutive_teaching: i32, max_classes_per_day: i32) -> Self {
        Self {
            max_consecutive_teaching,
            max_classes_per_day,
        }
    }
}

impl Default for SchedulingLimits {
    /// Default limits: at most 3 consecutive slots, at most 5 classes per day.
    fn default() -> Self {
        Self::new(3, 5)
    }
}
