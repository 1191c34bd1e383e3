//! Domain model: the immutable scheduling instance.
//!
//! A `DomainModel` bundles the entity lists and the global limits. It
//! is built once, before candidate generation, and read-only from then
//! on. `DayGrid` is the derived day/hour structure the solver's
//! per-day trackers are built on.

use serde::{Deserialize, Serialize};

use super::{Course, Room, SchedulingLimits, Teacher, TimeSlot};

/// An immutable scheduling instance.
///
/// Entity order is significant: candidate generation and search both
/// iterate entities in the order given here, which makes runs on the
/// same instance deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainModel {
    /// Courses to be placed, one assignment each.
    pub courses: Vec<Course>,
    /// All teachable periods.
    pub slots: Vec<TimeSlot>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Available teachers.
    pub teachers: Vec<Teacher>,
    /// Global hard limits.
    #[serde(default)]
    pub limits: SchedulingLimits,
}

impl DomainModel {
    /// Creates a domain model with default limits.
    pub fn new(
        courses: Vec<Course>,
        slots: Vec<TimeSlot>,
        rooms: Vec<Room>,
        teachers: Vec<Teacher>,
    ) -> Self {
        Self {
            courses,
            slots,
            rooms,
            teachers,
            limits: SchedulingLimits::default(),
        }
    }

    /// Sets explicit limits.
    pub fn with_limits(mut self, limits: SchedulingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Builds the day/hour structure over this instance's slots.
    pub fn day_grid(&self) -> DayGrid {
        DayGrid::new(&self.slots)
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of teachers.
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }
}

/// Day/hour structure derived from a slot list.
///
/// Groups slots by day (days ordered by first appearance) and orders
/// each day's slots by hour. Gives every slot a (day, position) pair,
/// which is what the per-day load and consecutive-window trackers
/// index on.
#[derive(Debug, Clone)]
pub struct DayGrid {
    days: Vec<String>,
    day_slots: Vec<Vec<usize>>,
    slot_day: Vec<usize>,
    slot_pos: Vec<usize>,
}

impl DayGrid {
    /// Builds the grid from a slot list.
    pub fn new(slots: &[TimeSlot]) -> Self {
        let mut days: Vec<String> = Vec::new();
        let mut day_slots: Vec<Vec<usize>> = Vec::new();
        let mut slot_day = vec![0usize; slots.len()];

        for (i, slot) in slots.iter().enumerate() {
            let day = match days.iter().position(|d| *d == slot.day) {
                Some(d) => d,
                None => {
                    days.push(slot.day.clone());
                    day_slots.push(Vec::new());
                    days.len() - 1
                }
            };
            slot_day[i] = day;
            day_slots[day].push(i);
        }

        // Ties on hour keep input order.
        for ds in &mut day_slots {
            ds.sort_by_key(|&i| (slots[i].hour, i));
        }

        let mut slot_pos = vec![0usize; slots.len()];
        for ds in &day_slots {
            for (pos, &slot) in ds.iter().enumerate() {
                slot_pos[slot] = pos;
            }
        }

        Self {
            days,
            day_slots,
            slot_day,
            slot_pos,
        }
    }

    /// Number of distinct days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Day labels, in first-appearance order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Slot indices of a day, ordered by hour.
    pub fn slots_in_day(&self, day: usize) -> &[usize] {
        &self.day_slots[day]
    }

    /// Number of slots in a day.
    pub fn day_len(&self, day: usize) -> usize {
        self.day_slots[day].len()
    }

    /// Day index of a slot.
    pub fn day_of(&self, slot: usize) -> usize {
        self.slot_day[slot]
    }

    /// Hour-ordered position of a slot within its day.
    pub fn position_of(&self, slot: usize) -> usize {
        self.slot_pos[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("Mon 8-9", "Mon", 8),
            TimeSlot::new("Mon 9-10", "Mon", 9),
            TimeSlot::new("Tue 8-9", "Tue", 8),
            TimeSlot::new("Mon 1-2", "Mon", 13),
            TimeSlot::new("Tue 9-10", "Tue", 9),
        ]
    }

    #[test]
    fn test_grid_groups_by_day() {
        let grid = DayGrid::new(&sample_slots());
        assert_eq!(grid.day_count(), 2);
        assert_eq!(grid.days(), &["Mon".to_string(), "Tue".to_string()]);
        assert_eq!(grid.day_len(0), 3);
        assert_eq!(grid.day_len(1), 2);
    }

    #[test]
    fn test_grid_orders_by_hour() {
        let grid = DayGrid::new(&sample_slots());
        // Mon: 8-9 (idx 0), 9-10 (idx 1), 1-2 i.e. 13:00 (idx 3)
        assert_eq!(grid.slots_in_day(0), &[0, 1, 3]);
        assert_eq!(grid.position_of(0), 0);
        assert_eq!(grid.position_of(1), 1);
        assert_eq!(grid.position_of(3), 2);
        assert_eq!(grid.day_of(3), 0);
        assert_eq!(grid.day_of(4), 1);
    }

    #[test]
    fn test_domain_counts() {
        let domain = DomainModel::new(
            vec![Course::new("C1")],
            sample_slots(),
            vec![Room::new("R1"), Room::new("R2")],
            vec![Teacher::new("T1")],
        );
        assert_eq!(domain.course_count(), 1);
        assert_eq!(domain.slot_count(), 5);
        assert_eq!(domain.room_count(), 2);
        assert_eq!(domain.teacher_count(), 1);
        assert_eq!(domain.limits.max_classes_per_day, 5);
    }
}
