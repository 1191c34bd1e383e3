//! Incremental feasibility state.
//!
//! The three trackers hold the cross-course state the search updates
//! as it commits and retracts assignments:
//!
//! - `OccupancyTracker`: which (slot, room) and (slot, teacher) pairs
//!   are taken.
//! - `LoadTracker`: per (teacher, day) class counts against the cap
//!   `min(slots_in_day − prep, max_classes_per_day)`, clamped at zero.
//! - `WindowTracker`: per (teacher, day) hour-ordered occupancy flags
//!   for the consecutive-teaching check.
//!
//! All three are exclusively owned by one search run and discarded at
//! its end. Claiming an occupied pair or releasing a free one is an
//! implementation bug, not a data problem, and panics.

use crate::models::{DayGrid, DomainModel};

/// Occupied (slot, room) and (slot, teacher) pairs.
#[derive(Debug)]
pub(crate) struct OccupancyTracker {
    room_busy: Vec<bool>,
    teacher_busy: Vec<bool>,
    rooms: usize,
    teachers: usize,
}

impl OccupancyTracker {
    pub(crate) fn new(slots: usize, rooms: usize, teachers: usize) -> Self {
        Self {
            room_busy: vec![false; slots * rooms],
            teacher_busy: vec![false; slots * teachers],
            rooms,
            teachers,
        }
    }

    pub(crate) fn room_free(&self, slot: usize, room: usize) -> bool {
        !self.room_busy[slot * self.rooms + room]
    }

    pub(crate) fn teacher_free(&self, slot: usize, teacher: usize) -> bool {
        !self.teacher_busy[slot * self.teachers + teacher]
    }

    pub(crate) fn claim(&mut self, slot: usize, room: usize, teacher: usize) {
        let r = slot * self.rooms + room;
        let t = slot * self.teachers + teacher;
        assert!(!self.room_busy[r], "room {room} claimed twice in slot {slot}");
        assert!(
            !self.teacher_busy[t],
            "teacher {teacher} claimed twice in slot {slot}"
        );
        self.room_busy[r] = true;
        self.teacher_busy[t] = true;
    }

    pub(crate) fn release(&mut self, slot: usize, room: usize, teacher: usize) {
        let r = slot * self.rooms + room;
        let t = slot * self.teachers + teacher;
        assert!(self.room_busy[r], "released free room {room} in slot {slot}");
        assert!(
            self.teacher_busy[t],
            "released free teacher {teacher} in slot {slot}"
        );
        self.room_busy[r] = false;
        self.teacher_busy[t] = false;
    }
}

/// Per (teacher, day) class counts against precomputed caps.
#[derive(Debug)]
pub(crate) struct LoadTracker {
    counts: Vec<i32>,
    caps: Vec<i32>,
    days: usize,
}

impl LoadTracker {
    /// Precomputes every teacher/day cap:
    /// `min(slots_in_day − prep, max_classes_per_day)`, clamped at
    /// zero when the prep requirement exceeds the day length.
    pub(crate) fn new(domain: &DomainModel, grid: &DayGrid) -> Self {
        let days = grid.day_count();
        let mut caps = Vec::with_capacity(domain.teacher_count() * days);
        for teacher in &domain.teachers {
            for day in 0..days {
                let allowed = (grid.day_len(day) as i32 - teacher.prep_periods_per_day)
                    .min(domain.limits.max_classes_per_day)
                    .max(0);
                caps.push(allowed);
            }
        }
        Self {
            counts: vec![0; domain.teacher_count() * days],
            caps,
            days,
        }
    }

    pub(crate) fn can_assign(&self, teacher: usize, day: usize) -> bool {
        let i = teacher * self.days + day;
        self.counts[i] < self.caps[i]
    }

    pub(crate) fn record(&mut self, teacher: usize, day: usize) {
        self.counts[teacher * self.days + day] += 1;
    }

    pub(crate) fn erase(&mut self, teacher: usize, day: usize) {
        let i = teacher * self.days + day;
        assert!(self.counts[i] > 0, "erased load for an idle teacher/day");
        self.counts[i] -= 1;
    }

    #[cfg(test)]
    pub(crate) fn cap(&self, teacher: usize, day: usize) -> i32 {
        self.caps[teacher * self.days + day]
    }
}

/// Per (teacher, day) hour-ordered occupancy flags.
///
/// Supports the incremental consecutive-teaching check: a candidate
/// slot is admissible iff every contiguous window of
/// `max_consecutive + 1` day positions containing it would hold at
/// most `max_consecutive` teaching slots. Only windows that include
/// the new position are examined.
#[derive(Debug)]
pub(crate) struct WindowTracker {
    flags: Vec<bool>,
    day_offsets: Vec<usize>,
    slots_per_teacher: usize,
    max_consecutive: usize,
}

impl WindowTracker {
    pub(crate) fn new(grid: &DayGrid, teachers: usize, max_consecutive: i32) -> Self {
        let mut day_offsets = Vec::with_capacity(grid.day_count());
        let mut total = 0;
        for day in 0..grid.day_count() {
            day_offsets.push(total);
            total += grid.day_len(day);
        }
        Self {
            flags: vec![false; teachers * total],
            day_offsets,
            slots_per_teacher: total,
            max_consecutive: max_consecutive.max(0) as usize,
        }
    }

    fn index(&self, teacher: usize, day: usize, pos: usize) -> usize {
        teacher * self.slots_per_teacher + self.day_offsets[day] + pos
    }

    /// Whether teaching at `pos` keeps every window containing it
    /// within the limit. `day_len` is the number of positions in the
    /// day; days shorter than a full window trivially pass.
    pub(crate) fn fits(&self, teacher: usize, day: usize, pos: usize, day_len: usize) -> bool {
        let window = self.max_consecutive + 1;
        if day_len < window {
            return true;
        }
        let lo = pos.saturating_sub(self.max_consecutive);
        let hi = pos.min(day_len - window);
        for start in lo..=hi {
            let mut taught = 1; // the candidate slot itself
            for p in start..start + window {
                if p != pos && self.flags[self.index(teacher, day, p)] {
                    taught += 1;
                }
            }
            if taught > self.max_consecutive {
                return false;
            }
        }
        true
    }

    pub(crate) fn set(&mut self, teacher: usize, day: usize, pos: usize) {
        let i = self.index(teacher, day, pos);
        assert!(!self.flags[i], "window flag set twice");
        self.flags[i] = true;
    }

    pub(crate) fn clear(&mut self, teacher: usize, day: usize, pos: usize) {
        let i = self.index(teacher, day, pos);
        assert!(self.flags[i], "cleared an unset window flag");
        self.flags[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room, SchedulingLimits, Teacher, TimeSlot};

    fn six_slot_day() -> Vec<TimeSlot> {
        (0..6)
            .map(|h| TimeSlot::new(format!("Mon {h}"), "Mon", 8 + h))
            .collect()
    }

    #[test]
    fn test_occupancy_claim_release() {
        let mut occ = OccupancyTracker::new(2, 2, 2);
        assert!(occ.room_free(0, 0));
        assert!(occ.teacher_free(0, 1));

        occ.claim(0, 0, 1);
        assert!(!occ.room_free(0, 0));
        assert!(!occ.teacher_free(0, 1));
        // Other slot untouched.
        assert!(occ.room_free(1, 0));
        assert!(occ.teacher_free(1, 1));

        occ.release(0, 0, 1);
        assert!(occ.room_free(0, 0));
        assert!(occ.teacher_free(0, 1));
    }

    #[test]
    #[should_panic(expected = "claimed twice")]
    fn test_occupancy_double_claim_panics() {
        let mut occ = OccupancyTracker::new(1, 1, 1);
        occ.claim(0, 0, 0);
        occ.claim(0, 0, 0);
    }

    #[test]
    #[should_panic(expected = "released free")]
    fn test_occupancy_release_free_panics() {
        let mut occ = OccupancyTracker::new(1, 1, 1);
        occ.release(0, 0, 0);
    }

    #[test]
    fn test_load_caps() {
        let domain = DomainModel::new(
            vec![Course::new("C")],
            six_slot_day(),
            vec![Room::new("R")],
            vec![
                Teacher::new("one_prep").with_prep_periods(1),
                Teacher::new("heavy_prep").with_prep_periods(8),
            ],
        )
        .with_limits(SchedulingLimits::new(3, 4));
        let grid = domain.day_grid();
        let load = LoadTracker::new(&domain, &grid);

        // min(6 − 1, 4) = 4.
        assert_eq!(load.cap(0, 0), 4);
        // 6 − 8 is negative: clamped to zero, never an error here.
        assert_eq!(load.cap(1, 0), 0);
        assert!(!load.can_assign(1, 0));
    }

    #[test]
    fn test_load_record_erase() {
        let domain = DomainModel::new(
            vec![Course::new("C")],
            six_slot_day(),
            vec![Room::new("R")],
            vec![Teacher::new("t").with_prep_periods(4)],
        );
        let grid = domain.day_grid();
        let mut load = LoadTracker::new(&domain, &grid);

        // Cap is min(6 − 4, 5) = 2.
        assert!(load.can_assign(0, 0));
        load.record(0, 0);
        assert!(load.can_assign(0, 0));
        load.record(0, 0);
        assert!(!load.can_assign(0, 0));
        load.erase(0, 0);
        assert!(load.can_assign(0, 0));
    }

    #[test]
    #[should_panic(expected = "idle teacher")]
    fn test_load_erase_idle_panics() {
        let domain = DomainModel::new(
            vec![Course::new("C")],
            six_slot_day(),
            vec![Room::new("R")],
            vec![Teacher::new("t")],
        );
        let grid = domain.day_grid();
        let mut load = LoadTracker::new(&domain, &grid);
        load.erase(0, 0);
    }

    #[test]
    fn test_window_blocks_fourth_consecutive() {
        let grid = DayGrid::new(&six_slot_day());
        let mut win = WindowTracker::new(&grid, 1, 3);

        for pos in 0..3 {
            assert!(win.fits(0, 0, pos, 6));
            win.set(0, 0, pos);
        }
        // Positions 0..2 taught: 3 would make a run of 4.
        assert!(!win.fits(0, 0, 3, 6));
        // Position 4 leaves a gap at 3: every window stays within 3.
        assert!(win.fits(0, 0, 4, 6));
    }

    #[test]
    fn test_window_counts_gapped_slots_in_window() {
        let grid = DayGrid::new(&six_slot_day());
        let mut win = WindowTracker::new(&grid, 1, 2);

        // Teach at 0 and 2; the window [0, 3) would then hold 3 > 2.
        win.set(0, 0, 0);
        win.set(0, 0, 2);
        assert!(!win.fits(0, 0, 1, 6));
        // Position 4 is fine: windows containing it hold at most 2.
        assert!(win.fits(0, 0, 4, 6));
    }

    #[test]
    fn test_window_short_day_always_fits() {
        let slots = vec![
            TimeSlot::new("Mon 8", "Mon", 8),
            TimeSlot::new("Mon 9", "Mon", 9),
        ];
        let grid = DayGrid::new(&slots);
        let mut win = WindowTracker::new(&grid, 1, 3);

        // Day shorter than the window size: no window can overflow.
        assert!(win.fits(0, 0, 0, 2));
        win.set(0, 0, 0);
        assert!(win.fits(0, 0, 1, 2));
    }

    #[test]
    fn test_window_clear_reopens() {
        let grid = DayGrid::new(&six_slot_day());
        let mut win = WindowTracker::new(&grid, 1, 2);

        win.set(0, 0, 0);
        win.set(0, 0, 1);
        assert!(!win.fits(0, 0, 2, 6));
        win.clear(0, 0, 1);
        assert!(win.fits(0, 0, 2, 6));
    }

    #[test]
    #[should_panic(expected = "unset window flag")]
    fn test_window_clear_unset_panics() {
        let grid = DayGrid::new(&six_slot_day());
        let mut win = WindowTracker::new(&grid, 1, 2);
        win.clear(0, 0, 0);
    }

    #[test]
    fn test_window_independent_days() {
        let mut slots = six_slot_day();
        slots.extend((0..6).map(|h| TimeSlot::new(format!("Tue {h}"), "Tue", 8 + h)));
        let grid = DayGrid::new(&slots);
        let mut win = WindowTracker::new(&grid, 1, 2);

        win.set(0, 0, 0);
        win.set(0, 0, 1);
        // Monday is saturated at position 2, Tuesday is untouched.
        assert!(!win.fits(0, 0, 2, 6));
        assert!(win.fits(0, 1, 2, 6));
    }
}
