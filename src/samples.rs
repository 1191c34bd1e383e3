//! Ready-made timetabling instances.
//!
//! `school_week` is a small-school week: five teachers, eight courses
//! (two of them AP), eighteen slots over Monday through Wednesday,
//! and six rooms split between standard classrooms and science labs.
//! It is feasible under the default limits and doubles as the usage
//! example for the crate.

use crate::models::{Course, DomainModel, Room, Teacher, TimeSlot};

/// Slot IDs of every period in the given days.
fn week_slots(days: &[&str]) -> Vec<TimeSlot> {
    // Four morning periods, lunch, two afternoon periods.
    let hours = [(8, "8-9"), (9, "9-10"), (10, "10-11"), (11, "11-12"), (13, "1-2"), (14, "2-3")];
    days.iter()
        .flat_map(|day| {
            hours
                .iter()
                .map(move |(hour, label)| TimeSlot::new(format!("{day} {label}"), *day, *hour))
        })
        .collect()
}

fn slot_ids_for_days(slots: &[TimeSlot], days: &[&str]) -> Vec<String> {
    slots
        .iter()
        .filter(|s| days.contains(&s.day.as_str()))
        .map(|s| s.id.clone())
        .collect()
}

/// A feasible school-week instance.
pub fn school_week() -> DomainModel {
    let slots = week_slots(&["Mon", "Tue", "Wed"]);

    let courses = vec![
        Course::new("Math 101"),
        Course::new("Math 102"),
        Course::new("Physics 101").with_room_category("science_lab"),
        Course::new("Chemistry 101").with_room_category("science_lab"),
        Course::new("English 101"),
        Course::new("AP Calculus").with_ap(),
        Course::new("AP Physics").with_room_category("science_lab").with_ap(),
        Course::new("Biology 101").with_room_category("science_lab"),
    ];

    let rooms = vec![
        Room::new("Building A - Room 101"),
        Room::new("Building A - Room 102"),
        Room::new("Building A - Lab 201").with_category("science_lab"),
        Room::new("Building B - Room 301"),
        Room::new("Building B - Lab 302").with_category("science_lab"),
        Room::new("Building C - Room 401"),
    ];

    let teachers = vec![
        Teacher::new("Ms. Smith")
            .with_qualification("Math 101")
            .with_qualification("Math 102")
            .with_qualification("AP Calculus")
            .with_ap_certification("AP Calculus")
            .with_availability(slot_ids_for_days(&slots, &["Mon", "Tue", "Wed"]))
            .with_prep_periods(1),
        Teacher::new("Mr. Jones")
            .with_qualification("Math 101")
            .with_qualification("Physics 101")
            .with_qualification("AP Physics")
            .with_ap_certification("AP Physics")
            .with_availability(slot_ids_for_days(&slots, &["Mon", "Tue"]))
            .with_prep_periods(1),
        Teacher::new("Dr. Brown")
            .with_qualification("Physics 101")
            .with_qualification("Chemistry 101")
            .with_availability(slot_ids_for_days(&slots, &["Mon", "Wed"]))
            .with_prep_periods(1),
        Teacher::new("Ms. Davis")
            .with_qualification("English 101")
            .with_availability(slot_ids_for_days(&slots, &["Mon", "Tue", "Wed"]))
            .with_prep_periods(1),
        Teacher::new("Dr. Lee")
            .with_qualification("Biology 101")
            .with_qualification("Chemistry 101")
            .with_availability(slot_ids_for_days(&slots, &["Tue", "Wed"]))
            .with_prep_periods(1),
    ];

    DomainModel::new(courses, slots, rooms, teachers)
}
