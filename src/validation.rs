//! Input validation for timetabling instances.
//!
//! Checks structural integrity of a `DomainModel` before solving.
//! Detects:
//! - Duplicate IDs
//! - Qualification/certification tables referencing unknown courses
//! - Availability tables referencing unknown slots
//! - AP certifications without the matching qualification
//! - Courses requiring a room category no room provides
//! - Prep requirements exceeding a day's slot count
//!
//! The solver assumes a well-formed domain and re-checks none of
//! this; run `validate_domain` at the boundary where instances are
//! supplied. A failed check is a configuration error, distinct from
//! the solver's `Infeasible` outcome (valid data, no schedule).

use std::collections::HashSet;

use thiserror::Error;

use crate::models::DomainModel;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A domain integrity error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two entities of one kind share an ID.
    #[error("duplicate {entity} id `{id}`")]
    DuplicateId {
        /// Entity kind ("course", "slot", "room", "teacher").
        entity: &'static str,
        /// The repeated ID.
        id: String,
    },

    /// A teacher table references a course that doesn't exist.
    #[error("teacher `{teacher}` references unknown course `{course}` in {table}")]
    UnknownCourse {
        /// Referencing teacher.
        teacher: String,
        /// Missing course ID.
        course: String,
        /// Which table held the reference.
        table: &'static str,
    },

    /// An availability list references a slot that doesn't exist.
    #[error("{entity} `{owner}` lists unknown slot `{slot}` as available")]
    UnknownSlot {
        /// Owner kind ("teacher" or "room").
        entity: &'static str,
        /// Referencing entity ID.
        owner: String,
        /// Missing slot ID.
        slot: String,
    },

    /// An AP certification without the matching qualification.
    #[error("teacher `{teacher}` is AP-certified for `{course}` without being qualified")]
    ApWithoutQualification {
        /// The teacher.
        teacher: String,
        /// The AP course.
        course: String,
    },

    /// A course requires a room category no room provides.
    #[error("course `{course}` requires room category `{category}` but no room has it")]
    NoMatchingRoom {
        /// The course.
        course: String,
        /// The unmatched category.
        category: String,
    },

    /// A teacher's prep requirement exceeds a day's slot count. The
    /// solver clamps the resulting allowance to zero, so this is
    /// almost always a misconfigured table rather than intent.
    #[error("teacher `{teacher}` requires {prep} prep periods but day `{day}` has {slots} slots")]
    PrepExceedsDay {
        /// The teacher.
        teacher: String,
        /// The short day.
        day: String,
        /// Slots in that day.
        slots: usize,
        /// Required prep periods.
        prep: i32,
    },
}

/// Validates a domain model, collecting every detected issue.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` otherwise.
pub fn validate_domain(domain: &DomainModel) -> ValidationResult {
    let mut errors = Vec::new();

    let course_ids = collect_ids(
        domain.courses.iter().map(|c| c.id.as_str()),
        "course",
        &mut errors,
    );
    let slot_ids = collect_ids(
        domain.slots.iter().map(|s| s.id.as_str()),
        "slot",
        &mut errors,
    );
    collect_ids(
        domain.rooms.iter().map(|r| r.id.as_str()),
        "room",
        &mut errors,
    );
    collect_ids(
        domain.teachers.iter().map(|t| t.id.as_str()),
        "teacher",
        &mut errors,
    );

    for teacher in &domain.teachers {
        for course in &teacher.qualifications {
            if !course_ids.contains(course.as_str()) {
                errors.push(ValidationError::UnknownCourse {
                    teacher: teacher.id.clone(),
                    course: course.clone(),
                    table: "qualifications",
                });
            }
        }
        for course in &teacher.ap_certified {
            if !course_ids.contains(course.as_str()) {
                errors.push(ValidationError::UnknownCourse {
                    teacher: teacher.id.clone(),
                    course: course.clone(),
                    table: "ap_certified",
                });
            } else if !teacher.is_qualified(course) {
                errors.push(ValidationError::ApWithoutQualification {
                    teacher: teacher.id.clone(),
                    course: course.clone(),
                });
            }
        }
        for slot in &teacher.availability {
            if !slot_ids.contains(slot.as_str()) {
                errors.push(ValidationError::UnknownSlot {
                    entity: "teacher",
                    owner: teacher.id.clone(),
                    slot: slot.clone(),
                });
            }
        }
    }

    for room in &domain.rooms {
        if let Some(availability) = &room.availability {
            for slot in availability {
                if !slot_ids.contains(slot.as_str()) {
                    errors.push(ValidationError::UnknownSlot {
                        entity: "room",
                        owner: room.id.clone(),
                        slot: slot.clone(),
                    });
                }
            }
        }
    }

    let room_categories: HashSet<&str> =
        domain.rooms.iter().map(|r| r.category.as_str()).collect();
    for course in &domain.courses {
        if !room_categories.contains(course.room_category.as_str()) {
            errors.push(ValidationError::NoMatchingRoom {
                course: course.id.clone(),
                category: course.room_category.clone(),
            });
        }
    }

    let grid = domain.day_grid();
    for teacher in &domain.teachers {
        for day in 0..grid.day_count() {
            let slots = grid.day_len(day);
            if teacher.prep_periods_per_day > slots as i32 {
                errors.push(ValidationError::PrepExceedsDay {
                    teacher: teacher.id.clone(),
                    day: grid.days()[day].clone(),
                    slots,
                    prep: teacher.prep_periods_per_day,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &'static str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room, Teacher, TimeSlot};

    fn sample_domain() -> DomainModel {
        DomainModel::new(
            vec![
                Course::new("MATH101"),
                Course::new("APCALC").with_ap(),
                Course::new("PHY101").with_room_category("science_lab"),
            ],
            vec![
                TimeSlot::new("Mon 8-9", "Mon", 8),
                TimeSlot::new("Mon 9-10", "Mon", 9),
                TimeSlot::new("Tue 8-9", "Tue", 8),
            ],
            vec![
                Room::new("A-101"),
                Room::new("A-Lab").with_category("science_lab"),
            ],
            vec![
                Teacher::new("smith")
                    .with_qualification("MATH101")
                    .with_qualification("APCALC")
                    .with_ap_certification("APCALC")
                    .with_availability(vec!["Mon 8-9".into(), "Tue 8-9".into()])
                    .with_prep_periods(1),
                Teacher::new("brown")
                    .with_qualification("PHY101")
                    .with_availability(vec!["Mon 9-10".into()]),
            ],
        )
    }

    #[test]
    fn test_valid_domain() {
        assert!(validate_domain(&sample_domain()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut domain = sample_domain();
        domain.rooms.push(Room::new("A-101"));
        domain.courses.push(Course::new("MATH101"));

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateId {
            entity: "room",
            id: "A-101".into(),
        }));
        assert!(errors.contains(&ValidationError::DuplicateId {
            entity: "course",
            id: "MATH101".into(),
        }));
    }

    #[test]
    fn test_unknown_course_in_qualifications() {
        let mut domain = sample_domain();
        domain.teachers[0] = domain.teachers[0].clone().with_qualification("GHOST");

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownCourse { course, .. } if course == "GHOST"
        )));
    }

    #[test]
    fn test_unknown_slot_in_availability() {
        let mut domain = sample_domain();
        domain.teachers[1].availability.push("Fri 8-9".into());
        domain.rooms[0] = Room::new("A-101").with_availability(vec!["Sat 8-9".into()]);

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownSlot { entity: "teacher", slot, .. } if slot == "Fri 8-9"
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownSlot { entity: "room", slot, .. } if slot == "Sat 8-9"
        )));
    }

    #[test]
    fn test_ap_certification_without_qualification() {
        let mut domain = sample_domain();
        domain.teachers[1] = domain.teachers[1].clone().with_ap_certification("APCALC");

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.contains(&ValidationError::ApWithoutQualification {
            teacher: "brown".into(),
            course: "APCALC".into(),
        }));
    }

    #[test]
    fn test_no_matching_room_category() {
        let mut domain = sample_domain();
        domain.courses.push(Course::new("GYM101").with_room_category("gym"));

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.contains(&ValidationError::NoMatchingRoom {
            course: "GYM101".into(),
            category: "gym".into(),
        }));
    }

    #[test]
    fn test_prep_exceeding_day_length() {
        let mut domain = sample_domain();
        // Tuesday has a single slot; three prep periods cannot fit.
        domain.teachers[0].prep_periods_per_day = 3;

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.contains(&ValidationError::PrepExceedsDay {
            teacher: "smith".into(),
            day: "Tue".into(),
            slots: 1,
            prep: 3,
        }));
    }

    #[test]
    fn test_errors_are_collected_not_short_circuited() {
        let mut domain = sample_domain();
        domain.courses.push(Course::new("GYM101").with_room_category("gym"));
        domain.teachers[1].availability.push("Fri 8-9".into());

        let errors = validate_domain(&domain).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::NoMatchingRoom {
            course: "GYM101".into(),
            category: "gym".into(),
        };
        assert_eq!(
            e.to_string(),
            "course `GYM101` requires room category `gym` but no room has it"
        );
    }
}
