//! Timetabling domain models.
//!
//! Core data types for representing a timetabling instance and its
//! solution. Entities are immutable once a `DomainModel` is built;
//! the search engine owns all mutable state for the duration of a run.
//!
//! | Type | Role |
//! |------|------|
//! | `Course` | unit of instruction, placed exactly once |
//! | `TimeSlot` | teachable period (day + hour) |
//! | `Room` | placement target with a category and availability |
//! | `Teacher` | qualification, certification, availability, prep load |
//! | `DomainModel` | immutable instance snapshot |
//! | `Timetable` | complete solution, one `Assignment` per course |

mod course;
mod domain;
mod limits;
mod room;
mod slot;
mod teacher;
mod timetable;

pub use course::Course;
pub use domain::{DayGrid, DomainModel};
pub use limits::SchedulingLimits;
pub use room::Room;
pub use slot::TimeSlot;
pub use teacher::Teacher;
pub use timetable::{Assignment, Timetable};
