//! Course timetabling solver.
//!
//! Assigns a fixed set of courses to (time slot, room, teacher)
//! triples under qualification, certification, room-type,
//! availability, workload, and consecutive-teaching constraints, and
//! either produces a complete feasible schedule or proves that none
//! exists.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Course`, `TimeSlot`, `Room`,
//!   `Teacher`, `DomainModel`, `Timetable`
//! - **`validation`**: input integrity checks (duplicate IDs, dangling
//!   references, impossible prep requirements)
//! - **`candidates`**: per-course unary pruning into feasible
//!   (slot, room, teacher) triples
//! - **`solver`**: deterministic backtracking search with incremental
//!   constraint propagation, optional deadline, optional portfolio
//!   parallelism
//! - **`report`**: human-readable rendering of outcomes
//! - **`samples`**: ready-made instances
//!
//! # Usage
//!
//! ```
//! use timetabler::candidates::build_candidates;
//! use timetabler::samples::school_week;
//! use timetabler::solver::{solve, Deadline};
//!
//! let domain = school_week();
//! let candidates = build_candidates(&domain);
//! let outcome = solve(&domain, &candidates, Deadline::none());
//! assert!(outcome.is_solved());
//! ```

pub mod candidates;
pub mod models;
pub mod report;
pub mod samples;
pub mod solver;
pub mod validation;
