//! Wall-clock deadline for the search.
//!
//! The search polls the deadline at a bounded interval (a fixed number
//! of node expansions) instead of on every node; the poll itself is a
//! non-blocking clock read.

use std::time::{Duration, Instant};

/// An optional wall-clock limit on a search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// No limit: the search runs to completion.
    pub fn none() -> Self {
        Self { at: None }
    }

    /// Hard limit at an absolute instant.
    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    /// Hard limit a duration from now.
    pub fn within(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    /// Whether any limit is set.
    pub fn is_unlimited(&self) -> bool {
        self.at.is_none()
    }

    /// Whether the limit has passed. Always `false` when unlimited.
    pub fn is_exceeded(&self) -> bool {
        match self.at {
            None => false,
            Some(at) => Instant::now() >= at,
        }
    }
}
