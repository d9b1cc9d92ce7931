//! Half-open interval arithmetic over UTC instants.
//!
//! An [`Interval`] is `[begins_at, ends_before)`. Adjacent intervals (one ends
//! exactly where the next begins) do NOT overlap. Degenerate ranges
//! (`ends_before <= begins_at`) cannot be constructed; callers drop them at
//! the point they arise.

use chrono::{DateTime, Utc};

/// A non-empty half-open time range `[begins_at, ends_before)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    begins_at: DateTime<Utc>,
    ends_before: DateTime<Utc>,
}

impl Interval {
    /// Construct an interval, or `None` if the range is degenerate
    /// (`ends_before <= begins_at`).
    pub fn new(begins_at: DateTime<Utc>, ends_before: DateTime<Utc>) -> Option<Self> {
        if begins_at < ends_before {
            Some(Self {
                begins_at,
                ends_before,
            })
        } else {
            None
        }
    }

    pub fn begins_at(&self) -> DateTime<Utc> {
        self.begins_at
    }

    pub fn ends_before(&self) -> DateTime<Utc> {
        self.ends_before
    }

    /// Two half-open intervals overlap iff `a.begins_at < b.ends_before` AND
    /// `b.begins_at < a.ends_before`. Adjacency is not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.begins_at < other.ends_before && other.begins_at < self.ends_before
    }

    /// The common sub-range of two intervals, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        Interval::new(
            self.begins_at.max(other.begins_at),
            self.ends_before.min(other.ends_before),
        )
    }

    /// The parts of `self` not covered by `other`: zero, one, or two
    /// sub-intervals depending on whether `other` straddles both edges,
    /// overlaps one edge, or sits fully inside `self`. Disjoint operands
    /// return `self` whole.
    pub fn difference(&self, other: &Interval) -> Vec<Interval> {
        if !self.overlaps(other) {
            return vec![*self];
        }
        let mut parts = Vec::with_capacity(2);
        if self.begins_at < other.begins_at {
            parts.push(Self {
                begins_at: self.begins_at,
                ends_before: other.begins_at,
            });
        }
        if other.ends_before < self.ends_before {
            parts.push(Self {
                begins_at: other.ends_before,
                ends_before: self.ends_before,
            });
        }
        parts
    }

    /// A copy of `self` cut short at `ends_before`, or `None` if that would
    /// leave nothing.
    pub fn truncated(&self, ends_before: DateTime<Utc>) -> Option<Interval> {
        Interval::new(self.begins_at, ends_before.min(self.ends_before))
    }
}
