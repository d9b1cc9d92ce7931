//! Immutable configuration segments.

use serde_json::{Map, Value};

use crate::action::{Action, ActionState};
use crate::interval::Interval;

/// An atomic window of the built configuration: one interval, one baseline
/// payload, and the action-state accumulated so far.
///
/// Segments are value objects. Splitting one during overlay produces new
/// children via [`with_interval`](Self::with_interval) and
/// [`annotated`](Self::annotated); the parent is never mutated and children
/// share no state with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSegment {
    pub interval: Interval,
    /// Opaque fields of the owning baseline entry.
    pub payload: Map<String, Value>,
    pub state: ActionState,
}

impl ConfigSegment {
    /// A fresh segment with empty action-state, as produced by the
    /// normalizer.
    pub fn new(interval: Interval, payload: Map<String, Value>) -> Self {
        Self {
            interval,
            payload,
            state: ActionState::default(),
        }
    }

    /// Clone of this segment confined to a sub-interval, payload and state
    /// unchanged.
    pub fn with_interval(&self, interval: Interval) -> Self {
        Self {
            interval,
            payload: self.payload.clone(),
            state: self.state.clone(),
        }
    }

    /// Clone of this segment confined to a sub-interval, with one
    /// annotation's actions merged into the state.
    pub fn annotated(&self, interval: Interval, actions: &[Action], annotation_id: &str) -> Self {
        Self {
            interval,
            payload: self.payload.clone(),
            state: self.state.merge(actions, annotation_id),
        }
    }
}
