//! Baseline normalization: raw entry list → strict partition.
//!
//! The raw `datapoints_config` on a datastream is an ordered list of entries
//! whose intervals may overlap. A stable sort by `begins_at` plus a single
//! left-to-right stack pass resolves the overlaps into a sorted, pairwise
//! disjoint partition.
//!
//! The four-case override policy, comparing each entry against the stack's
//! top segment, is load-bearing and must not be reordered:
//!
//! 1. entry starts at or after top ends — disjoint, push.
//! 2. entry ends within top's remaining span — nested, discard (top's
//!    payload wins for that whole region).
//! 3. entry shares top's start — the later entry replaces top outright.
//! 4. entry starts inside top but extends past it — truncate top to the
//!    entry's start, then push.
//!
//! In short: last entry for a given start wins; a later entry that starts
//! inside and is shorter loses; a later entry that starts inside and extends
//! further truncates.

use crate::document::BaselineEntry;
use crate::instant::{parse_instant_or, Sentinels};
use crate::interval::Interval;
use crate::segment::ConfigSegment;

/// Normalize a raw baseline entry list into a strict partition of
/// [`ConfigSegment`]s with empty action-state.
///
/// Missing or unparseable bounds default to the sentinels; degenerate
/// entries (`ends_before <= begins_at` after defaulting) are dropped.
/// Normalizing an already-normalized list returns it unchanged.
pub fn normalize(entries: &[BaselineEntry], sentinels: &Sentinels) -> Vec<ConfigSegment> {
    let mut segments: Vec<ConfigSegment> = entries
        .iter()
        .filter_map(|entry| {
            let begins_at = parse_instant_or(entry.begins_at.as_deref(), sentinels.min);
            let ends_before = parse_instant_or(entry.ends_before.as_deref(), sentinels.max);
            Interval::new(begins_at, ends_before)
                .map(|interval| ConfigSegment::new(interval, entry.extra.clone()))
        })
        .collect();

    // Stable: entries with equal begins_at keep input order, so the last one
    // for a given start wins in case 3 below.
    segments.sort_by_key(|s| s.interval.begins_at());

    let mut stack: Vec<ConfigSegment> = Vec::with_capacity(segments.len());
    for seg in segments {
        let Some(top) = stack.last_mut() else {
            stack.push(seg);
            continue;
        };
        if seg.interval.begins_at() >= top.interval.ends_before() {
            // Disjoint after top.
            stack.push(seg);
        } else if seg.interval.ends_before() <= top.interval.ends_before() {
            // Nested within top's remaining span; discard.
        } else if seg.interval.begins_at() == top.interval.begins_at() {
            // Same start: later entry fully replaces top.
            stack.pop();
            stack.push(seg);
        } else {
            // Starts inside top, extends past it: truncate top.
            if let Some(truncated) = top.interval.truncated(seg.interval.begins_at()) {
                top.interval = truncated;
            }
            stack.push(seg);
        }
    }
    stack
}
