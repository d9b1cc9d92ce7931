//! Serialization of the final partition into external document form.
//!
//! Sentinel bounds are emitted literally, not blanked back to open bounds:
//! the downstream store queries with concrete timestamps.

use crate::document::{ActionsOut, ConfigEntry};
use crate::instant::format_instant;
use crate::segment::ConfigSegment;

/// Convert a final partition into output entries, one per segment.
pub fn to_entries(partition: &[ConfigSegment]) -> Vec<ConfigEntry> {
    partition.iter().map(to_entry).collect()
}

fn to_entry(seg: &ConfigSegment) -> ConfigEntry {
    // `actions` is omitted entirely when nothing was accumulated; otherwise
    // only the populated sub-fields appear.
    let actions = if seg.state.is_empty() {
        None
    } else {
        Some(ActionsOut {
            exclude: seg.state.exclude,
            evaluate: seg.state.evaluate.clone(),
            flag: seg.state.flag.clone(),
        })
    };

    ConfigEntry {
        begins_at: format_instant(seg.interval.begins_at()),
        ends_before: format_instant(seg.interval.ends_before()),
        actions,
        annotation_ids: seg.state.annotation_ids.clone(),
        extra: seg.payload.clone(),
    }
}
