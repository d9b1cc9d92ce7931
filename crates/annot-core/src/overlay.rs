//! The overlay engine: fold annotation intervals onto the partition.
//!
//! Each annotation interval is applied to the whole current partition in
//! turn. A segment it overlaps is split into its unaffected remainders (zero,
//! one, or two, all keeping the parent's state) plus exactly one intersected
//! piece carrying the merged action-state. Overlay only refines boundaries
//! and attaches state — the union of covered time never changes.
//!
//! Application order is the caller's annotation order (retrieval order from
//! the annotation store), not time order of the annotations' own intervals.
//! The order is observable: `evaluate` expressions concatenate in it.

use serde_json::Value;

use crate::document::{AnnotationDoc, BaselineEntry, ConfigEntry};
use crate::error::Result;
use crate::expand::{expand, AnnotationInterval};
use crate::instant::Sentinels;
use crate::normalize::normalize;
use crate::segment::ConfigSegment;
use crate::serialize;

/// Apply one annotation interval to a partition, returning the new
/// partition. The result is not yet re-sorted; [`build`] re-sorts after
/// each application.
pub fn apply(partition: Vec<ConfigSegment>, annotation: &AnnotationInterval) -> Vec<ConfigSegment> {
    let mut next = Vec::with_capacity(partition.len() + 2);
    for seg in partition {
        if !seg.interval.overlaps(&annotation.interval) {
            next.push(seg);
            continue;
        }
        for remainder in seg.interval.difference(&annotation.interval) {
            next.push(seg.with_interval(remainder));
        }
        // Overlapping convex intervals always intersect in exactly one range.
        if let Some(intersect) = seg.interval.intersection(&annotation.interval) {
            next.push(seg.annotated(intersect, &annotation.actions, &annotation.annotation_id));
        }
    }
    next
}

/// Build a datastream's canonical configuration: normalize the baseline,
/// overlay every actionable annotation interval in order, serialize.
///
/// Pure and deterministic — the same raw inputs always produce a
/// byte-identical result. Callers must feed the *raw* baseline, never a
/// previously built output, or annotation ids accumulate across runs.
pub fn build(
    entries: &[BaselineEntry],
    annotations: &[AnnotationDoc],
    sentinels: &Sentinels,
) -> Vec<ConfigEntry> {
    let mut partition = normalize(entries, sentinels);
    for annotation in expand(annotations, sentinels) {
        partition = apply(partition, &annotation);
        // Stable, so equal starts keep application order.
        partition.sort_by_key(|s| s.interval.begins_at());
    }
    serialize::to_entries(&partition)
}

/// [`build`] for callers holding raw JSON documents.
///
/// This is the only fallible surface of the engine, and it fails only on
/// contract violations — documents that do not match the expected shape.
/// Data-quality issues (bad timestamps, inverted intervals) never error.
pub fn build_json(
    baseline: &[Value],
    annotations: &[Value],
    sentinels: &Sentinels,
) -> Result<Vec<Value>> {
    let entries: Vec<BaselineEntry> = baseline
        .iter()
        .map(|v| serde_json::from_value(v.clone()))
        .collect::<std::result::Result<_, _>>()?;
    let docs: Vec<AnnotationDoc> = annotations
        .iter()
        .map(|v| serde_json::from_value(v.clone()))
        .collect::<std::result::Result<_, _>>()?;

    build(&entries, &docs, sentinels)
        .into_iter()
        .map(|entry| serde_json::to_value(entry).map_err(Into::into))
        .collect()
}
