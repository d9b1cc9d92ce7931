//! Annotation expansion: documents → independent annotation intervals.

use crate::action::Action;
use crate::document::{AnnotationDoc, IntervalDoc};
use crate::instant::{parse_instant_or, Sentinels};
use crate::interval::Interval;

/// One actionable effective window of an annotation. An annotation document
/// with several interval records expands into several of these, each carrying
/// the document's full action list and id.
#[derive(Debug, Clone)]
pub struct AnnotationInterval {
    pub interval: Interval,
    pub actions: Vec<Action>,
    pub annotation_id: String,
}

/// Expand annotation documents into actionable annotation intervals, in
/// document order.
///
/// Documents with no actions are skipped entirely — they can never affect
/// the partition, not even by inserting a boundary. A document without an
/// `intervals` field applies to the single fully-open interval
/// `[min, max)`; degenerate interval records are dropped.
pub fn expand(docs: &[AnnotationDoc], sentinels: &Sentinels) -> Vec<AnnotationInterval> {
    let mut out = Vec::new();
    for doc in docs {
        if doc.actions.is_empty() {
            continue;
        }
        let open = [IntervalDoc::default()];
        let records: &[IntervalDoc] = match &doc.intervals {
            Some(records) => records,
            None => &open,
        };
        for record in records {
            let begins_at = parse_instant_or(record.begins_at.as_deref(), sentinels.min);
            let ends_before = parse_instant_or(record.ends_before.as_deref(), sentinels.max);
            if let Some(interval) = Interval::new(begins_at, ends_before) {
                out.push(AnnotationInterval {
                    interval,
                    actions: doc.actions.clone(),
                    annotation_id: doc.id.clone(),
                });
            }
        }
    }
    out
}
