//! Serde shapes for input and output documents.
//!
//! Input documents are externally authored and loosely shaped: interval
//! bounds are optional strings, and baseline entries carry arbitrary opaque
//! payload fields (data-source path, query params, ...) that must pass
//! through to the output untouched and in their original order — hence
//! `#[serde(flatten)]` over `serde_json::Map`, with the `preserve_order`
//! feature on `serde_json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::action::Action;

/// A raw interval record: both bounds optional, defaulted to sentinels.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntervalDoc {
    #[serde(default)]
    pub begins_at: Option<String>,
    #[serde(default)]
    pub ends_before: Option<String>,
}

/// One entry of a datastream's raw baseline configuration. Entries may
/// overlap; the normalizer resolves them into a strict partition.
#[derive(Debug, Clone, Deserialize)]
pub struct BaselineEntry {
    #[serde(default)]
    pub begins_at: Option<String>,
    #[serde(default)]
    pub ends_before: Option<String>,
    /// Opaque payload fields, passed through to the output unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An externally authored annotation document.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationDoc {
    pub id: String,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Effective windows. `None` (field absent) means one fully-open
    /// interval; `Some(vec![])` means no effective window at all.
    #[serde(default)]
    pub intervals: Option<Vec<IntervalDoc>>,
}

/// The `actions` object on an output entry. Only populated sub-fields are
/// emitted, and the object itself is omitted when all three are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsOut {
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<Vec<String>>,
}

/// One segment of the built configuration, in external document form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub begins_at: String,
    pub ends_before: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionsOut>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotation_ids: Vec<String>,
    /// Payload fields inherited from the owning baseline entry.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}
