//! Annotation actions and per-segment accumulated action-state.
//!
//! An annotation carries an ordered list of actions. When an annotation
//! interval is overlaid onto a configuration segment, the intersected piece
//! gets a new [`ActionState`] produced by [`ActionState::merge`] — the
//! original segment's state is never mutated.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One action on an annotation document.
///
/// A single action object may carry several recognized keys at once
/// (e.g. `{"evaluate": "...", "exclude": true}`); each key participates
/// independently in the merge. Unrecognized keys (`attrib` among them) are
/// recognized as present but have no merge rule — they land in `extra` and
/// never reach the output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Action {
    /// Expression text to apply to datapoint values. Never evaluated here;
    /// the engine only concatenates expression strings.
    #[serde(default)]
    pub evaluate: Option<String>,
    /// Exclude the data in the effective window. Only a literal `true`
    /// counts; `{"exclude": false}` is not an exclude.
    #[serde(default)]
    pub exclude: Option<bool>,
    /// Quality-control labels to attach, in order.
    #[serde(default)]
    pub flag: Option<Vec<String>>,
    /// Reserved action kinds, carried but ignored by the merge.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Directives accumulated on a segment, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionState {
    pub exclude: bool,
    pub evaluate: Option<String>,
    pub flag: Option<Vec<String>>,
    /// Ids of every annotation applied to this segment, in application
    /// order. Append-only; duplicates are preserved.
    pub annotation_ids: Vec<String>,
}

impl ActionState {
    /// True when no directive has been accumulated. `annotation_ids` is not
    /// consulted: a segment can carry ids from annotations whose actions all
    /// turned out to be unrecognized kinds.
    pub fn is_empty(&self) -> bool {
        !self.exclude && self.evaluate.is_none() && self.flag.is_none()
    }

    /// Combine this state with one annotation's action list, returning the
    /// new state.
    ///
    /// - `evaluate` expressions on the annotation are joined with `;` and
    ///   appended (again `;`-separated) to any existing expression.
    /// - `exclude` is sticky: once set it stays set.
    /// - `flag` labels are concatenated in order, without de-duplication.
    /// - `annotation_id` is always appended, even when the action list adds
    ///   nothing recognizable.
    pub fn merge(&self, actions: &[Action], annotation_id: &str) -> ActionState {
        let mut next = self.clone();

        let exprs: Vec<&str> = actions
            .iter()
            .filter_map(|a| a.evaluate.as_deref())
            .filter(|e| !e.is_empty())
            .collect();
        if !exprs.is_empty() {
            let joined = exprs.join(";");
            next.evaluate = Some(match &self.evaluate {
                Some(prev) => format!("{prev};{joined}"),
                None => joined,
            });
        }

        if actions.iter().any(|a| a.exclude == Some(true)) {
            next.exclude = true;
        }

        let labels: Vec<String> = actions
            .iter()
            .filter_map(|a| a.flag.as_ref())
            .flatten()
            .cloned()
            .collect();
        if !labels.is_empty() {
            match &mut next.flag {
                Some(existing) => existing.extend(labels),
                None => next.flag = Some(labels),
            }
        }

        next.annotation_ids.push(annotation_id.to_string());
        next
    }
}
