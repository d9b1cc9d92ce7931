//! Tests for action-state merging.

use annot_core::{Action, ActionState};
use serde_json::json;

fn action(doc: serde_json::Value) -> Action {
    serde_json::from_value(doc).unwrap()
}

#[test]
fn default_state_is_empty() {
    let state = ActionState::default();
    assert!(state.is_empty());
    assert!(!state.exclude);
    assert!(state.evaluate.is_none());
    assert!(state.flag.is_none());
    assert!(state.annotation_ids.is_empty());
}

#[test]
fn exclude_merges_and_is_sticky() {
    let state = ActionState::default().merge(&[action(json!({ "exclude": true }))], "a1");
    assert!(state.exclude);

    // A later annotation without exclude does not clear it.
    let state = state.merge(&[action(json!({ "flag": ["Q"] }))], "a2");
    assert!(state.exclude);
}

#[test]
fn exclude_false_is_not_an_exclude() {
    let state = ActionState::default().merge(&[action(json!({ "exclude": false }))], "a1");
    assert!(!state.exclude);
    // The annotation id is still recorded.
    assert_eq!(state.annotation_ids, vec!["a1"]);
}

#[test]
fn evaluate_expressions_join_with_semicolons() {
    let actions = vec![
        action(json!({ "evaluate": "v = v * 2" })),
        action(json!({ "evaluate": "v = v + 1" })),
    ];
    let state = ActionState::default().merge(&actions, "a1");
    assert_eq!(state.evaluate.as_deref(), Some("v = v * 2;v = v + 1"));

    // A second annotation appends with another semicolon.
    let state = state.merge(&[action(json!({ "evaluate": "v = -v" }))], "a2");
    assert_eq!(state.evaluate.as_deref(), Some("v = v * 2;v = v + 1;v = -v"));
}

#[test]
fn empty_evaluate_expressions_are_ignored() {
    let actions = vec![
        action(json!({ "evaluate": "" })),
        action(json!({ "evaluate": "v = v" })),
    ];
    let state = ActionState::default().merge(&actions, "a1");
    assert_eq!(state.evaluate.as_deref(), Some("v = v"));
}

#[test]
fn flags_concatenate_in_order_without_dedup() {
    let state = ActionState::default().merge(
        &[action(json!({ "flag": ["A", "B"] }))],
        "a1",
    );
    let state = state.merge(&[action(json!({ "flag": ["B", "C"] }))], "a2");

    assert_eq!(
        state.flag,
        Some(vec![
            "A".to_string(),
            "B".to_string(),
            "B".to_string(),
            "C".to_string()
        ])
    );
}

#[test]
fn empty_flag_list_leaves_state_unchanged() {
    let state = ActionState::default().merge(&[action(json!({ "flag": [] }))], "a1");
    assert!(state.flag.is_none());
}

#[test]
fn annotation_id_is_appended_even_when_nothing_merges() {
    // An `attrib` action is recognized as present but has no merge rule.
    let state = ActionState::default().merge(
        &[action(json!({ "attrib": { "obj": { "ten": 10 } } }))],
        "a1",
    );

    assert!(state.is_empty());
    assert_eq!(state.annotation_ids, vec!["a1"]);
}

#[test]
fn annotation_ids_accumulate_with_duplicates() {
    let state = ActionState::default()
        .merge(&[action(json!({ "exclude": true }))], "a1")
        .merge(&[action(json!({ "flag": ["X"] }))], "a2")
        .merge(&[action(json!({ "exclude": true }))], "a1");

    assert_eq!(state.annotation_ids, vec!["a1", "a2", "a1"]);
}

#[test]
fn multi_key_action_participates_in_every_merge_rule() {
    let state = ActionState::default().merge(
        &[action(json!({
            "evaluate": "v = v * 10",
            "exclude": true,
            "flag": ["SUSPECT"]
        }))],
        "a1",
    );

    assert!(state.exclude);
    assert_eq!(state.evaluate.as_deref(), Some("v = v * 10"));
    assert_eq!(state.flag, Some(vec!["SUSPECT".to_string()]));
}

#[test]
fn merge_is_pure() {
    let before = ActionState::default().merge(&[action(json!({ "flag": ["A"] }))], "a1");
    let snapshot = before.clone();
    let _after = before.merge(&[action(json!({ "flag": ["B"] }))], "a2");
    assert_eq!(before, snapshot);
}
