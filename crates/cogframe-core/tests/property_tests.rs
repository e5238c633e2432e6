//! Property-based tests for step parsing and expansion state
//!
//! Uses proptest to check the invariants the UI relies on.

use proptest::prelude::*;
use cogframe_core::{
    classify_step, split_steps, Collection, ExpansionState, FrameworkRecord, Icon, Registry,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Step text without delimiters or trailing periods
fn step_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z ,;'-]{0,40}[a-zA-Z]")
        .expect("valid regex")
}

/// Arbitrary content, delimiters and periods included
fn content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z .→]{0,60}").expect("valid regex")
}

/// Short card ids
fn id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}").expect("valid regex")
}

/// Operations that can be applied to the expansion state
#[derive(Debug, Clone)]
enum StateOp {
    Toggle(String),
    ExpandAll,
    CollapseAll,
}

fn state_ops_strategy() -> impl Strategy<Value = Vec<StateOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => id_strategy().prop_map(StateOp::Toggle),
            1 => Just(StateOp::ExpandAll),
            1 => Just(StateOp::CollapseAll),
        ],
        0..40,
    )
}

fn apply(state: &mut ExpansionState, op: &StateOp, all_ids: &[String]) {
    match op {
        StateOp::Toggle(id) => {
            state.toggle(id);
        }
        StateOp::ExpandAll => state.expand_all(all_ids.iter().cloned()),
        StateOp::CollapseAll => state.collapse_all(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Joining clean steps with the delimiter and splitting gives them back
    #[test]
    fn split_recovers_joined_steps(steps in prop::collection::vec(step_strategy(), 1..8)) {
        let content = steps.join(" → ");
        let parsed: Vec<_> = split_steps(&content).collect();
        prop_assert_eq!(parsed, steps.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Steps never carry surrounding whitespace, so re-trimming is a no-op
    #[test]
    fn steps_are_trim_stable(content in content_strategy()) {
        for step in split_steps(&content) {
            prop_assert_eq!(step.trim(), step);
        }
    }

    /// A step without delimiter or trailing period splits to itself
    #[test]
    fn resplitting_a_step_is_identity(content in content_strategy()) {
        for step in split_steps(&content) {
            if !step.ends_with('.') {
                let again: Vec<_> = split_steps(step).collect();
                prop_assert_eq!(again, vec![step]);
            }
        }
    }

    /// Splitting yields exactly one more step than there are delimiters
    #[test]
    fn step_count_matches_delimiters(content in content_strategy()) {
        let delimiters = content.matches('→').count();
        prop_assert_eq!(split_steps(&content).count(), delimiters + 1);
    }

    /// Toggling twice restores membership, whatever came before
    #[test]
    fn toggle_is_an_involution(ops in state_ops_strategy(), id in id_strategy()) {
        let all_ids = vec!["abc".to_string(), "de".to_string()];
        let mut state = ExpansionState::new();
        for op in &ops {
            apply(&mut state, op, &all_ids);
        }

        let before = state.clone();
        state.toggle(&id);
        prop_assert_ne!(state.is_expanded(&id), before.is_expanded(&id));
        state.toggle(&id);
        prop_assert_eq!(state, before);
    }

    /// expand_all / collapse_all fully determine the state
    #[test]
    fn bulk_operations_reset_history(
        ops in state_ops_strategy(),
        ids in prop::collection::btree_set(id_strategy(), 0..6),
    ) {
        let all_ids: Vec<String> = ids.into_iter().collect();
        let mut state = ExpansionState::new();
        for op in &ops {
            apply(&mut state, op, &all_ids);
        }

        state.expand_all(all_ids.iter().cloned());
        prop_assert!(all_ids.iter().all(|id| state.is_expanded(id)));
        prop_assert_eq!(state.expanded_count(), all_ids.len());

        state.collapse_all();
        prop_assert!(all_ids.iter().all(|id| !state.is_expanded(id)));
        prop_assert_eq!(state, ExpansionState::new());
    }

    /// Registries accept exactly the id lists without duplicates
    #[test]
    fn registry_rejects_duplicates(ids in prop::collection::vec(id_strategy(), 0..8)) {
        let records: Vec<_> = ids
            .iter()
            .map(|id| FrameworkRecord::new(id.as_str(), "Title", "one → two", "#fff", Icon::Eye))
            .collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();

        match Registry::new(records) {
            Ok(registry) => {
                prop_assert_eq!(unique.len(), ids.len());
                let listed: Vec<_> = registry.ids().collect();
                prop_assert_eq!(listed, ids.iter().map(String::as_str).collect::<Vec<_>>());
            }
            Err(_) => prop_assert!(unique.len() < ids.len()),
        }
    }

    /// Classification ignores case
    #[test]
    fn classification_is_case_insensitive(step in step_strategy()) {
        prop_assert_eq!(classify_step(&step.to_uppercase()), classify_step(&step));
    }
}

#[test]
fn built_in_collections_have_distinct_ids() {
    for collection in Collection::ALL {
        let catalog = collection.catalog().unwrap();
        let ids: std::collections::HashSet<_> = catalog.registry.ids().collect();
        assert_eq!(ids.len(), catalog.registry.len());
    }
}
