//! Expansion state: which cards are open.
//!
//! Ids are held by value and are not checked against any registry, so an
//! id that names no record can be toggled freely and simply never matches
//! a card.

use std::collections::BTreeSet;

/// Set of currently expanded record ids. Starts empty (all collapsed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one card. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let expanded = if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        };
        tracing::debug!(id, expanded, "Card toggled");
        expanded
    }

    /// Replace the state with exactly `ids`.
    pub fn expand_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open = ids.into_iter().map(Into::into).collect();
        tracing::debug!(count = self.open.len(), "All cards expanded");
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
        tracing::debug!("All cards collapsed");
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn expanded_count(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Expanded ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.open.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = ExpansionState::new();
        assert!(state.is_empty());
        assert!(!state.is_expanded("fairness"));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state = ExpansionState::new();
        assert!(state.toggle("fairness"));
        assert!(state.is_expanded("fairness"));
        assert!(!state.toggle("fairness"));
        assert!(!state.is_expanded("fairness"));
        assert_eq!(state, ExpansionState::new());
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = ExpansionState::new();
        state.toggle("a");
        state.toggle("b");
        state.toggle("a");
        assert_eq!(state.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn expand_all_replaces_state() {
        let mut state = ExpansionState::new();
        state.toggle("stale");
        state.expand_all(["a", "b"]);
        assert!(!state.is_expanded("stale"));
        assert!(state.is_expanded("a") && state.is_expanded("b"));
        assert_eq!(state.expanded_count(), 2);
    }

    #[test]
    fn collapse_all_clears() {
        let mut state = ExpansionState::new();
        state.expand_all(vec!["a".to_string(), "b".to_string()]);
        state.collapse_all();
        assert!(state.is_empty());
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut state = ExpansionState::new();
        assert!(state.toggle("no-such-card"));
        assert!(state.is_expanded("no-such-card"));
    }
}
