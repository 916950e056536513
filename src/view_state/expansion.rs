//! Module accordion state.

use std::collections::HashSet;

use crate::models::EntityId;

/// Set of expanded module ids. Any subset of the course's modules is a
/// valid state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleExpansion {
    expanded: HashSet<EntityId>,
}

impl ModuleExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one module. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: &EntityId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Expand exactly the given modules.
    pub fn expand_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EntityId>,
    {
        self.expanded = ids.into_iter().collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Expand only `id`, or nothing when there is no module.
    pub fn expand_only(&mut self, id: Option<&EntityId>) {
        self.expanded.clear();
        if let Some(id) = id {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
