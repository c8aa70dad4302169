//! Per-tab back stack store.
//!
//! Every stack is seeded with its tab's root route and the mutators below
//! never remove element 0, so a stack can never become empty.

use std::collections::BTreeMap;

use crate::domain::{Route, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStacks {
    stacks: BTreeMap<Tab, Vec<Route>>,
}

impl BackStacks {
    /// Creates one stack per tab, each holding only that tab's root.
    pub fn seeded(tabs: impl IntoIterator<Item = Tab>) -> Self {
        let stacks = tabs
            .into_iter()
            .map(|tab| (tab, vec![Route::Tab(tab)]))
            .collect();
        Self { stacks }
    }

    /// Wraps already-validated stacks. Callers must guarantee the root
    /// invariant; see `NavigationSnapshot::validate`.
    pub(crate) fn from_validated(stacks: BTreeMap<Tab, Vec<Route>>) -> Self {
        Self { stacks }
    }

    pub fn contains(&self, tab: Tab) -> bool {
        self.stacks.contains_key(&tab)
    }

    pub fn tabs(&self) -> impl Iterator<Item = Tab> + '_ {
        self.stacks.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<Tab, Vec<Route>> {
        &self.stacks
    }

    /// The stack for `tab`.
    ///
    /// # Panics
    ///
    /// Panics if `tab` was never seeded. That is a construction bug, not a
    /// runtime condition.
    pub fn get(&self, tab: Tab) -> &[Route] {
        match self.stacks.get(&tab) {
            Some(stack) => stack,
            None => panic!("back stack for {tab} doesn't exist"),
        }
    }

    fn get_mut(&mut self, tab: Tab) -> &mut Vec<Route> {
        match self.stacks.get_mut(&tab) {
            Some(stack) => stack,
            None => panic!("back stack for {tab} doesn't exist"),
        }
    }

    pub fn depth(&self, tab: Tab) -> usize {
        self.get(tab).len()
    }

    pub fn push(&mut self, tab: Tab, route: Route) {
        self.get_mut(tab).push(route);
    }

    /// Removes the top entry unless only the root remains.
    pub fn pop(&mut self, tab: Tab) -> Option<Route> {
        let stack = self.get_mut(tab);
        if stack.len() > 1 { stack.pop() } else { None }
    }

    /// Drops every non-root entry for which `keep` returns false.
    pub fn retain_details(&mut self, tab: Tab, mut keep: impl FnMut(&Route) -> bool) {
        let stack = self.get_mut(tab);
        let mut index = 0;
        stack.retain(|route| {
            let is_root = index == 0;
            index += 1;
            is_root || keep(route)
        });
    }

    /// Replaces everything above the root with `details`.
    pub fn replace_details(&mut self, tab: Tab, details: impl IntoIterator<Item = Route>) {
        let stack = self.get_mut(tab);
        stack.truncate(1);
        stack.extend(details);
    }

    /// Truncates to the root entry. Returns false if there was nothing above it.
    pub fn truncate_to_root(&mut self, tab: Tab) -> bool {
        let stack = self.get_mut(tab);
        if stack.len() <= 1 {
            return false;
        }
        stack.truncate(1);
        true
    }
}
