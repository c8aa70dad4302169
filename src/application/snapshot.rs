use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::domain::{RestoreError, RestoreResult, Route, Tab};

/// Everything needed to rebuild an equivalent navigator: which tab is active
/// plus the ordered route list of every tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub root_tab: Tab,
    pub active_tab: Tab,
    pub stacks: BTreeMap<Tab, Vec<Route>>,
}

impl NavigationSnapshot {
    /// Checks the stack invariants a navigator relies on.
    pub fn validate(&self) -> RestoreResult<()> {
        if self.stacks.is_empty() {
            return Err(RestoreError::NoStacks);
        }
        if !self.stacks.contains_key(&self.root_tab) {
            return Err(RestoreError::MissingRootTab(self.root_tab));
        }
        if !self.stacks.contains_key(&self.active_tab) {
            return Err(RestoreError::MissingActiveTab(self.active_tab));
        }

        for (&tab, stack) in &self.stacks {
            let Some(first) = stack.first() else {
                return Err(RestoreError::EmptyStack(tab));
            };
            if first.tab() != Some(tab) {
                return Err(RestoreError::WrongRoot {
                    tab,
                    found: first.to_string(),
                });
            }
            if let Some(index) = stack.iter().skip(1).position(Route::is_tab_root) {
                return Err(RestoreError::NestedRoot { tab, index: index + 1 });
            }
        }

        Ok(())
    }
}
