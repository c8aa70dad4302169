use thiserror::Error;

use super::models::Tab;

/// Reasons a saved navigation snapshot cannot be turned back into a navigator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("snapshot contains no tab stacks")]
    NoStacks,
    #[error("root tab {0} has no stack in the snapshot")]
    MissingRootTab(Tab),
    #[error("active tab {0} has no stack in the snapshot")]
    MissingActiveTab(Tab),
    #[error("stack for {0} is empty")]
    EmptyStack(Tab),
    #[error("stack for {tab} does not start with its own root (found {found})")]
    WrongRoot { tab: Tab, found: String },
    #[error("stack for {tab} holds a tab root at position {index}")]
    NestedRoot { tab: Tab, index: usize },
}

pub type RestoreResult<T> = Result<T, RestoreError>;
