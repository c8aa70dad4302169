//! The navigation state machine.
//!
//! The navigator owns one back stack per tab and decides how each request
//! mutates them, depending on the kind of destination, whether the request
//! came from the extra (person) pane, and whether three panes are on screen.
//! `go_back` and `navigate_to_root` invert those mutations.
//!
//! All operations take `&mut self` and run to completion, so a reader always
//! observes the state between two whole operations.

use tracing::{debug, info, warn};

use crate::application::layout::AdaptiveLayout;
use crate::application::snapshot::NavigationSnapshot;
use crate::application::stacks::BackStacks;
use crate::domain::{RestoreResult, Route, Tab};

/// One detail replacement made while cross-pane substitution was active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub replaced_id: String,
    pub cross_pane: bool,
}

/// Session-wide navigation state.
///
/// # Examples
///
/// ```
/// use panestack::application::{AdaptiveLayout, Navigator};
/// use panestack::domain::{Route, SequentialIds, Tab};
///
/// let mut ids = SequentialIds::default();
/// let mut nav = Navigator::new(Tab::Home, Tab::ALL, AdaptiveLayout::new(true));
///
/// nav.navigate(Route::movie("movie-123", &mut ids), false);
/// assert_eq!(nav.visible_detail_id(), Some("movie-123"));
/// assert!(nav.go_back());
/// assert!(!nav.can_go_back());
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    stacks: BackStacks,
    root_tab: Tab,
    active_tab: Tab,
    visible_detail_id: Option<String>,
    visible_context_id: Option<String>,
    substitution_history: Vec<Substitution>,
    layout: AdaptiveLayout,
}

impl Navigator {
    /// Seeds one stack per tab and starts on `root_tab`.
    ///
    /// # Panics
    ///
    /// Panics if `root_tab` is not among `tabs`.
    pub fn new(root_tab: Tab, tabs: impl IntoIterator<Item = Tab>, layout: AdaptiveLayout) -> Self {
        let stacks = BackStacks::seeded(tabs);
        assert!(stacks.contains(root_tab), "root tab {root_tab} must have a back stack");
        Self {
            stacks,
            root_tab,
            active_tab: root_tab,
            visible_detail_id: None,
            visible_context_id: None,
            substitution_history: Vec::new(),
            layout,
        }
    }

    /// Rebuilds a navigator from a saved snapshot.
    ///
    /// Projections are re-derived from the active stack; the substitution
    /// history starts empty.
    pub fn restore(snapshot: NavigationSnapshot, layout: AdaptiveLayout) -> RestoreResult<Self> {
        if let Err(err) = snapshot.validate() {
            warn!(error = %err, "rejecting navigation snapshot");
            return Err(err);
        }

        let stacks = BackStacks::from_validated(snapshot.stacks);
        let active = stacks.get(snapshot.active_tab);
        let visible_detail_id = last_content(active, Route::is_primary_detail);
        let visible_context_id = last_content(active, Route::is_contextual);

        info!(active_tab = %snapshot.active_tab, depth = active.len(), "restored navigation state");

        Ok(Self {
            stacks,
            root_tab: snapshot.root_tab,
            active_tab: snapshot.active_tab,
            visible_detail_id,
            visible_context_id,
            substitution_history: Vec::new(),
            layout,
        })
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            root_tab: self.root_tab,
            active_tab: self.active_tab,
            stacks: self.stacks.as_map().clone(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn root_tab(&self) -> Tab {
        self.root_tab
    }

    pub fn tabs(&self) -> impl Iterator<Item = Tab> + '_ {
        self.stacks.tabs()
    }

    pub fn has_tab(&self, tab: Tab) -> bool {
        self.stacks.contains(tab)
    }

    pub fn stack(&self, tab: Tab) -> &[Route] {
        self.stacks.get(tab)
    }

    pub fn active_stack(&self) -> &[Route] {
        self.stacks.get(self.active_tab)
    }

    /// Content shown in the detail pane.
    pub fn visible_detail_id(&self) -> Option<&str> {
        self.visible_detail_id.as_deref()
    }

    /// Content shown in the extra pane.
    pub fn visible_context_id(&self) -> Option<&str> {
        self.visible_context_id.as_deref()
    }

    /// Details replaced by cross-pane substitution since the last reset.
    /// Recorded for diagnostics only; back navigation does not consult it.
    pub fn substitution_history(&self) -> &[Substitution] {
        &self.substitution_history
    }

    pub fn layout(&self) -> AdaptiveLayout {
        self.layout
    }

    pub fn set_three_panes_visible(&mut self, visible: bool) {
        if self.layout.three_panes_visible() != visible {
            debug!(visible, "three-pane visibility changed");
        }
        self.layout.set_three_panes_visible(visible);
    }

    /// Navigates to `route`. `from_extra_pane` marks requests issued from the
    /// person pane.
    ///
    /// # Panics
    ///
    /// Panics when switching to a tab that has no back stack.
    pub fn navigate(&mut self, route: Route, from_extra_pane: bool) {
        let tab = self.active_tab;
        match route {
            Route::Tab(target) => {
                assert!(self.stacks.contains(target), "back stack for {target} doesn't exist");
                info!(from = %tab, to = %target, "switching tab");
                self.active_tab = target;
                self.reset_projections();
            }

            Route::Person(ref detail) => {
                debug!(person = %detail.content_id, "opening contextual pane");
                self.visible_context_id = Some(detail.content_id.clone());
                self.stacks.push(tab, route);
            }

            Route::Movie(ref detail) | Route::Show(ref detail) => {
                let new_id = detail.content_id.clone();

                if from_extra_pane && self.layout.cross_pane_active() {
                    debug!(detail = %new_id, "cross-pane substitution");
                    if let Some(replaced_id) = self.visible_detail_id.take() {
                        self.substitution_history.push(Substitution {
                            replaced_id,
                            cross_pane: true,
                        });
                    }
                    self.visible_detail_id = Some(new_id);

                    let person = self
                        .stacks
                        .get(tab)
                        .iter()
                        .rev()
                        .find(|entry| entry.is_contextual())
                        .cloned();
                    self.stacks.replace_details(tab, std::iter::once(route).chain(person));
                } else if from_extra_pane {
                    debug!(detail = %new_id, "linear append after contextual pane");
                    self.visible_detail_id = Some(new_id);
                    self.stacks.push(tab, route);
                } else {
                    debug!(detail = %new_id, "opening detail");
                    self.visible_detail_id = Some(new_id);
                    self.visible_context_id = None;
                    self.stacks.retain_details(tab, |entry| !entry.is_contextual());
                    self.stacks.push(tab, route);
                }
            }
        }
    }

    /// Undoes the most recent navigation. Returns whether anything changed;
    /// on `false` the host should fall through to its own back handling.
    pub fn go_back(&mut self) -> bool {
        let tab = self.active_tab;

        if let Some(removed) = self.stacks.pop(tab) {
            let stack = self.stacks.get(tab);
            match removed {
                Route::Person(_) => {
                    self.visible_context_id = last_content(stack, Route::is_contextual);
                }
                Route::Movie(_) | Route::Show(_) => {
                    self.visible_detail_id = last_content(stack, Route::is_primary_detail);
                    if let Some(Route::Person(person)) = stack.last() {
                        self.visible_context_id = Some(person.content_id.clone());
                    }
                }
                Route::Tab(_) => {}
            }
            debug!(tab = %tab, popped = %removed, depth = stack.len(), "went back");
            return true;
        }

        if self.active_tab != self.root_tab {
            info!(from = %tab, to = %self.root_tab, "back to root tab");
            self.active_tab = self.root_tab;
            return true;
        }

        false
    }

    pub fn can_go_back(&self) -> bool {
        self.stacks.depth(self.active_tab) > 1 || self.active_tab != self.root_tab
    }

    /// Closes every detail on the active tab.
    pub fn navigate_to_root(&mut self) -> bool {
        if !self.stacks.truncate_to_root(self.active_tab) {
            return false;
        }
        debug!(tab = %self.active_tab, "closed all details");
        self.reset_projections();
        true
    }

    pub fn can_navigate_to_root(&self) -> bool {
        self.stacks.depth(self.active_tab) > 1
    }

    fn reset_projections(&mut self) {
        self.visible_detail_id = None;
        self.visible_context_id = None;
        self.substitution_history.clear();
    }
}

fn last_content(stack: &[Route], wanted: impl Fn(&Route) -> bool) -> Option<String> {
    stack
        .iter()
        .rev()
        .find(|route| wanted(*route))
        .and_then(Route::content_id)
        .map(str::to_string)
}
