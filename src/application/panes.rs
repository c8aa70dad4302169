//! Projection of the active back stack onto the visible panes.

use crate::application::layout::LayoutMode;
use crate::domain::Route;

/// The three adaptive slots, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    List,
    Detail,
    Extra,
}

impl Pane {
    /// The slot a route occupies when it is shown.
    pub fn for_route(route: &Route) -> Pane {
        match route {
            Route::Tab(_) => Pane::List,
            Route::Movie(_) | Route::Show(_) => Pane::Detail,
            Route::Person(_) => Pane::Extra,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pane::List => "List",
            Pane::Detail => "Detail",
            Pane::Extra => "Extra",
        }
    }
}

/// Which route, if any, each pane shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneSlots<'a> {
    pub list: Option<&'a Route>,
    pub detail: Option<&'a Route>,
    pub extra: Option<&'a Route>,
}

impl<'a> PaneSlots<'a> {
    /// Lays out `stack` for `mode`.
    ///
    /// A single pane shows the top entry. Two panes pair the top entry with
    /// whatever sits beside it: a person with its detail, a detail with the
    /// list. Three panes show the list, the nearest detail, and the top entry
    /// when it is a person.
    pub fn project(stack: &'a [Route], mode: LayoutMode) -> Self {
        let mut slots = PaneSlots::default();
        let Some(top) = stack.last() else {
            return slots;
        };
        let root = stack.first();

        match mode {
            LayoutMode::SinglePane => slots.set(top),
            LayoutMode::TwoPane => {
                if top.is_contextual() {
                    match nearest_detail(stack) {
                        Some(detail) => slots.detail = Some(detail),
                        None => slots.list = root,
                    }
                } else {
                    slots.list = root;
                }
                slots.set(top);
            }
            LayoutMode::ThreePane => {
                slots.list = root;
                slots.detail = nearest_detail(stack);
                if top.is_contextual() {
                    slots.extra = Some(top);
                }
            }
        }

        slots
    }

    fn set(&mut self, route: &'a Route) {
        match Pane::for_route(route) {
            Pane::List => self.list = Some(route),
            Pane::Detail => self.detail = Some(route),
            Pane::Extra => self.extra = Some(route),
        }
    }

    pub fn get(&self, pane: Pane) -> Option<&'a Route> {
        match pane {
            Pane::List => self.list,
            Pane::Detail => self.detail,
            Pane::Extra => self.extra,
        }
    }

    /// Occupied panes in left-to-right order.
    pub fn occupied(&self) -> Vec<(Pane, &'a Route)> {
        [Pane::List, Pane::Detail, Pane::Extra]
            .into_iter()
            .filter_map(|pane| self.get(pane).map(|route| (pane, route)))
            .collect()
    }
}

fn nearest_detail(stack: &[Route]) -> Option<&Route> {
    stack.iter().rev().find(|route| route.is_primary_detail())
}
