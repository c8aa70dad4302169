//! Application state for the terminal front-end.
//!
//! `App` wraps a [`Navigator`] with the UI concerns the navigator does not
//! own: the current layout mode, which pane has focus, the selected link and
//! the status line.

use std::path::PathBuf;
use tracing::debug;

use crate::application::layout::{AdaptiveLayout, LayoutMode, LayoutThresholds};
use crate::application::navigator::Navigator;
use crate::application::panes::{Pane, PaneSlots};
use crate::domain::{links_for, IdSource, Link, Route, SequentialIds, Tab};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating panes and links
    Normal,
    /// Help screen is displayed
    Help,
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use panestack::application::{App, Pane};
///
/// let mut app = App::default();
/// app.follow_selected_link();
/// assert_eq!(app.focus, Pane::Detail);
/// assert!(app.navigator.can_go_back());
/// ```
pub struct App {
    /// The navigation core
    pub navigator: Navigator,
    ids: Box<dyn IdSource>,
    /// Panes currently shown side by side
    pub layout_mode: LayoutMode,
    /// Widths at which more panes appear
    pub thresholds: LayoutThresholds,
    /// Pane receiving link selection
    pub focus: Pane,
    /// Index into the focused pane's links
    pub selected_link: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Where sessions are saved and loaded
    pub session_file: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        let navigator = Navigator::new(Tab::Home, Tab::ALL, AdaptiveLayout::new(true));
        Self::new(navigator, Box::new(SequentialIds::default()), LayoutThresholds::default())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("navigator", &self.navigator)
            .field("layout_mode", &self.layout_mode)
            .field("focus", &self.focus)
            .field("selected_link", &self.selected_link)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(navigator: Navigator, ids: Box<dyn IdSource>, thresholds: LayoutThresholds) -> Self {
        let mut app = Self {
            navigator,
            ids,
            layout_mode: LayoutMode::SinglePane,
            thresholds,
            focus: Pane::List,
            selected_link: 0,
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
            session_file: None,
        };
        app.focus_top();
        app
    }

    /// Panes visible for the current stack and layout mode.
    pub fn pane_slots(&self) -> PaneSlots<'_> {
        PaneSlots::project(self.navigator.active_stack(), self.layout_mode)
    }

    pub fn focused_route(&self) -> Option<&Route> {
        self.pane_slots().get(self.focus)
    }

    pub fn focused_links(&self) -> &'static [Link] {
        self.focused_route().map(links_for).unwrap_or(&[])
    }

    /// Re-evaluates the layout for a new window width and forwards the
    /// three-pane signal to the navigator.
    pub fn update_viewport_width(&mut self, width: u16) {
        let enabled = self.navigator.layout().cross_pane_enabled();
        let mode = LayoutMode::for_width(width, self.thresholds, enabled);
        if mode != self.layout_mode {
            debug!(width, mode = mode.label(), "layout mode changed");
        }
        self.layout_mode = mode;
        self.navigator.set_three_panes_visible(mode == LayoutMode::ThreePane);
        if self.focused_route().is_none() {
            self.focus_top();
        }
    }

    pub fn select_next_link(&mut self) {
        let count = self.focused_links().len();
        if count > 0 {
            self.selected_link = (self.selected_link + 1) % count;
        }
    }

    pub fn select_previous_link(&mut self) {
        let count = self.focused_links().len();
        if count > 0 {
            self.selected_link = (self.selected_link + count - 1) % count;
        }
    }

    /// Moves focus to the next occupied pane, wrapping around.
    pub fn focus_next_pane(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_previous_pane(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, step: isize) {
        let panes: Vec<Pane> = self.pane_slots().occupied().into_iter().map(|(pane, _)| pane).collect();
        if panes.is_empty() {
            return;
        }
        let current = panes.iter().position(|&pane| pane == self.focus).unwrap_or(0) as isize;
        let len = panes.len() as isize;
        self.focus = panes[(current + step).rem_euclid(len) as usize];
        self.selected_link = 0;
    }

    /// Navigates to the selected link of the focused pane. Links followed
    /// from the extra pane count as extra-pane navigation.
    pub fn follow_selected_link(&mut self) {
        let Some(link) = self.focused_links().get(self.selected_link).copied() else {
            return;
        };
        let from_extra_pane = self.focus == Pane::Extra;
        let route = Route::detail(link.kind, link.content_id, self.ids.as_mut());
        self.navigator.navigate(route, from_extra_pane);
        self.status_message = None;
        self.focus_top();
    }

    /// Selects `tab`, or closes all details when it is already active.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.navigator.has_tab(tab) {
            self.status_message = Some(format!("{tab} is not enabled"));
            return;
        }
        if tab == self.navigator.active_tab() {
            self.close_details();
        } else {
            self.navigator.navigate(Route::Tab(tab), false);
            self.status_message = None;
            self.focus_top();
        }
    }

    pub fn go_back(&mut self) -> bool {
        let moved = self.navigator.go_back();
        if moved {
            self.status_message = None;
            self.focus_top();
        }
        moved
    }

    pub fn close_details(&mut self) {
        if self.navigator.navigate_to_root() {
            self.status_message = None;
            self.focus_top();
        } else {
            self.status_message = Some("Nothing to close".to_string());
        }
    }

    fn focus_top(&mut self) {
        self.focus = self
            .navigator
            .active_stack()
            .last()
            .map(Pane::for_route)
            .unwrap_or(Pane::List);
        if self.focused_route().is_none() {
            let rightmost = self.pane_slots().occupied().last().map(|(pane, _)| *pane);
            self.focus = rightmost.unwrap_or(Pane::List);
        }
        self.selected_link = 0;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn scroll_help(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
    }

    /// Gets the file to use for saving and loading sessions.
    pub fn get_session_filename(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("session.panestack.json"))
    }

    /// Processes the result of a save operation.
    pub fn set_save_result(&mut self, result: Result<PathBuf, String>) {
        self.status_message = Some(match result {
            Ok(path) => format!("Saved session to {}", path.display()),
            Err(error) => format!("Save failed: {}", error),
        });
    }

    /// Processes the result of a load operation, replacing the navigator on
    /// success.
    pub fn set_load_result(&mut self, result: Result<(Navigator, PathBuf), String>) {
        match result {
            Ok((mut navigator, path)) => {
                navigator.set_three_panes_visible(self.layout_mode == LayoutMode::ThreePane);
                self.navigator = navigator;
                self.focus_top();
                self.status_message = Some(format!("Loaded session from {}", path.display()));
            }
            Err(error) => {
                self.status_message = Some(format!("Load failed: {}", error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DetailKind;

    fn wide_app() -> App {
        let mut app = App::default();
        app.update_viewport_width(200);
        app
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.focus, Pane::List);
        assert_eq!(app.layout_mode, LayoutMode::SinglePane);
        assert_eq!(app.focused_links().len(), 2);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_viewport_width_drives_three_pane_signal() {
        let mut app = App::default();
        app.update_viewport_width(200);
        assert_eq!(app.layout_mode, LayoutMode::ThreePane);
        assert!(app.navigator.layout().three_panes_visible());

        app.update_viewport_width(100);
        assert_eq!(app.layout_mode, LayoutMode::TwoPane);
        assert!(!app.navigator.layout().three_panes_visible());
    }

    #[test]
    fn test_follow_link_focuses_new_pane() {
        let mut app = wide_app();
        app.follow_selected_link();

        assert_eq!(app.focus, Pane::Detail);
        assert_eq!(app.navigator.visible_detail_id(), Some("movie-123"));

        // Actor link on the movie page opens the extra pane.
        app.follow_selected_link();
        assert_eq!(app.focus, Pane::Extra);
        assert_eq!(app.navigator.visible_context_id(), Some("actor-001"));
    }

    #[test]
    fn test_link_from_extra_pane_substitutes_detail_when_wide() {
        let mut app = wide_app();
        app.follow_selected_link();
        app.follow_selected_link();

        // Filmography movie from the person pane.
        app.follow_selected_link();

        let stack = app.navigator.active_stack();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack[1].content_id(), Some("person-movie-777"));
        assert_eq!(stack[2].content_id(), Some("actor-001"));
    }

    #[test]
    fn test_link_from_extra_pane_appends_when_narrow() {
        let mut app = App::default();
        app.update_viewport_width(100);
        app.follow_selected_link();
        app.follow_selected_link();
        assert_eq!(app.focus, Pane::Extra);

        app.follow_selected_link();

        let stack = app.navigator.active_stack();
        assert_eq!(stack.len(), 4);
        assert_eq!(stack[3].content_id(), Some("person-movie-777"));
    }

    #[test]
    fn test_link_selection_wraps() {
        let mut app = App::default();
        app.select_previous_link();
        assert_eq!(app.selected_link, 1);
        app.select_next_link();
        assert_eq!(app.selected_link, 0);
    }

    #[test]
    fn test_focus_cycles_over_visible_panes() {
        let mut app = wide_app();
        app.follow_selected_link();
        assert_eq!(app.focus, Pane::Detail);

        app.focus_next_pane();
        assert_eq!(app.focus, Pane::List);
        app.focus_previous_pane();
        assert_eq!(app.focus, Pane::Detail);
    }

    #[test]
    fn test_select_active_tab_closes_details() {
        let mut app = App::default();
        app.follow_selected_link();
        assert!(app.navigator.can_navigate_to_root());

        app.select_tab(Tab::Home);
        assert!(!app.navigator.can_navigate_to_root());
        assert_eq!(app.focus, Pane::List);

        app.select_tab(Tab::Home);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to close"));
    }

    #[test]
    fn test_select_other_tab_switches() {
        let mut app = App::default();
        app.select_tab(Tab::Search);

        assert_eq!(app.navigator.active_tab(), Tab::Search);
        assert_eq!(app.focused_links()[2].kind, DetailKind::Person);
    }

    #[test]
    fn test_select_disabled_tab_reports() {
        let navigator = Navigator::new(Tab::Home, [Tab::Home], AdaptiveLayout::new(false));
        let mut app = App::new(navigator, Box::new(SequentialIds::default()), LayoutThresholds::default());

        app.select_tab(Tab::Profile);
        assert_eq!(app.navigator.active_tab(), Tab::Home);
        assert!(app.status_message.unwrap().contains("not enabled"));
    }

    #[test]
    fn test_go_back_refocuses() {
        let mut app = wide_app();
        app.follow_selected_link();
        app.follow_selected_link();

        assert!(app.go_back());
        assert_eq!(app.focus, Pane::Detail);
        assert!(app.go_back());
        assert!(!app.go_back());
    }

    #[test]
    fn test_help_mode_transitions() {
        let mut app = App::default();
        app.show_help();
        assert_eq!(app.mode, AppMode::Help);

        app.scroll_help(3);
        app.scroll_help(-5);
        assert_eq!(app.help_scroll, 0);

        app.close_help();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_set_save_result() {
        let mut app = App::default();
        app.set_save_result(Ok(PathBuf::from("s.json")));
        assert!(app.status_message.take().unwrap().contains("Saved session to s.json"));

        app.set_save_result(Err("Permission denied".to_string()));
        assert!(app.status_message.unwrap().contains("Save failed: Permission denied"));
    }

    #[test]
    fn test_set_load_result() {
        let mut app = wide_app();
        let mut other = Navigator::new(Tab::Home, Tab::ALL, AdaptiveLayout::new(true));
        other.navigate(Route::Tab(Tab::Downloads), false);

        app.set_load_result(Ok((other, PathBuf::from("s.json"))));
        assert_eq!(app.navigator.active_tab(), Tab::Downloads);
        assert!(app.navigator.layout().three_panes_visible());
        assert!(app.status_message.take().unwrap().contains("Loaded session"));

        app.set_load_result(Err("File not found".to_string()));
        assert_eq!(app.navigator.active_tab(), Tab::Downloads);
        assert!(app.status_message.unwrap().contains("Load failed: File not found"));
    }

    #[test]
    fn test_default_session_filename() {
        let mut app = App::default();
        assert_eq!(app.get_session_filename(), PathBuf::from("session.panestack.json"));

        app.session_file = Some(PathBuf::from("custom.json"));
        assert_eq!(app.get_session_filename(), PathBuf::from("custom.json"));
    }
}
