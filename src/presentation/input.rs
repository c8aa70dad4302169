use crate::application::{App, AppMode};
use crate::domain::Tab;
use crate::infrastructure::SessionRepository;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    let path = app.get_session_filename();
                    let result = SessionRepository::save_session(&app.navigator, &path)
                        .map_err(|e| e.to_string());
                    app.set_save_result(result);
                    return;
                }
                KeyCode::Char('o') => {
                    let path = app.get_session_filename();
                    let result = SessionRepository::load_session(&path, app.navigator.layout())
                        .map_err(|e| e.to_string());
                    app.set_load_result(result);
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Char(c) if Tab::from_shortcut(c).is_some() => {
                if let Some(tab) = Tab::from_shortcut(c) {
                    app.select_tab(tab);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_link(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_link(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.focus_next_pane(),
            KeyCode::Left | KeyCode::BackTab => app.focus_previous_pane(),
            KeyCode::Enter => app.follow_selected_link(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                if !app.go_back() {
                    app.status_message = Some("Already at the start".to_string());
                }
            }
            KeyCode::Char('x') => app.close_details(),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help(1),
            KeyCode::PageUp => app.scroll_help(-5),
            KeyCode::PageDown => app.scroll_help(5),
            KeyCode::Home => app.help_scroll = 0,
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => app.close_help(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Pane;
    use tempfile::TempDir;

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.navigator.active_tab(), Tab::Search);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.navigator.active_tab(), Tab::Home);
    }

    #[test]
    fn test_enter_and_back() {
        let mut app = App::default();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.visible_detail_id(), Some("tvshow-456"));
        assert_eq!(app.focus, Pane::Detail);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator.visible_detail_id(), None);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.status_message.as_deref(), Some("Already at the start"));
    }

    #[test]
    fn test_close_details_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.active_stack().len(), 3);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.navigator.active_stack().len(), 1);
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.help_scroll, 5);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);

        // Navigation keys are ignored while help is open.
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.navigator.active_tab(), Tab::Home);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_save_and_load_shortcuts() {
        let dir = TempDir::new().unwrap();
        let mut app = App::default();
        app.session_file = Some(dir.path().join("session.json"));

        press(&mut app, KeyCode::Enter);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.status_message.take().unwrap().starts_with("Saved session"));

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.navigator.active_stack().len(), 1);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert!(app.status_message.take().unwrap().starts_with("Loaded session"));
        assert_eq!(app.navigator.visible_detail_id(), Some("movie-123"));
    }

    #[test]
    fn test_load_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut app = App::default();
        app.session_file = Some(dir.path().join("missing.json"));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert!(app.status_message.unwrap().starts_with("Load failed"));
    }
}
