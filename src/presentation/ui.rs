use crate::application::{App, AppMode, Pane};
use crate::domain::{links_for, Route};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tab_bar(f, app, chunks[0]);
    render_panes(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let tabs: Vec<_> = app.navigator.tabs().collect();
    let titles: Vec<String> = tabs
        .iter()
        .map(|tab| format!("{} {}", tab.shortcut(), tab.label()))
        .collect();
    let selected = tabs
        .iter()
        .position(|&tab| tab == app.navigator.active_tab())
        .unwrap_or(0);

    let bar = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("panestack | {}", app.layout_mode.label())),
        )
        .style(Style::default().fg(Color::Yellow))
        .highlight_style(Style::default().bg(Color::LightBlue).fg(Color::Black));
    f.render_widget(bar, area);
}

fn render_panes(f: &mut Frame, app: &App, area: Rect) {
    let occupied = app.pane_slots().occupied();
    if occupied.is_empty() {
        return;
    }

    let count = app.layout_mode.pane_count().max(occupied.len()) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (column, (pane, route)) in columns.iter().zip(occupied) {
        render_pane(f, app, *column, pane, route);
    }
}

fn render_pane(f: &mut Frame, app: &App, area: Rect, pane: Pane, route: &Route) {
    let focused = pane == app.focus;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = Vec::new();
    if let Some(detail) = route.payload() {
        lines.push(Line::from(format!("ID: {}", detail.content_id)));
        lines.push(Line::styled(
            format!("Instance: {}", detail.instance_id),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(""));
    }

    let links = links_for(route);
    if links.is_empty() {
        lines.push(Line::styled("Nothing here yet", Style::default().fg(Color::DarkGray)));
    }
    for (index, link) in links.iter().enumerate() {
        let selected = focused && index == app.selected_link;
        let style = if selected {
            Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if selected { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}", link.label), style),
            Span::styled(format!("  [{}]", link.kind.label()), Style::default().fg(Color::Yellow)),
        ]));
    }

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("{} | {}", pane.label(), route.title())),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(body, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => match app.status_message {
            Some(ref status) => status.clone(),
            None => {
                let depth = app.navigator.active_stack().len();
                format!(
                    "Depth: {} | 1-5: tabs | ↑↓: select | Enter: open | ←→/Tab: focus | Esc: back{} | x: close{} | Ctrl+S/O: save/load | ?: help | q: quit",
                    depth,
                    if app.navigator.can_go_back() { "" } else { " (none)" },
                    if app.navigator.can_navigate_to_root() { "" } else { " (none)" },
                )
            }
        },
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("panestack Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"PANESTACK NAVIGATION

=== PANES ===
List     The root screen of the active tab
Detail   A movie or TV show
Extra    A person; shown beside the detail when three panes fit

Widen the terminal to get more panes. Narrow terminals fold
everything into one linear history.

=== TABS ===
1-5             Switch tab; each tab keeps its own history
Active tab key  Close all details and return to the list

=== MOVING AROUND ===
↑↓ or j/k       Select a link in the focused pane
Enter           Open the selected link
←→, l, Tab      Move focus between visible panes
Esc/Backspace/h Go back one step
x               Close all details on this tab

=== FROM THE EXTRA PANE ===
Opening a movie or show from a person replaces the detail pane
and keeps the person open when three panes are visible.
Otherwise it is appended after the person, so going back
returns to them.

=== SESSION ===
Ctrl+S          Save tabs and histories
Ctrl+O          Restore the saved session
q               Quit"#;

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 24)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_three_panes_when_wide() {
        let mut app = App::default();
        app.update_viewport_width(180);
        app.follow_selected_link();
        app.follow_selected_link();

        let screen = rendered(&app, 180);
        assert!(screen.contains("List | Home"));
        assert!(screen.contains("Detail | Movie: movie-123"));
        assert!(screen.contains("Extra | Person: actor-001"));
    }

    #[test]
    fn test_renders_single_pane_when_narrow() {
        let mut app = App::default();
        app.update_viewport_width(60);
        app.follow_selected_link();

        let screen = rendered(&app, 60);
        assert!(screen.contains("Detail | Movie: movie-123"));
        assert!(!screen.contains("List | Home"));
    }

    #[test]
    fn test_help_popup_renders() {
        let mut app = App::default();
        app.show_help();

        let screen = rendered(&app, 100);
        assert!(screen.contains("panestack Help"));
    }
}
