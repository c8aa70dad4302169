//! panestack - Adaptive Multi-Pane Navigator
//!
//! A terminal browser over sample movie, show and person pages. Widening the
//! terminal reveals up to three panes; each tab keeps its own history.

use std::fs::File;
use std::io;
use std::sync::Mutex;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use panestack::application::{App, AppMode};
use panestack::domain::RandomIds;
use panestack::infrastructure::{AppConfig, SessionRepository, CONFIG_ENV};
use panestack::presentation::{render_ui, InputHandler};

/// Entry point for the panestack terminal navigator.
///
/// Loads the configuration, starts file logging, restores the last session
/// when one is configured, and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the log file cannot be
/// created, or the terminal interface fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::resolve_path(std::env::args().nth(1), std::env::var(CONFIG_ENV).ok());
    let config = AppConfig::load(config_path.as_deref())?;
    init_logging(&config)?;

    let mut app = App::new(config.build_navigator(), Box::new(RandomIds), config.thresholds());
    app.session_file = config.session_file.clone();
    if let Some(path) = config.session_file.as_deref().filter(|p| p.exists()) {
        match SessionRepository::load_session(path, app.navigator.layout()) {
            Ok(loaded) => app.set_load_result(Ok(loaded)),
            Err(err) => {
                warn!(error = %err, "starting with a fresh session");
                app.set_load_result(Err(err.to_string()));
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    if let Some(path) = app.session_file.as_deref() {
        if let Err(err) = SessionRepository::save_session(&app.navigator, path) {
            warn!(error = %err, "could not save session on exit");
        }
    }
    info!("exiting");

    Ok(())
}

/// Routes `tracing` output to the configured log file; the terminal itself
/// is taken over by the UI.
fn init_logging(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(&config.log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(log_file = %config.log_file.display(), "panestack starting");
    Ok(())
}

/// Main application event loop.
///
/// Resizes feed the layout mode (and with it the three-pane signal); key
/// presses go to the input handler. `q` quits in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let size = terminal.size()?;
    app.update_viewport_width(size.width);

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
            },
            Event::Resize(width, _) => app.update_viewport_width(width),
            _ => {}
        }
    }
}
