//! kintree - Family Tree Record Keeper
//!
//! A local-first, vim-style TUI for keeping family member records
//! behind a small account gate.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod auth;
mod input;
mod logging;
mod registry;
mod store;
mod ui;

use app::{App, AppConfig};
use registry::Registry;
use store::{Store, StoreConfig};
use ui::components::{AuthForm, AuthMode};
use ui::renderer::Renderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let store_path = args.get(1).map(PathBuf::from);

    let mut config = AppConfig::default();
    if let Some(path) = store_path {
        config.store_path = path;
    }

    // Create parent directory
    if let Some(parent) = config.store_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let log_dir = config
        .store_path
        .parent()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    let _logger = logging::init_logging(&log_dir)?;

    let mut store = Store::open(StoreConfig::with_path(&config.store_path))?;
    if auth::ensure_default_account(&mut store)? {
        info!("seeded default account");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, store, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut store: Store,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let Some(username) = run_auth(terminal, &mut store)? else {
            return Ok(());
        };
        info!("user '{}' signed in", username);

        let registry = Registry::load(&store)?;
        let app_config = AppConfig {
            store_path: config.store_path.clone(),
            message_timeout: config.message_timeout,
        };
        let mut app = App::new(app_config, store, registry, username);

        run_app(terminal, &mut app)?;

        let wants_logout = app.wants_logout;
        store = app.store;

        if !wants_logout {
            return Ok(());
        }
        info!("user signed out");
    }
}

fn run_auth(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let mut form = AuthForm::new();

    loop {
        terminal.draw(|frame| {
            Renderer::render_auth(frame, &form);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Esc, _) => return Ok(None),
                    (KeyCode::Char('r'), KeyModifiers::CONTROL) => form.toggle_mode(),
                    (KeyCode::Tab, _) | (KeyCode::Down, _) | (KeyCode::Up, _) => {
                        form.next_field()
                    }
                    (KeyCode::Enter, _) => {
                        if let Some(username) = submit_auth(store, &mut form) {
                            return Ok(Some(username));
                        }
                    }
                    (KeyCode::Backspace, _) => form.delete_char(),
                    (KeyCode::Left, _) => form.cursor_left(),
                    (KeyCode::Right, _) => form.cursor_right(),
                    (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                        form.insert_char(c)
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Attempt the pending login or registration; registration signs the
/// new account in directly.
fn submit_auth(store: &mut Store, form: &mut AuthForm) -> Option<String> {
    let username = form.username.clone();
    let password = form.password.clone();

    let result = match form.mode {
        AuthMode::Login => auth::login(store, &username, &password).map(|a| a.username),
        AuthMode::Register => auth::register(store, &username, &password)
            .and_then(|()| auth::login(store, &username, &password).map(|a| a.username)),
    };

    match result {
        Ok(username) => Some(username),
        Err(e) => {
            form.set_error(e.to_string());
            form.password.clear();
            if form.on_password_field() {
                form.cursor = 0;
            }
            None
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
