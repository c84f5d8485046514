//! Form Wizard - a three-step terminal form
//!
//! Collects personal details, education details, and travel history,
//! gating each step on its required fields, then shows a read-only summary.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::{ConfigSource, WizardConfig};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submission::JsonFileSink;

fn main() -> Result<()> {
    // Initialize logging; the guard flushes the file on exit
    let log_dir = WizardConfig::log_dir();
    let _log_guard = match logging::init(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    };

    let config = match WizardConfig::load() {
        Ok((config, ConfigSource::File(path))) => {
            tracing::info!("Loaded configuration from {}", path.display());
            config
        }
        Ok((config, ConfigSource::Defaults)) => {
            tracing::info!("No configuration file, using defaults");
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable configuration: {e:#}");
            WizardConfig::default()
        }
    };
    let sink = JsonFileSink::new(config.resolved_export_dir());
    tracing::debug!("Exports go to {}", sink.dir().display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Box::new(sink));
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            // Resize and other events just trigger the next redraw
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
