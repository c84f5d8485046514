//! Application state and core logic

use crate::config::WizardConfig;
use crate::state::{Advance, FieldKind, Focus, WizardButton, WizardState};
use crate::submission::SubmissionSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
const CTRL_C_WINDOW: Duration = Duration::from_secs(2);

/// Main application struct
pub struct App {
    /// Current wizard state
    pub state: WizardState,
    /// Loaded configuration, used to seed new forms
    pub config: WizardConfig,
    /// Export target for finished submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: WizardConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: WizardState::new(config.initial_form()),
            config,
            sink,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Double Ctrl+C quits from anywhere, including over dialogs
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if self.state.nav.is_complete() {
            self.handle_summary_key(key)
        } else {
            self.handle_step_key(key);
            Ok(())
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= CTRL_C_WINDOW => {
                tracing::info!("Quit requested");
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Handle keys on an editable step
    fn handle_step_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focused_kind = self.state.focused_field().map(|f| f.kind());

        match key.code {
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Char('n') if ctrl => self.go_next(),
            KeyCode::Char('b') if ctrl => self.go_back(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => match self.state.focus {
                Focus::Button(button) => self.activate(button),
                Focus::Field(_) if focused_kind == Some(FieldKind::Checkbox) => {
                    self.state.toggle_pursuing()
                }
                Focus::Field(_) => self.state.next_focus(),
            },
            KeyCode::Left if focused_kind.is_some_and(|k| k != FieldKind::Text) => {
                self.state.cycle_choice(false)
            }
            KeyCode::Right if focused_kind.is_some_and(|k| k != FieldKind::Text) => {
                self.state.cycle_choice(true)
            }
            KeyCode::Char(c) if !ctrl => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
    }

    /// Trigger a button; disabled buttons do nothing
    fn activate(&mut self, button: WizardButton) {
        if !self.state.is_button_enabled(button) {
            return;
        }
        match button {
            WizardButton::AddTravel => {
                if self.state.add_place_and_city() {
                    tracing::debug!(entries = self.state.form.travel().len(), "Travel entry added");
                }
            }
            WizardButton::Back => self.go_back(),
            WizardButton::Forward => self.go_next(),
        }
    }

    fn go_next(&mut self) {
        let from = self.state.nav.active_step();
        match self.state.go_next() {
            Advance::Blocked => {
                tracing::debug!(step = from, "Forward navigation blocked by step gate");
            }
            Advance::Moved => {
                tracing::debug!(from, to = self.state.nav.active_step(), "Step advanced");
            }
            Advance::Submitted => self.log_submission(),
        }
    }

    fn go_back(&mut self) {
        let from = self.state.nav.active_step();
        if self.state.go_back() {
            tracing::debug!(from, to = self.state.nav.active_step(), "Step retreated");
        }
    }

    fn log_submission(&self) {
        let Some(submission) = &self.state.submission else {
            return;
        };
        match serde_json::to_string(submission) {
            Ok(json) => tracing::info!(id = %submission.id, record = %json, "Form submitted"),
            Err(e) => tracing::warn!("Failed to serialize submission {}: {e}", submission.id),
        }
    }

    /// Handle keys on the summary screen
    fn handle_summary_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y')
                if key.modifiers.is_empty()
                    || key.modifiers.contains(crate::platform::COPY_MODIFIER) =>
            {
                if let Err(e) = self.copy_summary() {
                    tracing::warn!("Clipboard copy failed: {e}");
                    self.push_error(format!("Failed to copy summary: {e}"));
                }
            }
            KeyCode::Char('e') => self.export_submission(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Copy the plain-text summary to the clipboard
    fn copy_summary(&mut self) -> Result<()> {
        let Some(submission) = &self.state.submission else {
            return Ok(());
        };
        let text = submission.to_text();
        copy_to_clipboard(&text)?;
        self.status_message = Some(format!("Copied {} chars", text.len()));
        Ok(())
    }

    /// Export the submission through the configured sink
    pub fn export_submission(&mut self) {
        let Some(submission) = &self.state.submission else {
            return;
        };
        match self.sink.export(submission) {
            Ok(path) => {
                tracing::info!("Exported submission to {}", path.display());
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Export failed: {e}");
                self.push_error(format!("Export failed: {e}"));
            }
        }
    }

    /// Discard the current answers and start from the first step
    pub fn restart(&mut self) {
        self.state = WizardState::new(self.config.initial_form());
        self.status_message = Some("Started a new form".to_string());
        tracing::debug!("Wizard restarted");
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
