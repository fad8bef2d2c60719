//! Application state and core logic

use crate::api::{ApiClient, ApiError, HttpApiClient};
use crate::config::AppConfig;
use crate::state::{
    AppState, Form, RegistrationResponse, Statistics, SubmitStatus, Toast, View,
};
use crate::validation::validate_registration_form;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Messages sent back to the UI loop by spawned network tasks
#[derive(Debug)]
pub enum AppEvent {
    SubmissionFinished(Result<RegistrationResponse, ApiError>),
    StatisticsLoaded(Result<Statistics, ApiError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for talking to the registration service
    api: Arc<dyn ApiClient>,
    /// Sender cloned into spawned network tasks
    events_tx: UnboundedSender<AppEvent>,
    /// Drained by the main loop every iteration
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the configured service
    pub fn new(config: &AppConfig) -> Self {
        let api = HttpApiClient::new(config.server_url(), config.request_timeout());
        Self::with_client(Arc::new(api))
    }

    /// Create an App over an arbitrary client (used by tests)
    pub fn with_client(api: Arc<dyn ApiClient>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-iteration housekeeping: apply settled network tasks and drop
    /// stale toasts
    pub fn tick(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        self.state.expire_toast();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // View switching works from anywhere
        match key.code {
            KeyCode::F(1) => {
                self.state.current_view = View::Register;
                return;
            }
            KeyCode::F(2) => {
                self.open_statistics();
                return;
            }
            KeyCode::F(3) => {
                self.state.current_view = View::About;
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::Statistics => self.handle_statistics_key(key),
            View::About => {
                if key.code == KeyCode::Char('q') {
                    self.quit = true;
                }
            }
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_registration();
            return;
        }

        let on_buttons_row = self.state.form.is_buttons_row_active();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_buttons_row => self.state.form.prev_button(),
            KeyCode::Right if on_buttons_row => self.state.form.next_button(),
            // Button order: 0=Reset, 1=Submit
            KeyCode::Enter if on_buttons_row => match self.state.form.selected_button {
                0 => self.state.form.reset(),
                _ => self.submit_registration(),
            },
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_next();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    if field.is_selector() && c == ' ' {
                        field.cycle_next();
                    } else {
                        field.push_char(c);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn handle_statistics_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Right => {
                self.state.stats.active_tab = self.state.stats.active_tab.next();
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.state.stats.active_tab = self.state.stats.active_tab.prev();
            }
            KeyCode::Char('r') => self.load_statistics(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Validate the form and, if it passes, submit it on a background task.
    ///
    /// Invalid input highlights exactly the failing fields and stays
    /// interactive; nothing is sent to the network.
    pub fn submit_registration(&mut self) {
        let values = self.state.form.values();
        let report = validate_registration_form(&values);

        self.state.form.clear_errors();
        if !report.is_valid() {
            self.state.form.apply_report(&report);
            tracing::debug!(?report, "form failed validation");
            return;
        }

        // Overlapping submissions are not guarded against; whichever
        // task's event is handled last determines the displayed state.
        self.state.submit_status = SubmitStatus::Submitting;
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.submit_registration(&values).await;
            let _ = tx.send(AppEvent::SubmissionFinished(result));
        });
    }

    /// Switch to the statistics view, fetching data on first entry
    fn open_statistics(&mut self) {
        self.state.current_view = View::Statistics;
        if self.state.stats.data.is_none() && !self.state.stats.loading {
            self.load_statistics();
        }
    }

    /// Fetch statistics on a background task
    pub fn load_statistics(&mut self) {
        self.state.stats.loading = true;
        self.state.stats.load_failed = false;
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_statistics().await;
            let _ = tx.send(AppEvent::StatisticsLoaded(result));
        });
    }

    /// Apply the result of a settled network task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionFinished(result) => {
                self.state.submit_status = SubmitStatus::Idle;
                match result {
                    Ok(response) => {
                        self.state.toast = Some(Toast::success(response.message));
                        self.state.form.reset();
                    }
                    Err(err) => {
                        // Transport, HTTP and timeout failures all surface
                        // the same way; field values are kept for retry
                        tracing::warn!(%err, "registration failed");
                        self.state.toast = Some(Toast::error("Registration failed"));
                    }
                }
            }
            AppEvent::StatisticsLoaded(result) => {
                self.state.stats.loading = false;
                match result {
                    Ok(stats) => {
                        self.state.stats.data = Some(stats);
                        self.state.stats.load_failed = false;
                    }
                    Err(err) => {
                        tracing::warn!(%err, "failed to load statistics");
                        self.state.stats.load_failed = true;
                    }
                }
            }
        }
    }
}
