//! Application state and core logic

use crate::state::{derive_view, FeedbackForm, Focus, Rating, ViewModel};
use crate::ui::Theme;
use crate::webhook::{SubmitError, WebhookClientTrait};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

type SubmitResult = Result<(), SubmitError>;

/// Main application struct
pub struct App {
    /// The feedback form being filled in
    pub form: FeedbackForm,
    /// Palette used by the renderer
    pub theme: Theme,
    /// Transient hint shown in the status line
    pub status_message: Option<String>,
    /// Webhook the finished form is posted to
    webhook: Arc<dyn WebhookClientTrait>,
    /// Completed webhook calls, drained on every tick
    results_tx: mpsc::UnboundedSender<SubmitResult>,
    results_rx: mpsc::UnboundedReceiver<SubmitResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(webhook: Arc<dyn WebhookClientTrait>, theme: Theme) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            form: FeedbackForm::new(),
            theme,
            status_message: None,
            webhook,
            results_tx,
            results_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn view(&self) -> ViewModel {
        derive_view(&self.form)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // AltGr arrives as Control+Alt and produces ordinary characters
        let is_shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        if is_shortcut {
            if let KeyCode::Char('s') = key.code {
                self.submit();
            }
            return;
        }

        if self.form.submission.is_succeeded() {
            self.handle_success_key(key);
            return;
        }

        let multiline = self.form.is_active_field_multiline();
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.form.next_focus(),
            KeyCode::BackTab => self.form.prev_focus(),
            KeyCode::Down if !multiline => self.form.next_focus(),
            KeyCode::Up if !multiline => self.form.prev_focus(),
            _ => match self.form.focus {
                Focus::Rating => self.handle_rating_key(key),
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
                Focus::Feedback | Focus::Name | Focus::Email => self.handle_text_key(key),
            },
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                if self.form.reset() {
                    tracing::debug!("Form reset for another response");
                    self.status_message = None;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_rating_key(&mut self, key: KeyEvent) {
        let current = self.form.rating;
        let selected = match key.code {
            KeyCode::Left => Some(current.map_or(Rating::Unsatisfied, Rating::prev)),
            KeyCode::Right => Some(current.map_or(Rating::Unsatisfied, Rating::next)),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Rating::from_value),
            KeyCode::Enter => {
                if current.is_some() {
                    self.form.next_focus();
                }
                None
            }
            _ => None,
        };

        if let Some(rating) = selected {
            self.status_message = None;
            self.form.select_rating(rating);
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char(_) | KeyCode::Backspace) {
            self.status_message = None;
        }

        match key.code {
            KeyCode::Char(c) => self.form.input_char(c),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                if self.form.is_active_field_multiline() {
                    self.status_message = None;
                    self.form.input_char('\n');
                } else {
                    self.form.next_focus();
                }
            }
            _ => {}
        }
    }

    /// Start a submission if the form allows it
    ///
    /// The webhook call runs on a spawned task; its result comes back through
    /// the results channel. While one is in flight further calls are refused.
    pub fn submit(&mut self) {
        match self.form.begin_submit(Utc::now()) {
            Ok(payload) => {
                self.status_message = None;
                tracing::info!(rating = payload.rating.value(), "Submitting feedback");

                let webhook = Arc::clone(&self.webhook);
                let results_tx = self.results_tx.clone();
                tokio::spawn(async move {
                    let result = webhook.submit(&payload).await;
                    // Receiver only goes away when the app is shutting down
                    let _ = results_tx.send(result);
                });
            }
            Err(blocked) => {
                tracing::debug!(?blocked, "Submit refused");
                self.status_message = Some(blocked.hint().to_string());
            }
        }
    }

    /// Apply any finished webhook calls to the form
    pub fn poll_submission(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.finish_submission(result);
        }
    }

    fn finish_submission(&mut self, result: SubmitResult) {
        match &result {
            Ok(()) => tracing::info!("Feedback submitted"),
            Err(err) => tracing::warn!("Feedback submission failed: {err}"),
        }
        self.form
            .complete_submit(result.map_err(|err| err.user_message()));
    }

    /// Wait for the in-flight webhook call and apply its result
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(result) = self.results_rx.recv().await {
            self.finish_submission(result);
        }
    }
}
