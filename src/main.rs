//! Feedback TUI - terminal feedback form
//!
//! A Ratatui-based form that collects a satisfaction rating, free-text
//! feedback and contact details, then posts them to a webhook.

mod app;
mod config;
mod platform;
mod state;
mod ui;
mod webhook;

use anyhow::Result;
use app::App;
use config::FeedbackConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::Theme;
use webhook::WebhookClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedback_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Missing endpoint is reported here and on every submit, never fatal
    let config = FeedbackConfig::from_environment();
    if let Some(problem) = config.endpoint_problem() {
        tracing::warn!("{problem}");
    }

    let webhook = WebhookClient::new(config.endpoint())?;
    tracing::debug!(configured = webhook.is_configured(), "Webhook client ready");
    let colorfgbg = std::env::var("COLORFGBG").ok();
    let theme = Theme::from_preference(config.theme, colorfgbg.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(webhook), theme);
    let result = run_app(&mut terminal, &mut app).await;

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

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished webhook calls before drawing
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a submission is running so the result shows promptly
        let poll_duration = if app.form.submission.is_in_flight() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // event::poll blocks; keep the runtime's worker threads free for the webhook task
        let event = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(poll_duration)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })?;

        if let Some(Event::Key(key)) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Global quit: Ctrl+C
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }

            app.handle_key(key);
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
