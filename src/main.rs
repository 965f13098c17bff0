use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use inquiry_desk::app::action::Action;
use inquiry_desk::app::event::AppEvent;
use inquiry_desk::app::handler;
use inquiry_desk::app::state::AppState;
use inquiry_desk::app::tasks;
use inquiry_desk::logging::SubmissionJournal;
use inquiry_desk::transport::http::HttpTransport;
use inquiry_desk::transport::Transport;
use inquiry_desk::util::debounce::Debouncer;
use inquiry_desk::{config, logging, ui};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init_tracing(&cfg.logging)?;
    info!(endpoint = %cfg.endpoint.base_url, "starting inquiry-desk");

    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::new(&cfg.endpoint).context("Failed to build HTTP client")?,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, transport).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "inquiry-desk exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn viewport_height(terminal: &Terminal<CrosstermBackend<io::Stdout>>) -> Result<u16> {
    let size = terminal.size()?;
    Ok(ui::layout::form_viewport_height(Rect::new(0, 0, size.width, size.height)))
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    transport: Arc<dyn Transport>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut journal = SubmissionJournal::new(&cfg.logging);
    let mut resize_debouncer = Debouncer::new(Duration::from_millis(cfg.ui.resize_debounce_ms));
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (10 FPS = 100ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    tasks::spawn_startup_probes(transport.clone(), event_tx.clone());

    // Initial render
    state.set_viewport_height(viewport_height(terminal)?);
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Drain settled submissions into the journal
        for entry in state.journal_entries.drain(..) {
            journal.record(&entry);
        }

        // Process actions
        for action in actions {
            match action {
                Action::Submit { payload } => {
                    info!(fields = payload.len(), "submitting inquiry");
                    tasks::spawn_submission(transport.clone(), payload, event_tx.clone());
                }
                Action::ScheduleRedraw => {
                    let tx = event_tx.clone();
                    resize_debouncer.call(move || {
                        let _ = tx.send(AppEvent::Redraw);
                    });
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            if state.form.is_submitting() {
                tracing::warn!("quitting with a submission still in flight");
            }
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            state.set_viewport_height(viewport_height(terminal)?);
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
