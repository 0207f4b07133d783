//! Terminal application loop.

use crate::component::{Action, Event};
use crate::host::Host;
use anyhow::Context as _;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// How long the blocking reader waits for input before checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application handle.
pub struct Application {
    tick_rate: Duration,
}

impl Application {
    /// Create an application whose transitions advance every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Take over the terminal and run `host` until it asks to quit.
    pub fn run(self, host: Host) -> anyhow::Result<()> {
        let rt = Runtime::new().context("failed to start tokio runtime")?;
        rt.block_on(self.run_loop(host))
    }

    async fn run_loop(&self, mut host: Host) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app_loop(&mut terminal, &mut host).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        host: &mut Host,
    ) -> anyhow::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut reader = tokio::task::spawn_blocking(move || read_events(event_tx));
        let mut ticker = tokio::time::interval(self.tick_rate);

        info!(tick_ms = self.tick_rate.as_millis() as u64, "run loop started");
        terminal.draw(|frame| host.render(frame))?;

        loop {
            tokio::select! {
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        // The reader stopped; surface its error if it had one.
                        (&mut reader).await??;
                        return Ok(());
                    };
                    let Some(event) = convert_event(event) else {
                        continue;
                    };
                    if let Some(Action::Quit) = host.handle_event(event) {
                        return Ok(());
                    }
                    terminal.draw(|frame| host.render(frame))?;
                }
                _ = ticker.tick() => {
                    if host.tick() {
                        terminal.draw(|frame| host.render(frame))?;
                    }
                }
            }
        }
    }
}

/// Forward terminal events until the receiving side goes away.
fn read_events(tx: mpsc::UnboundedSender<CrosstermEvent>) -> io::Result<()> {
    while !tx.is_closed() {
        if event::poll(POLL_INTERVAL)? && tx.send(event::read()?).is_err() {
            break;
        }
    }
    debug!("event reader stopped");
    Ok(())
}

fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
        _ => None,
    }
}
