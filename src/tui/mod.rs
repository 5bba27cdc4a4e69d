//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the screen and
//! translates terminal events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! start ─► Resize(size) ─► Start ─► SpawnFetch ──► tokio task
//!                                                     │
//!   ┌──────────── draw ◄── update ◄── mpsc ◄──────────┘
//!   │
//!   └─► poll input (100ms) ─► Resize / Quit ─► update
//! ```
//!
//! The loop only redraws after something changed: an input event or a
//! background action. Quit returns straight away; a fetch still in flight
//! is left to die with the runtime.

mod component;
mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Size;

use crate::client::{Fetcher, HttpFetcher};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::ViewState;
use crate::tui::event::{EventSource, TerminalEvents, TuiEvent};
use crate::tui::theme::Theme;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

struct TerminalModeGuard {
    mouse_capture: bool,
}

impl TerminalModeGuard {
    fn new(mouse_capture: bool) -> io::Result<Self> {
        if mouse_capture {
            execute!(stdout(), EnableMouseCapture)?;
            info!("Terminal modes enabled (mouse)");
        }
        Ok(Self { mouse_capture })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse_capture {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
    }
}

/// Owns the `ViewState` and applies every action to it, one at a time.
///
/// Background work reports back through the mpsc channel; the loop drains it
/// between input polls, so all mutation happens on the loop's thread.
pub struct DisplayLoop {
    state: ViewState,
    fetcher: Arc<dyn Fetcher>,
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
}

impl DisplayLoop {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: ViewState::new(),
            fetcher,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies `action` and performs the effect `update` asked for.
    ///
    /// `Effect::SpawnFetch` needs a tokio runtime on the current thread.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatching {}", action.name());
        let effect = update(&mut self.state, action);
        if effect == Effect::SpawnFetch {
            spawn_fetch(self.fetcher.clone(), self.tx.clone());
        }
        effect
    }

    pub fn handle_event(&mut self, event: TuiEvent) -> Effect {
        match event {
            TuiEvent::Quit => self.dispatch(Action::Quit),
            TuiEvent::Resize(width, height) => self.dispatch(Action::Resize { width, height }),
        }
    }

    /// Applies every background action already queued. Returns true if any
    /// arrived.
    pub fn drain_background(&mut self) -> bool {
        let mut received = false;
        while let Ok(action) = self.rx.try_recv() {
            received = true;
            self.dispatch(action);
        }
        received
    }

    /// Blocks up to `timeout` for one background action and applies it.
    #[cfg(test)]
    fn wait_for_background(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(_) => false,
        }
    }
}

fn spawn_fetch(fetcher: Arc<dyn Fetcher>, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {}", fetcher.target());
    tokio::spawn(async move {
        let result = fetcher.fetch_result().await;
        if tx.send(Action::FetchCompleted(result)).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let fetcher = HttpFetcher::new(config.url.clone(), config.timeout).map_err(io::Error::other)?;
    let theme = Theme::from_style(&config.style);
    let mut display = DisplayLoop::new(Arc::new(fetcher));

    let mut terminal = ratatui::try_init()?;
    let result = {
        let _terminal_mode_guard = match TerminalModeGuard::new(config.mouse_capture) {
            Ok(guard) => Some(guard),
            Err(e) => {
                warn!("Failed to enable terminal modes: {}", e);
                None
            }
        };
        match terminal.size() {
            Ok(size) => event_loop(&mut display, &mut TerminalEvents, size, |state| {
                terminal
                    .draw(|f| ui::draw_ui(f, state, &theme))
                    .map(|_| ())
            }),
            Err(e) => Err(e),
        }
    };

    ratatui::restore();
    result
}

/// Runs until a Quit event. `size` is the terminal size at startup; `draw`
/// paints one frame from the current state.
fn event_loop(
    display: &mut DisplayLoop,
    events: &mut impl EventSource,
    size: Size,
    mut draw: impl FnMut(&ViewState) -> io::Result<()>,
) -> io::Result<()> {
    // Crossterm only reports changes, so seed the size ourselves.
    display.dispatch(Action::Resize {
        width: size.width,
        height: size.height,
    });
    display.dispatch(Action::Start);

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            draw(display.state())?;
            needs_redraw = false;
        }

        for event in events.poll(POLL_TIMEOUT)? {
            needs_redraw = true;
            if display.handle_event(event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }

        if display.drain_background() {
            needs_redraw = true;
        }
    }
}
