//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into core `Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The driver's presenter only raises a flag; the loop draws when the flag is
//! set or the terminal was resized.
//!
//! - **Transition running**: polls every ~16ms so timer continuations coming
//!   back from the scheduler are applied promptly.
//! - **Idle**: sleeps up to 250ms between polls, redrawing only on events.

pub mod component;
pub mod components;
pub mod event;
pub mod input;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::driver::{Driver, Presenter};
use crate::core::pearls;
use crate::core::state::CardView;
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::input::InputRouter;
use crate::tui::theme::Theme;
use crate::tui::ui::ScreenLayout;

const ACTIVE_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    /// Built once, borrowed by every component
    pub theme: Theme,
    /// Geometry from the last draw
    pub layout: ScreenLayout,
    pub input: InputRouter,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            layout: ScreenLayout::default(),
            input: InputRouter::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Presenter for the terminal: remembers that a redraw is due.
#[derive(Debug, Default)]
pub struct RedrawFlag {
    dirty: bool,
}

impl RedrawFlag {
    /// Returns whether a redraw was requested, clearing the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Presenter for RedrawFlag {
    fn present(&mut self, view: CardView<'_>) {
        debug!(
            "Render card {}/{} (flipped={}, locked={}, progress={:.2})",
            view.position, view.total, view.flipped, view.locked, view.progress
        );
        self.dirty = true;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let deck =
        pearls::hepatic_pearls().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let (driver, rx) = Driver::new(deck, config.timing, RedrawFlag::default());

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, driver, rx);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Pearls shut down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut driver: Driver<RedrawFlag>,
    mut rx: UnboundedReceiver<Action>,
) -> io::Result<()> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if driver.presenter_mut().take() {
            needs_redraw = true;
        }
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, driver.navigator(), &mut tui))?;
            needs_redraw = false;
        }
        tui.input.sync(driver.navigator(), tui.layout);

        let timeout = if driver.navigator().is_locked() {
            ACTIVE_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if event == TuiEvent::Resize {
                needs_redraw = true;
                continue;
            }
            if !process_event(&mut driver, &mut tui, &event) {
                // Dropping the driver cancels any pending transition.
                return Ok(());
            }
        }

        // Deferred continuations from the scheduler
        while let Ok(action) = rx.try_recv() {
            driver.dispatch(action);
        }
    }
}

/// Routes one input event and dispatches the resulting action.
///
/// Returns `false` when the app should quit. The router is re-synced after
/// each dispatch so later clicks in the same drained batch see the current
/// boundaries.
fn process_event(driver: &mut Driver<RedrawFlag>, tui: &mut TuiState, event: &TuiEvent) -> bool {
    let Some(action) = tui.input.handle_event(event) else {
        return true;
    };
    if !driver.dispatch(action) {
        return false;
    }
    tui.input.sync(driver.navigator(), tui.layout);
    true
}
