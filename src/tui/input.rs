//! # Input Router
//!
//! Turns `TuiEvent`s into core `Action`s. Pure routing, no state changes of
//! its own.
//!
//! | Input                | Action     |
//! |----------------------|------------|
//! | ←                    | `Previous` |
//! | →                    | `Next`     |
//! | ↑ / ↓ / Space        | `Flip`     |
//! | `r`                  | `Reset`    |
//! | `q` / Esc / Ctrl+C   | `Quit`     |
//! | click on card        | `Flip`     |
//! | click on ◀ / ↺ / ▶   | `Previous` / `Reset` / `Next` |
//!
//! Clicks on a disabled button produce nothing. Arrow keys at a boundary are
//! still forwarded; the reducer treats them as no-ops.

use ratatui::layout::Position;

use crate::core::action::Action;
use crate::core::state::Navigator;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::ui::ScreenLayout;

#[derive(Debug, Default)]
pub struct InputRouter {
    /// Geometry from the last draw (Prop)
    pub layout: ScreenLayout,
    /// Previous button disabled (Prop)
    pub at_first: bool,
    /// Next button disabled (Prop)
    pub at_last: bool,
}

impl InputRouter {
    /// Refreshes props from the current navigation state and layout.
    pub fn sync(&mut self, nav: &Navigator, layout: ScreenLayout) {
        self.layout = layout;
        self.at_first = nav.at_first();
        self.at_last = nav.at_last();
    }

    fn click(&self, column: u16, row: u16) -> Option<Action> {
        if self.layout.card.contains(Position::new(column, row)) {
            return Some(Action::Flip);
        }
        self.layout
            .controls
            .hit(column, row, self.at_first, self.at_last)
    }
}

impl EventHandler for InputRouter {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match *event {
            TuiEvent::ForceQuit | TuiEvent::Escape | TuiEvent::Char('q') => Some(Action::Quit),
            TuiEvent::Left => Some(Action::Previous),
            TuiEvent::Right => Some(Action::Next),
            TuiEvent::Up | TuiEvent::Down | TuiEvent::Char(' ') => Some(Action::Flip),
            TuiEvent::Char('r') => Some(Action::Reset),
            TuiEvent::Click(column, row) => self.click(column, row),
            TuiEvent::Char(_) | TuiEvent::Resize => None,
        }
    }
}
