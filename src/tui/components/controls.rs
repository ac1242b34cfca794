//! # Controls Component
//!
//! The button row under the card:
//!
//! ```text
//!   ┌───┐  ┌─────────┐  ┌───┐  ┌───┐
//!   │ ◀ │  │ 3 / 25  │  │ ↺ │  │ ▶ │
//!   └───┘  └─────────┘  └───┘  └───┘
//! ```
//!
//! Previous is disabled on the first card and next on the last one. Reset is
//! always enabled. Geometry lives in `ControlsLayout` so mouse hit-testing
//! uses exactly the rectangles that were drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const CONTROLS_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 5;
const GAP: u16 = 2;

const PREVIOUS_LABEL: &str = "◀";
const RESET_LABEL: &str = "↺";
const NEXT_LABEL: &str = "▶";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsLayout {
    pub previous: Rect,
    pub counter: Rect,
    pub reset: Rect,
    pub next: Rect,
}

impl ControlsLayout {
    /// Lays the four boxes out centered in `area`. `total` sizes the counter.
    pub fn compute(area: Rect, total: usize) -> Self {
        let widest = counter_label(total, total);
        let counter_width = widest.width() as u16 + 4;
        let [previous, counter, reset, next] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(counter_width),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(GAP)
        .areas(area);
        Self {
            previous,
            counter,
            reset,
            next,
        }
    }

    /// Which enabled button, if any, sits under the given cell.
    pub fn hit(&self, column: u16, row: u16, at_first: bool, at_last: bool) -> Option<Action> {
        let position = Position::new(column, row);
        if self.previous.contains(position) && !at_first {
            Some(Action::Previous)
        } else if self.reset.contains(position) {
            Some(Action::Reset)
        } else if self.next.contains(position) && !at_last {
            Some(Action::Next)
        } else {
            None
        }
    }
}

fn counter_label(position: usize, total: usize) -> String {
    format!("{position} / {total}")
}

pub struct Controls<'a> {
    pub position: usize,
    pub total: usize,
    pub at_first: bool,
    pub at_last: bool,
    pub theme: &'a Theme,
}

impl Controls<'_> {
    fn button(label: &str, style: Style) -> Paragraph<'_> {
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(style))
    }

    fn button_style(&self, disabled: bool) -> Style {
        if disabled {
            self.theme.button_disabled
        } else {
            self.theme.button
        }
    }
}

impl Component for Controls<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = ControlsLayout::compute(area, self.total);

        frame.render_widget(
            Self::button(PREVIOUS_LABEL, self.button_style(self.at_first)),
            layout.previous,
        );
        frame.render_widget(
            Paragraph::new(counter_label(self.position, self.total))
                .style(self.theme.counter)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(self.theme.counter)),
            layout.counter,
        );
        frame.render_widget(
            Self::button(RESET_LABEL, self.button_style(false)),
            layout.reset,
        );
        frame.render_widget(
            Self::button(NEXT_LABEL, self.button_style(self.at_last)),
            layout.next,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn area() -> Rect {
        Rect::new(0, 10, 60, CONTROLS_HEIGHT)
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_layout_is_ordered_and_inside_area() {
        let layout = ControlsLayout::compute(area(), 25);
        assert!(layout.previous.right() <= layout.counter.left());
        assert!(layout.counter.right() <= layout.reset.left());
        assert!(layout.reset.right() <= layout.next.left());
        for rect in [layout.previous, layout.counter, layout.reset, layout.next] {
            assert_eq!(rect.y, 10);
            assert_eq!(rect.height, CONTROLS_HEIGHT);
        }
    }

    #[test]
    fn test_hit_enabled_buttons() {
        let layout = ControlsLayout::compute(area(), 3);
        let (x, y) = center(layout.previous);
        assert_eq!(layout.hit(x, y, false, false), Some(Action::Previous));
        let (x, y) = center(layout.reset);
        assert_eq!(layout.hit(x, y, true, true), Some(Action::Reset));
        let (x, y) = center(layout.next);
        assert_eq!(layout.hit(x, y, false, false), Some(Action::Next));
    }

    #[test]
    fn test_hit_disabled_buttons() {
        let layout = ControlsLayout::compute(area(), 3);
        let (x, y) = center(layout.previous);
        assert_eq!(layout.hit(x, y, true, false), None);
        let (x, y) = center(layout.next);
        assert_eq!(layout.hit(x, y, false, true), None);
    }

    #[test]
    fn test_hit_counter_and_outside() {
        let layout = ControlsLayout::compute(area(), 3);
        let (x, y) = center(layout.counter);
        assert_eq!(layout.hit(x, y, false, false), None);
        assert_eq!(layout.hit(0, 0, false, false), None);
    }

    #[test]
    fn test_renders_counter() {
        let backend = TestBackend::new(60, CONTROLS_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let mut controls = Controls {
            position: 3,
            total: 25,
            at_first: false,
            at_last: false,
            theme: &theme,
        };
        terminal
            .draw(|f| {
                controls.render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("3 / 25"));
        assert!(text.contains("◀"));
        assert!(text.contains("▶"));
    }
}
