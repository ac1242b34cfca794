use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::state::Navigator;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::controls::CONTROLS_HEIGHT;
use crate::tui::components::footer::FOOTER_HEIGHT;
use crate::tui::components::header::HEADER_HEIGHT;
use crate::tui::components::{CardPanel, Controls, ControlsLayout, Footer, Header};

/// Widest the content column gets on large terminals.
const MAX_CONTENT_WIDTH: u16 = 90;
/// Tallest the card gets.
const MAX_CARD_HEIGHT: u16 = 16;

/// Screen geometry, cached after each draw for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub card: Rect,
    pub controls_row: Rect,
    pub controls: ControlsLayout,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, total: usize) -> Self {
        use Constraint::{Length, Max, Min};

        let [column] = Layout::horizontal([Max(MAX_CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [header, _, card, _, controls_row, footer] = Layout::vertical([
            Length(HEADER_HEIGHT),
            Length(1),
            Min(5),
            Length(1),
            Length(CONTROLS_HEIGHT),
            Length(FOOTER_HEIGHT),
        ])
        .areas(column);

        // Cap the card height and keep it centered in its slot.
        let [card] = Layout::vertical([Max(MAX_CARD_HEIGHT)])
            .flex(Flex::Center)
            .areas(card);

        Self {
            header,
            card,
            controls_row,
            controls: ControlsLayout::compute(controls_row, total),
            footer,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, nav: &Navigator, tui: &mut TuiState) {
    let deck = nav.deck();
    let view = nav.snapshot();
    let layout = ScreenLayout::compute(frame.area(), view.total);
    tui.layout = layout;

    Header {
        title: deck.title(),
        subtitle: deck.subtitle(),
        guidelines: deck.guidelines(),
        progress: view.progress,
        theme: &tui.theme,
    }
    .render(frame, layout.header);

    CardPanel {
        view,
        theme: &tui.theme,
    }
    .render(frame, layout.card);

    Controls {
        position: view.position,
        total: view.total,
        at_first: nav.at_first(),
        at_last: nav.at_last(),
        theme: &tui.theme,
    }
    .render(frame, layout.controls_row);

    Footer {
        source_note: deck.source_note(),
        theme: &tui.theme,
    }
    .render(frame, layout.footer);
}
