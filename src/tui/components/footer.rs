use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const FOOTER_HEIGHT: u16 = 2;
const KEY_HINTS: &str = "🎯 Usa ← → para navegar • ↑↓ para voltear • o clic en la tarjeta • r reinicia • q sale";

/// Keyboard hints plus the deck's source note.
pub struct Footer<'a> {
    pub source_note: &'a str,
    pub theme: &'a Theme,
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::styled(KEY_HINTS, self.theme.hint)];
        if !self.source_note.is_empty() {
            lines.push(Line::styled(
                format!("💊 {}", self.source_note),
                self.theme.footnote,
            ));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
