//! # Card Component
//!
//! The flashcard itself: a bordered panel showing either the question or the
//! answer face.
//!
//! ## Faces
//!
//! - **Question**: "PREGUNTA CLÍNICA" badge, bold text, flip hint on the
//!   bottom border.
//! - **Answer**: "RESPUESTA" badge, regular text.
//!
//! ## Transition
//!
//! While navigation is locked the body is left blank and the border dims.
//! This is the terminal stand-in for the fade/scale-out: the old card
//! disappears, the index moves underneath, and the new card only shows once
//! the lock is released.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::state::CardView;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const QUESTION_BADGE: &str = " 🩺 PREGUNTA CLÍNICA ";
const ANSWER_BADGE: &str = " 💡 RESPUESTA ";
const FLIP_HINT: &str = " ↑↓ o clic para ver respuesta ";

/// Horizontal padding (per side) between the border and the text.
const CONTENT_PAD_H: u16 = 3;
/// Total horizontal space consumed by borders and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;

pub struct CardPanel<'a> {
    pub view: CardView<'a>,
    pub theme: &'a Theme,
}

impl CardPanel<'_> {
    fn face_text(&self) -> &str {
        if self.view.flipped {
            &self.view.card.back
        } else {
            &self.view.card.front
        }
    }

    /// Number of wrapped lines the current face needs at `width` columns.
    ///
    /// Uses `textwrap` with word-based wrapping, which matches ratatui's
    /// `Paragraph` wrapping closely enough for vertical centering.
    pub fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        textwrap::wrap(self.face_text().trim(), inner).len() as u16
    }
}

impl Component for CardPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.view.locked {
            let block = Block::bordered().border_style(self.theme.transition);
            frame.render_widget(block, area);
            return;
        }

        let (badge, badge_style, text_style) = if self.view.flipped {
            (ANSWER_BADGE, self.theme.answer_badge, self.theme.answer_text)
        } else {
            (QUESTION_BADGE, self.theme.question_badge, self.theme.question_text)
        };

        let mut block = Block::bordered()
            .border_style(self.theme.card_border)
            .title(Line::styled(badge, badge_style))
            .padding(Padding::horizontal(CONTENT_PAD_H));
        if !self.view.flipped {
            block = block.title_bottom(Line::styled(FLIP_HINT, self.theme.hint).centered());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Vertically center the wrapped text inside the panel.
        let height = self.content_height(area.width).min(inner.height);
        let [_, text_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let paragraph = Paragraph::new(self.face_text().trim())
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::Card;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn view(card: &Card, flipped: bool, locked: bool) -> CardView<'_> {
        CardView {
            card,
            flipped,
            locked,
            position: 1,
            total: 2,
            progress: 0.5,
        }
    }

    fn render_text(view: CardView<'_>) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let mut panel = CardPanel { view, theme: &theme };
        terminal
            .draw(|f| {
                panel.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_question_face() {
        let card = Card::new("What is Gilbert", "Benign");
        let text = render_text(view(&card, false, false));
        assert!(text.contains("What is Gilbert"));
        assert!(text.contains("PREGUNTA"));
        assert!(!text.contains("Benign"));
    }

    #[test]
    fn test_answer_face() {
        let card = Card::new("What is Gilbert", "Benign");
        let text = render_text(view(&card, true, false));
        assert!(text.contains("Benign"));
        assert!(text.contains("RESPUESTA"));
        assert!(!text.contains("What is Gilbert"));
    }

    #[test]
    fn test_locked_hides_content() {
        let card = Card::new("What is Gilbert", "Benign");
        let text = render_text(view(&card, true, true));
        assert!(!text.contains("Benign"));
        assert!(!text.contains("What is Gilbert"));
    }

    #[test]
    fn test_content_height_wraps() {
        let card = Card::new("one two three four five six", "x");
        let theme = Theme::default();
        let panel = CardPanel {
            view: view(&card, false, false),
            theme: &theme,
        };
        // 10 columns of text after borders and padding
        assert!(panel.content_height(10 + HORIZONTAL_OVERHEAD) >= 3);
        assert_eq!(panel.content_height(200), 1);
    }
}
