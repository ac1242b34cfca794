//! # Header Component
//!
//! Deck title, subtitle, guideline attribution and a progress gauge. Stateless: all data arrives as
//! props and the component is rebuilt every frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Rows the header needs: title, subtitle, guidelines, gauge.
pub const HEADER_HEIGHT: u16 = 4;

pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub guidelines: &'a str,
    /// Fraction of the deck reached, `(index + 1) / N`
    pub progress: f64,
    pub theme: &'a Theme,
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, subtitle_area, guidelines_area, gauge_area] =
            Layout::vertical([Constraint::Length(1); 4]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(self.title, self.theme.title)).alignment(Alignment::Center),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(self.subtitle, self.theme.subtitle))
                .alignment(Alignment::Center),
            subtitle_area,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(self.guidelines, self.theme.guidelines))
                .alignment(Alignment::Center),
            guidelines_area,
        );

        let ratio = self.progress.clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(self.theme.gauge)
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0));
        frame.render_widget(gauge, gauge_area);
    }
}
