//! # Theme
//!
//! Every style the screen uses, in one value. The screen builds a `Theme`
//! once at startup and hands components a reference; nothing is registered
//! globally and nothing needs tearing down.
//!
//! Palette follows the teal-to-green gradient of the printed pearls cards.

use ratatui::style::{Color, Modifier, Style};

const TEAL_DARK: Color = Color::Rgb(0x13, 0x4E, 0x5E);
const TEAL: Color = Color::Rgb(0x0F, 0x76, 0x6E);
const GREEN: Color = Color::Rgb(0x71, 0xB2, 0x80);
const GREEN_DARK: Color = Color::Rgb(0x15, 0x80, 0x3D);

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    pub guidelines: Style,
    pub gauge: Style,
    pub card_border: Style,
    pub question_badge: Style,
    pub answer_badge: Style,
    pub question_text: Style,
    pub answer_text: Style,
    /// Card while a navigation transition is running
    pub transition: Style,
    pub hint: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub counter: Style,
    pub footnote: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::Gray),
            guidelines: Style::default().fg(Color::DarkGray),
            gauge: Style::default().fg(GREEN).bg(TEAL_DARK),
            card_border: Style::default().fg(GREEN),
            question_badge: Style::default()
                .fg(TEAL)
                .add_modifier(Modifier::BOLD),
            answer_badge: Style::default()
                .fg(GREEN_DARK)
                .add_modifier(Modifier::BOLD),
            question_text: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            answer_text: Style::default().fg(Color::White),
            transition: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            hint: Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            button: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            counter: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            footnote: Style::default().fg(Color::DarkGray),
        }
    }
}
