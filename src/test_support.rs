//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::deck::{Card, Deck};
use crate::core::driver::Presenter;
use crate::core::state::CardView;

/// Builds a deck of `n` cards named `Q1`/`A1` .. `Qn`/`An`.
pub fn deck_of(n: usize) -> Deck {
    let cards = (1..=n)
        .map(|i| Card::new(format!("Q{i}"), format!("A{i}")))
        .collect();
    Deck::new("Test deck", cards).expect("test decks are never empty")
}

/// One recorded render signal, detached from the deck's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub front: String,
    pub flipped: bool,
    pub locked: bool,
    pub progress: f64,
}

/// A presenter that remembers every frame it was handed.
#[derive(Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Frame>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, view: CardView<'_>) {
        self.frames.push(Frame {
            index: view.position - 1,
            front: view.card.front.clone(),
            flipped: view.flipped,
            locked: view.locked,
            progress: view.progress,
        });
    }
}
