//! # Deck
//!
//! The immutable card collection shown in one session.
//!
//! A `Deck` always holds at least one card. The emptiness check happens once,
//! at construction, so navigation code can index freely without guarding
//! against `N = 0`.

use std::fmt;

/// One Question/Answer pair. No identity beyond its position in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least one card.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "deck must contain at least one card"),
        }
    }
}

impl std::error::Error for DeckError {}

/// Ordered, fixed-length card sequence plus the text shown in the header.
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    subtitle: String,
    /// Short attribution line under the subtitle
    guidelines: String,
    /// Longer citation shown at the bottom of the screen
    source_note: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck, rejecting an empty card list.
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self {
            title: title.into(),
            subtitle: String::new(),
            guidelines: String::new(),
            source_note: String::new(),
            cards,
        })
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_guidelines(mut self, guidelines: impl Into<String>) -> Self {
        self.guidelines = guidelines.into();
        self
    }

    pub fn with_source_note(mut self, note: impl Into<String>) -> Self {
        self.source_note = note.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn guidelines(&self) -> &str {
        &self.guidelines
    }

    pub fn source_note(&self) -> &str {
        &self.source_note
    }

    /// Number of cards. Never zero.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present so clippy's `len_without_is_empty` stays quiet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the last card.
    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
