//! # Navigation State
//!
//! Core state for the flashcard viewer. Domain logic only, no TUI types.
//!
//! ```text
//! Navigator
//! ├── deck: Deck              // immutable, N >= 1
//! ├── index: usize            // current card, always in [0, N-1]
//! ├── flipped: bool           // answer face showing
//! ├── phase: Phase            // Idle | Leaving | Settling
//! └── next_ticket: u64        // id source for in-flight transitions
//! ```
//!
//! A navigation is two deferred steps, each an explicit phase:
//!
//! ```text
//!          Next/Previous                TransitionElapsed           SettleElapsed
//!   Idle ─────────────────▶ Leaving ──────────────────▶ Settling ──────────────▶ Idle
//!  (unlocked)              (locked)   flipped = false   (locked)                (unlocked)
//!                                     index ± 1
//! ```
//!
//! `locked` is never stored. It is `phase != Idle`, so the two cannot drift.
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::deck::{Card, Deck};

/// Identifies one in-flight navigation. Continuations carrying any other
/// ticket are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Waiting out the transition delay. Content still shows the old card.
    Leaving { ticket: Ticket, direction: Direction },
    /// Index has moved. Waiting out the settle delay before unlocking.
    Settling { ticket: Ticket },
}

/// Read model of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub index: usize,
    pub flipped: bool,
    pub locked: bool,
}

/// Render signal handed to the presentation layer after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView<'a> {
    pub card: &'a Card,
    pub flipped: bool,
    pub locked: bool,
    /// 1-based position of the card
    pub position: usize,
    pub total: usize,
    /// `(index + 1) / N`, in (0.0, 1.0]
    pub progress: f64,
}

pub struct Navigator {
    deck: Deck,
    pub(crate) index: usize,
    pub(crate) flipped: bool,
    pub(crate) phase: Phase,
    next_ticket: u64,
}

impl Navigator {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            index: 0,
            flipped: false,
            phase: Phase::Idle,
            next_ticket: 0,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            index: self.index,
            flipped: self.flipped,
            locked: self.is_locked(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn current_card(&self) -> &Card {
        // index is kept in [0, N-1] and the deck is never empty
        &self.deck.cards()[self.index]
    }

    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.deck.len() as f64
    }

    /// True when Next would do something right now.
    pub fn can_advance(&self) -> bool {
        !self.is_locked() && self.index < self.deck.last_index()
    }

    /// True when Previous would do something right now.
    pub fn can_retreat(&self) -> bool {
        !self.is_locked() && self.index > 0
    }

    /// Previous/next control availability, independent of the lock.
    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    pub fn at_last(&self) -> bool {
        self.index == self.deck.last_index()
    }

    pub fn snapshot(&self) -> CardView<'_> {
        CardView {
            card: self.current_card(),
            flipped: self.flipped,
            locked: self.is_locked(),
            position: self.index + 1,
            total: self.deck.len(),
            progress: self.progress(),
        }
    }

    pub(crate) fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }
}
