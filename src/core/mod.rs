//! # Core Application Logic
//!
//! Flashcard navigation logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (card data)     │
//!                    │  • Navigator (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Driver + Scheduler   │
//!                    └───────────┬─────────────┘
//!                                │  Presenter
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: `Card` and `Deck`, the immutable card data
//! - [`pearls`]: the built-in hepatic pearls deck
//! - [`state`]: the `Navigator`, all navigation state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`scheduler`]: deferred continuations on the tokio runtime
//! - [`driver`]: runs effects and emits the render signal
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod deck;
pub mod driver;
pub mod pearls;
pub mod scheduler;
pub mod state;
