//! # Driver
//!
//! Glue between the pure reducer and the outside world. Owns the
//! `Navigator`, runs each `Effect` through the `Scheduler`, and hands the
//! presentation layer a `CardView` after every state change.
//!
//! ```text
//!  input ──▶ dispatch(action) ──▶ update() ──▶ Effect
//!                 ▲                              │
//!                 │                 ┌────────────┼─────────────┐
//!                 │                 ▼            ▼             ▼
//!                 │            Scheduler     Presenter       Quit
//!                 │                 │
//!                 └── channel ◀─────┘  (TransitionElapsed / SettleElapsed)
//! ```

use log::{debug, info};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::core::action::{Action, Effect, update};
use crate::core::deck::Deck;
use crate::core::scheduler::{Scheduler, Timing};
use crate::core::state::{CardView, Navigator};

/// Receives the render signal.
pub trait Presenter {
    fn present(&mut self, view: CardView<'_>);
}

pub struct Driver<P: Presenter> {
    navigator: Navigator,
    scheduler: Scheduler,
    presenter: P,
}

impl<P: Presenter> Driver<P> {
    /// Creates the driver plus the receiving end on which deferred
    /// continuations arrive. The caller feeds them back into `dispatch`.
    pub fn new(deck: Deck, timing: Timing, presenter: P) -> (Self, UnboundedReceiver<Action>) {
        let (tx, rx) = unbounded_channel();
        info!(
            "Driver started: {} cards, transition={}ms, settle={}ms",
            deck.len(),
            timing.transition.as_millis(),
            timing.settle.as_millis()
        );
        let mut driver = Self {
            navigator: Navigator::new(deck),
            scheduler: Scheduler::new(timing, tx),
            presenter,
        };
        driver.present();
        (driver, rx)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Applies one action. Returns `false` once the viewer should quit.
    ///
    /// Scheduling spawns on the current tokio runtime, so this must run
    /// inside one.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!("Dispatch: {:?}", action);
        match update(&mut self.navigator, action) {
            Effect::None => {}
            Effect::Render => self.present(),
            Effect::Schedule(deferred) => {
                self.scheduler.schedule(deferred);
                self.present();
            }
            Effect::CancelPending => {
                self.scheduler.cancel();
                self.present();
            }
            Effect::Quit => {
                self.scheduler.cancel();
                return false;
            }
        }
        true
    }

    fn present(&mut self) {
        self.presenter.present(self.navigator.snapshot());
    }
}
