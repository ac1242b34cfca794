//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! Transition delay runs out? That's `Action::TransitionElapsed(ticket)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing what the driver must do next.
//! No timers and no I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{Direction, Navigator, Phase, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Flip,
    Next,
    Previous,
    Reset,
    Quit,
    /// First deferred step of a navigation.
    TransitionElapsed(Ticket),
    /// Second deferred step of a navigation.
    SettleElapsed(Ticket),
}

/// Which delay a deferred continuation waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transition,
    Settle,
}

/// A continuation the scheduler must deliver later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub ticket: Ticket,
    pub stage: Stage,
}

impl Deferred {
    /// The action delivered once the stage's delay has elapsed.
    pub fn action(&self) -> Action {
        match self.stage {
            Stage::Transition => Action::TransitionElapsed(self.ticket),
            Stage::Settle => Action::SettleElapsed(self.ticket),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; redraw.
    Render,
    /// State changed; redraw and schedule the continuation.
    Schedule(Deferred),
    /// State changed and the in-flight continuation must be dropped.
    CancelPending,
    Quit,
}

/// Applies `action` to `nav`. Every operation is total: requests that make no
/// sense in the current state come back as `Effect::None`.
pub fn update(nav: &mut Navigator, action: Action) -> Effect {
    match action {
        Action::Flip => {
            nav.flipped = !nav.flipped;
            Effect::Render
        }
        Action::Next => begin_navigation(nav, Direction::Forward),
        Action::Previous => begin_navigation(nav, Direction::Backward),
        Action::Reset => {
            let was_locked = nav.is_locked();
            nav.index = 0;
            nav.flipped = false;
            if was_locked {
                debug!("Reset during transition {:?}, cancelling it", nav.phase);
                nav.phase = Phase::Idle;
                Effect::CancelPending
            } else {
                Effect::Render
            }
        }
        Action::Quit => Effect::Quit,
        Action::TransitionElapsed(ticket) => match nav.phase {
            Phase::Leaving {
                ticket: current,
                direction,
            } if current == ticket => {
                // Face goes back to the question before the new card appears.
                nav.flipped = false;
                nav.index = match direction {
                    Direction::Forward => nav.index + 1,
                    Direction::Backward => nav.index - 1,
                };
                nav.phase = Phase::Settling { ticket };
                Effect::Schedule(Deferred {
                    ticket,
                    stage: Stage::Settle,
                })
            }
            _ => {
                debug!("Ignoring stale TransitionElapsed({:?})", ticket);
                Effect::None
            }
        },
        Action::SettleElapsed(ticket) => match nav.phase {
            Phase::Settling { ticket: current } if current == ticket => {
                nav.phase = Phase::Idle;
                Effect::Render
            }
            _ => {
                debug!("Ignoring stale SettleElapsed({:?})", ticket);
                Effect::None
            }
        },
    }
}

fn begin_navigation(nav: &mut Navigator, direction: Direction) -> Effect {
    let allowed = match direction {
        Direction::Forward => nav.can_advance(),
        Direction::Backward => nav.can_retreat(),
    };
    if !allowed {
        debug!(
            "{:?} ignored (index={}, locked={})",
            direction,
            nav.index,
            nav.is_locked()
        );
        return Effect::None;
    }

    let ticket = nav.issue_ticket();
    nav.phase = Phase::Leaving { ticket, direction };
    Effect::Schedule(Deferred {
        ticket,
        stage: Stage::Transition,
    })
}
