//! # Transition Scheduler
//!
//! Delivers deferred continuations back to the event loop as `Action`s.
//!
//! Each scheduled continuation is one tokio task: sleep for the stage's delay,
//! then send the action on the channel. The task never touches navigation
//! state, so all mutation stays on the loop that owns the `Navigator`.
//!
//! At most one continuation is pending at a time. Scheduling replaces the
//! previous one, `cancel()` aborts it, and dropping the scheduler aborts it,
//! so a torn-down view cannot be mutated by a late timer.

use std::time::Duration;

use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::core::action::{Action, Deferred, Stage};

pub const DEFAULT_TRANSITION_MS: u64 = 150;
pub const DEFAULT_SETTLE_MS: u64 = 50;

/// Delays for the two navigation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Fade-out before the index changes.
    pub transition: Duration,
    /// Pause after the index changes before navigation unlocks.
    pub settle: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
        }
    }
}

impl Timing {
    pub fn delay_for(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Transition => self.transition,
            Stage::Settle => self.settle,
        }
    }
}

pub struct Scheduler {
    timing: Timing,
    tx: UnboundedSender<Action>,
    pending: Option<AbortHandle>,
}

impl Scheduler {
    pub fn new(timing: Timing, tx: UnboundedSender<Action>) -> Self {
        Self {
            timing,
            tx,
            pending: None,
        }
    }

    /// Spawns the continuation on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn schedule(&mut self, deferred: Deferred) {
        self.cancel();

        let delay = self.timing.delay_for(deferred.stage);
        let action = deferred.action();
        let tx = self.tx.clone();
        debug!("Scheduling {:?} in {}ms", action, delay.as_millis());

        // Deadline is fixed now, not when the task first gets polled.
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if tx.send(action).is_err() {
                warn!("Failed to deliver {:?}: receiver dropped", action);
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    /// Aborts the pending continuation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending continuation");
            }
            handle.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
