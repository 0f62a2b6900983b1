//! Deferred page work.
//!
//! Delayed actions are plain data handed to the host's timer. When the timer
//! fires, the host passes the task back to
//! [`crate::QuotePage::run_deferred`]. Tasks must tolerate their target having
//! left the page in the meantime.

use std::time::Duration;

use crate::page::CardKey;

/// Work to run after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Revert a card's add control from the confirmation state.
    RestoreAddControl(CardKey),
}

/// Host timer port.
pub trait Scheduler {
    /// Run `task` once, after `delay`. Fire-and-forget.
    fn schedule(&mut self, delay: Duration, task: DeferredTask);
}

/// Scheduler that only records tasks; the owner decides when they run.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: Vec<(Duration, DeferredTask)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks waiting to run, with their delays.
    #[must_use]
    pub fn pending(&self) -> &[(Duration, DeferredTask)] {
        &self.pending
    }

    /// Take every pending task, oldest first.
    pub fn drain(&mut self) -> Vec<DeferredTask> {
        self.pending.drain(..).map(|(_, task)| task).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        self.pending.push((delay, task));
    }
}
