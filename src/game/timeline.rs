//! Logical clock and delayed transitions.
//!
//! The engine never sleeps. Transitions that a renderer wants to happen
//! later are queued here against a logical clock that the host advances.
//! Every task names the round it belongs to, so a task that outlives its
//! round is recognised as stale and dropped instead of firing.

use alloc::vec::Vec;
use core::time::Duration;

/// Delayed transition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskKind {
    /// Base cards become visible.
    RevealBases,
    /// The deal completes and flipping is allowed.
    FinishDeal,
    /// The result banner is shown.
    RevealResult,
    /// Auto-deal starts the next round.
    AutoAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) due: Duration,
    pub(crate) round: u64,
    pub(crate) kind: TaskKind,
    seq: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Timeline {
    now: Duration,
    tasks: Vec<Task>,
    next_seq: u64,
}

impl Timeline {
    pub(crate) const fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn schedule(&mut self, delay: Duration, round: u64, kind: TaskKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(Task {
            due: self.now.saturating_add(delay),
            round,
            kind,
            seq,
        });
    }

    pub(crate) fn is_pending(&self, round: u64, kind: TaskKind) -> bool {
        self.tasks
            .iter()
            .any(|task| task.round == round && task.kind == kind)
    }

    /// Drops every task of the given kind. Returns how many were dropped.
    pub(crate) fn cancel_kind(&mut self, kind: TaskKind) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.kind != kind);
        before - self.tasks.len()
    }

    /// Drops every task keyed to `round`. Returns how many were dropped.
    pub(crate) fn cancel_round(&mut self, round: u64) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.round != round);
        before - self.tasks.len()
    }

    /// Drops every task. Returns how many were dropped.
    pub(crate) fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    /// Moves the clock forward to `at`. Never moves it backwards.
    pub(crate) fn skip_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }

    pub(crate) fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|task| task.due).min()
    }

    /// Removes and returns the earliest task that is due, in scheduling order
    /// for ties.
    pub(crate) fn pop_due(&mut self) -> Option<Task> {
        let now = self.now;
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= now)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(index, _)| index)?;
        Some(self.tasks.remove(index))
    }
}
