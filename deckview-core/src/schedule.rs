//! Deferred task scheduler.
//!
//! Tasks replace any pending task with the same key, so scheduling is also a
//! debounce. A task may be bound to a navigator generation; once the
//! navigator has moved on, the task is stale and is dropped instead of run.
//! Tasks only carry values captured when they were scheduled and never touch
//! the navigator themselves.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Work the presenter defers past the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Prepare the given slide ahead of time.
    Preload { slide: usize },
    /// Rebuild layout-dependent caches after the viewport settles.
    Relayout,
    /// Announce a slide through the live region.
    Announce { slide: usize },
    /// Drop the transient status message.
    ClearStatus,
}

/// Tasks with the same key supersede each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    Preload,
    Relayout,
    Announce,
    Status,
}

impl Deferred {
    pub fn key(&self) -> TaskKey {
        match self {
            Deferred::Preload { .. } => TaskKey::Preload,
            Deferred::Relayout => TaskKey::Relayout,
            Deferred::Announce { .. } => TaskKey::Announce,
            Deferred::ClearStatus => TaskKey::Status,
        }
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    task: Deferred,
    due: Instant,
    /// Generation the task belongs to, or `None` if it survives transitions.
    bound: Option<u64>,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
}

pub type SharedScheduler = Rc<RefCell<Scheduler>>;

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedScheduler {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Schedule `task` to run `delay` after `now`, cancelling any pending
    /// task with the same key.
    pub fn schedule(&mut self, task: Deferred, delay: Duration, bound: Option<u64>, now: Instant) {
        self.cancel(task.key());
        self.pending.push(Scheduled {
            task,
            due: now + delay,
            bound,
        });
    }

    /// Cancel the pending task with `key`. Returns true if one was pending.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.task.key() != key);
        self.pending.len() != before
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.iter().any(|s| s.task.key() == key)
    }

    pub fn pending(&self, key: TaskKey) -> Option<Deferred> {
        self.pending
            .iter()
            .find(|s| s.task.key() == key)
            .map(|s| s.task)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every task due at `now` that is still current for
    /// `generation`, in due order. Stale tasks are discarded.
    pub fn drain_due(&mut self, now: Instant, generation: u64) -> Vec<Deferred> {
        let (mut due, rest): (Vec<Scheduled>, Vec<Scheduled>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;

        due.sort_by_key(|s| s.due);
        due.into_iter()
            .filter(|s| {
                let current = s.bound.map_or(true, |g| g == generation);
                if !current {
                    tracing::trace!(task = ?s.task, generation, "dropping stale task");
                }
                current
            })
            .map(|s| s.task)
            .collect()
    }
}
