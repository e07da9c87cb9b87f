//! Lifetime scope for deferred work.
//!
//! A [`Scope`] belongs to one widget instance. Work scheduled against it is
//! only ever handed back while the scope is alive: disposing the scope (or
//! dropping it together with its widget) cancels every pending task and runs
//! the registered cleanup callbacks.
//!
//! # Overview
//!
//! - Tasks carry a plain action value and a due `Instant`
//! - `take_due` hands back due actions in deadline order; the owner decides
//!   what they mean at fire time
//! - `on_cleanup` registers teardown logic, run in reverse order (LIFO)
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use flippable::reactive::Scope;
//!
//! let start = Instant::now();
//! let mut scope = Scope::new();
//! scope.schedule(start + Duration::from_millis(10), "ping");
//!
//! assert!(scope.take_due(start).is_empty());
//! assert_eq!(scope.take_due(start + Duration::from_millis(10)), vec!["ping"]);
//! ```

use std::time::Instant;

/// Identifier of a scheduled task, unique within its scope.
pub type TaskId = usize;

struct Deferred<A> {
    id: TaskId,
    due: Instant,
    action: A,
}

pub struct Scope<A> {
    tasks: Vec<Deferred<A>>,
    cleanups: Vec<Box<dyn FnOnce()>>,
    next_id: TaskId,
    disposed: bool,
}

impl<A> Scope<A> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            cleanups: Vec::new(),
            next_id: 0,
            disposed: false,
        }
    }

    /// Schedule `action` to become due at `due`.
    ///
    /// Returns `None` when the scope is already disposed.
    pub fn schedule(&mut self, due: Instant, action: A) -> Option<TaskId> {
        if self.disposed {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Deferred { id, due, action });
        Some(id)
    }

    /// Cancel a pending task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Remove and return every action due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<A> {
        if self.disposed {
            return Vec::new();
        }
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due <= now);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due, task.id));
        due.into_iter().map(|task| task.action).collect()
    }

    /// Deadline of the earliest pending task.
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Register a callback to run when the scope is disposed.
    ///
    /// Callbacks registered after disposal run immediately.
    pub fn on_cleanup(&mut self, f: impl FnOnce() + 'static) {
        if self.disposed {
            f();
            return;
        }
        self.cleanups.push(Box::new(f));
    }

    /// Cancel all pending tasks and run cleanup callbacks in reverse order.
    ///
    /// Disposing twice is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.tasks.clear();
        for cleanup in std::mem::take(&mut self.cleanups).into_iter().rev() {
            cleanup();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<A> Default for Scope<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Drop for Scope<A> {
    fn drop(&mut self) {
        self.dispose();
    }
}
