//! Toast acknowledgments.
//!
//! [`ToastQueue`] is the plain data behind the toast stack: an ordered,
//! bounded list of messages with stable ids. [`Toaster`] is the
//! copyable handle that components obtain from context (see
//! [`ToastHost`](crate::ToastHost)) to push messages. Dismissal timers
//! live in the rendered toast items, not here.

use std::collections::VecDeque;
use std::fmt;

use blueprint_intake::Notifier;
use dioxus::prelude::*;

/// Most toasts visible at once. Older ones are dropped first.
pub const DEFAULT_CAPACITY: usize = 3;

/// Identifier of a queued toast. Never reused within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One success message in the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Queue-unique id.
    pub id: ToastId,
    /// Message text.
    pub message: String,
}

/// Bounded FIFO of visible toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ToastQueue {
    /// Create an empty queue holding at most `capacity` toasts
    /// (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a toast, evicting the oldest when full.
    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
        });
        while self.toasts.len() > self.capacity {
            self.toasts.pop_front();
        }
        id
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of visible toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Context handle for pushing toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    /// Wrap an existing queue signal.
    #[must_use]
    pub const fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    /// Remove a toast early (e.g. the user clicked it).
    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    /// Snapshot of the visible toasts, oldest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.read().iter().cloned().collect()
    }
}

impl Notifier for Toaster {
    fn success(&mut self, message: &str) {
        self.queue.write().push(message);
    }
}

/// Fetch the [`Toaster`] provided by an enclosing
/// [`ToastHost`](crate::ToastHost).
#[must_use]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
