//! The drop-zone intake state machine.
//!
//! [`IntakeState`] is the whole state of the widget: the current
//! [`DragState`] and at most one accepted file. [`IntakeState::step`] is a
//! pure, total transition function over [`IntakeEvent`]; every event is
//! handled and none of them can fail.
//!
//! [`FileIntake`] wraps the state together with the two collaborators the
//! widget talks to on accept: the embedder's [`AcceptListener`] and a
//! [`Notifier`] that shows a user-visible acknowledgment.
//!
//! # Transitions
//!
//! | Event | Drag after | File after | Accepts |
//! |---|---|---|---|
//! | `DragEnter` / `DragOver` | Hovering | unchanged | no |
//! | `DragLeave` | Idle | unchanged | no |
//! | `Drop([f0, ..])` | Idle | `f0` | yes |
//! | `Drop([])` | Idle | unchanged | no |
//! | `PickerChange([f0, ..])` | unchanged | `f0` | yes |
//! | `PickerChange([])` | unchanged | unchanged | no |
//! | `Clear` | unchanged | `None` | no |

use std::mem;

use crate::types::DragState;

/// An input event delivered to the intake.
///
/// `Drop` and `PickerChange` carry the platform's ordered file payload.
/// Only the first file is ever taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeEvent<F> {
    /// A drag entered the widget.
    DragEnter,
    /// A drag moved over the widget.
    DragOver,
    /// A drag left the widget.
    DragLeave,
    /// Files were dropped onto the widget.
    Drop(Vec<F>),
    /// The file picker reported a new selection.
    PickerChange(Vec<F>),
    /// The user asked to clear the accepted file.
    Clear,
}

/// Drag state plus the currently accepted file, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeState<F> {
    drag: DragState,
    file: Option<F>,
}

impl<F> Default for IntakeState<F> {
    fn default() -> Self {
        Self {
            drag: DragState::Idle,
            file: None,
        }
    }
}

/// Result of a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<F> {
    /// State after the event.
    pub state: IntakeState<F>,
    /// The newly accepted file, when the event was an accept.
    pub accepted: Option<F>,
}

impl<F> IntakeState<F> {
    /// Build a state directly. Mostly useful for restoring a snapshot.
    #[must_use]
    pub const fn new(drag: DragState, file: Option<F>) -> Self {
        Self { drag, file }
    }

    /// Current drag state.
    #[must_use]
    pub const fn drag(&self) -> DragState {
        self.drag
    }

    /// The accepted file, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Returns `true` while a drag hovers the widget.
    #[must_use]
    pub const fn is_hovering(&self) -> bool {
        self.drag.is_hovering()
    }

    const fn quiet(self) -> Step<F> {
        Step {
            state: self,
            accepted: None,
        }
    }
}

impl<F: Clone> IntakeState<F> {
    /// Pure transition from `(self, event)` to the next state.
    ///
    /// Returns the new state and, for a drop or picker selection with at
    /// least one file, a copy of the first file so the caller can report
    /// the accept.
    #[must_use]
    pub fn step(self, event: IntakeEvent<F>) -> Step<F> {
        let Self { drag, file } = self;
        match event {
            IntakeEvent::DragEnter | IntakeEvent::DragOver => Self {
                drag: DragState::Hovering,
                file,
            }
            .quiet(),
            IntakeEvent::DragLeave => Self {
                drag: DragState::Idle,
                file,
            }
            .quiet(),
            IntakeEvent::Drop(files) => accept_first(DragState::Idle, file, files),
            IntakeEvent::PickerChange(files) => accept_first(drag, file, files),
            IntakeEvent::Clear => Self { drag, file: None }.quiet(),
        }
    }

    /// In-place form of [`step`](Self::step).
    ///
    /// Returns the newly accepted file, if any.
    pub fn apply(&mut self, event: IntakeEvent<F>) -> Option<F> {
        let Step { state, accepted } = mem::take(self).step(event);
        *self = state;
        accepted
    }
}

/// Replace `current` with the first file of `payload`; an empty payload
/// keeps `current`.
fn accept_first<F: Clone>(drag: DragState, current: Option<F>, payload: Vec<F>) -> Step<F> {
    match payload.into_iter().next() {
        Some(first) => Step {
            accepted: Some(first.clone()),
            state: IntakeState {
                drag,
                file: Some(first),
            },
        },
        None => IntakeState {
            drag,
            file: current,
        }
        .quiet(),
    }
}

/// Receives every accepted file. Supplied by the embedder.
pub trait AcceptListener<F> {
    /// Called exactly once per accept, after the state is updated.
    fn on_accept(&mut self, file: &F);
}

impl<F, T: FnMut(&F)> AcceptListener<F> for T {
    fn on_accept(&mut self, file: &F) {
        self(file);
    }
}

/// An absent listener ignores accepts.
impl<F, L: AcceptListener<F>> AcceptListener<F> for Option<L> {
    fn on_accept(&mut self, file: &F) {
        if let Some(listener) = self {
            listener.on_accept(file);
        }
    }
}

/// User-visible acknowledgment channel (e.g. a toast).
pub trait Notifier {
    /// Show a success message.
    fn success(&mut self, message: &str);
}

/// Discards every message.
impl Notifier for () {
    fn success(&mut self, _message: &str) {}
}

/// The intake widget: state plus the collaborators notified on accept.
pub struct FileIntake<F, L, N> {
    state: IntakeState<F>,
    listener: L,
    notifier: N,
    success_message: String,
}

impl<F, L, N> FileIntake<F, L, N>
where
    F: Clone,
    L: AcceptListener<F>,
    N: Notifier,
{
    /// Create an idle intake with no file.
    pub fn new(listener: L, notifier: N, success_message: impl Into<String>) -> Self {
        Self::with_state(IntakeState::default(), listener, notifier, success_message)
    }

    /// Create an intake starting from `state`.
    pub fn with_state(
        state: IntakeState<F>,
        listener: L,
        notifier: N,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            state,
            listener,
            notifier,
            success_message: success_message.into(),
        }
    }

    /// Apply `event`; on accept, call the listener then the notifier once
    /// each.
    ///
    /// Returns the newly accepted file, if the event was an accept.
    pub fn handle(&mut self, event: IntakeEvent<F>) -> Option<&F> {
        let accepted = self.state.apply(event)?;
        self.listener.on_accept(&accepted);
        self.notifier.success(&self.success_message);
        self.state.file()
    }

    /// Current state.
    pub const fn state(&self) -> &IntakeState<F> {
        &self.state
    }

    /// Current drag state.
    pub const fn drag(&self) -> DragState {
        self.state.drag()
    }

    /// The accepted file, if any.
    pub const fn file(&self) -> Option<&F> {
        self.state.file()
    }

    /// Returns `true` while a drag hovers the widget.
    pub const fn is_hovering(&self) -> bool {
        self.state.is_hovering()
    }

    /// Message passed to the notifier on every accept.
    pub fn success_message(&self) -> &str {
        &self.success_message
    }
}
