//! Moderation-modal context shared by the thread page controls.
//!
//! The context is an explicit [`ModerationHandle`] passed to whatever
//! renders the page, never an ambient global. A handle wraps a
//! [`tokio::sync::watch`] channel: every sibling control reads the same
//! [`ModalState`] and observers can subscribe to be woken on each change.
//! The web layer keeps one handle per client in [`ModerationSessions`].
//!
//! # Transitions
//!
//! | From | Call | To |
//! |------|------|----|
//! | any | `open(thread)` | `Options { thread }` |
//! | any | `close()` | `Closed` |
//! | open | `delete()` | `Delete { thread }` |
//! | open | `move_thread()` | `Move { thread }` |
//! | `Closed` | `delete()` / `move_thread()` | error, unchanged |

use std::collections::HashMap;
use std::sync::Arc;

use forum_types::ThreadId;
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info};

use crate::view::View;

/// Visibility and mode of the moderation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modal", rename_all = "snake_case")]
pub enum ModalState {
    /// No dialog shown.
    #[default]
    Closed,
    /// Moderation options for a thread.
    Options {
        /// Thread being moderated.
        thread: ThreadId,
    },
    /// Delete confirmation for a thread.
    Delete {
        /// Thread being moderated.
        thread: ThreadId,
    },
    /// Move form for a thread.
    Move {
        /// Thread being moderated.
        thread: ThreadId,
    },
}

impl ModalState {
    /// Thread the dialog is open for.
    pub const fn thread(self) -> Option<ThreadId> {
        match self {
            Self::Closed => None,
            Self::Options { thread } | Self::Delete { thread } | Self::Move { thread } => {
                Some(thread)
            }
        }
    }

    /// Whether any dialog is shown.
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Errors from moderation-modal transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModerationError {
    /// Delete or move was requested with no thread selected.
    #[error("moderation modal is not open")]
    NotOpen,
}

/// Shared handle to the moderation-modal context.
#[derive(Debug, Clone)]
pub struct ModerationHandle {
    tx: Arc<watch::Sender<ModalState>>,
}

impl ModerationHandle {
    /// Create a context with the dialog closed.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ModalState::Closed);
        Self { tx: Arc::new(tx) }
    }

    /// Current state.
    pub fn state(&self) -> ModalState {
        *self.tx.borrow()
    }

    /// Receive every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<ModalState> {
        self.tx.subscribe()
    }

    /// Show moderation options for `thread`.
    pub fn open(&self, thread: ThreadId) -> ModalState {
        self.set("open", ModalState::Options { thread })
    }

    /// Hide the dialog. Closing a closed dialog is a no-op.
    pub fn close(&self) -> ModalState {
        self.set("close", ModalState::Closed)
    }

    /// Switch the open dialog to the delete confirmation.
    pub fn delete(&self) -> Result<ModalState, ModerationError> {
        self.transition("delete", |state| {
            state
                .thread()
                .map(|thread| ModalState::Delete { thread })
                .ok_or(ModerationError::NotOpen)
        })
    }

    /// Switch the open dialog to the move form.
    pub fn move_thread(&self) -> Result<ModalState, ModerationError> {
        self.transition("move", |state| {
            state
                .thread()
                .map(|thread| ModalState::Move { thread })
                .ok_or(ModerationError::NotOpen)
        })
    }

    /// Move to `next` unconditionally.
    fn set(&self, action: &'static str, next: ModalState) -> ModalState {
        self.tx.send_if_modified(|state| apply(action, state, next));
        next
    }

    /// Apply `step` atomically against the current state.
    fn transition<F>(&self, action: &'static str, step: F) -> Result<ModalState, ModerationError>
    where
        F: FnOnce(ModalState) -> Result<ModalState, ModerationError>,
    {
        let mut outcome = Err(ModerationError::NotOpen);
        self.tx.send_if_modified(|state| {
            outcome = step(*state);
            match outcome {
                Ok(next) => apply(action, state, next),
                Err(_) => false,
            }
        });
        outcome
    }
}

/// Store `next`, reporting whether subscribers need to be woken.
fn apply(action: &'static str, state: &mut ModalState, next: ModalState) -> bool {
    if *state == next {
        return false;
    }
    let previous = std::mem::replace(state, next);
    info!(action, ?previous, ?next, "moderation modal changed");
    true
}

/// Moderation contexts keyed by client.
///
/// Each client that drives the modal gets its own [`ModerationHandle`], so
/// one visitor opening the dialog never shows it on another visitor's page.
/// Clients that never touched the modal render against a closed context.
#[derive(Debug, Default)]
pub struct ModerationSessions {
    handles: RwLock<HashMap<String, ModerationHandle>>,
}

impl ModerationSessions {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The context for `client`, if it has one.
    pub async fn get(&self, client: &str) -> Option<ModerationHandle> {
        self.handles.read().await.get(client).cloned()
    }

    /// The context for `client`, created closed on first use.
    pub async fn get_or_create(&self, client: &str) -> ModerationHandle {
        if let Some(handle) = self.get(client).await {
            return handle;
        }
        let mut handles = self.handles.write().await;
        handles
            .entry(client.to_owned())
            .or_insert_with(|| {
                debug!(client, "moderation context created");
                ModerationHandle::new()
            })
            .clone()
    }

    /// The context pages for `client` render with. Unknown or anonymous
    /// clients get a fresh closed context that is not retained.
    pub async fn for_render(&self, client: Option<&str>) -> ModerationHandle {
        match client {
            Some(client) => self.get(client).await.unwrap_or_default(),
            None => ModerationHandle::new(),
        }
    }

    /// Number of clients with a context.
    pub async fn len(&self) -> usize {
        self.handles.read().await.len()
    }

    /// Whether no client has a context yet.
    pub async fn is_empty(&self) -> bool {
        self.handles.read().await.is_empty()
    }
}

impl Default for ModerationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// The four controls mounted under the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationControl {
    /// Dismisses whichever dialog is shown.
    Close,
    /// Moderation options.
    Open,
    /// Delete confirmation.
    Delete,
    /// Move form.
    Move,
}

impl ModerationControl {
    /// Every control, in mount order.
    pub const ALL: [Self; 4] = [Self::Close, Self::Open, Self::Delete, Self::Move];

    /// Render this control against `state`. Inactive controls are still
    /// mounted but have no content.
    pub fn render(self, state: ModalState) -> View {
        View::Control {
            control: self,
            children: self.content(state),
        }
    }

    fn content(self, state: ModalState) -> Vec<View> {
        match (self, state) {
            (Self::Close, state) if state.is_open() => vec![View::text("Close")],
            (Self::Open, ModalState::Options { thread }) => vec![
                View::text(format!("Moderate thread {thread}")),
                View::text("Move thread"),
                View::text("Delete thread"),
            ],
            (Self::Delete, ModalState::Delete { thread }) => vec![View::text(format!(
                "Delete thread {thread}? This cannot be undone."
            ))],
            (Self::Move, ModalState::Move { thread }) => {
                vec![View::text(format!("Move thread {thread} to another category"))]
            }
            _ => Vec::new(),
        }
    }
}

/// Mount the provider: the four controls, then the routed `content`.
pub fn provider(handle: &ModerationHandle, content: View) -> View {
    let state = handle.state();
    let mut children: Vec<View> = ModerationControl::ALL
        .iter()
        .map(|control| control.render(state))
        .collect();
    children.push(content);
    View::Provider { children }
}
