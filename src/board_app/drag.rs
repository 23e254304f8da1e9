//! # Drag Reconciliation
//!
//! One drag gesture moves through three phases:
//!
//! ```text
//! Idle --drag_start--> Dragging --drag_end(None)--> Idle
//!                          |
//!                          +--drag_end(Some(col))--> Reconciling --response--> Idle
//! ```
//!
//! The optimistic working-state move is applied when entering
//! `Reconciling`, before the [`PendingMove`] ticket exists, so the request
//! can never be issued ahead of the move. Only one gesture holds the slot at
//! a time: a new drag-start while `Dragging` or `Reconciling` is rejected.
//!
//! Each ticket carries the session epoch and a sequence number; a response
//! whose ticket no longer matches the session is dropped as stale.

use crate::shared::{ColumnId, Note, NoteId};

/// A column move waiting for the server's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    pub note_id: NoteId,
    /// Title at drag start, for the activity entry
    pub title: String,
    pub from: ColumnId,
    pub target: ColumnId,
    pub(crate) epoch: u64,
    pub(crate) seq: u64,
}

impl PendingMove {
    /// Whether `other` refers to the same request
    pub fn same_ticket(&self, other: &PendingMove) -> bool {
        self.epoch == other.epoch && self.seq == other.seq
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        note: Note,
    },
    Reconciling {
        pending: PendingMove,
    },
}

impl DragPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragPhase::Idle)
    }

    /// Note holding the drag slot, if any
    pub fn holder(&self) -> Option<&NoteId> {
        match self {
            DragPhase::Idle => None,
            DragPhase::Dragging { note } => Some(&note.id),
            DragPhase::Reconciling { pending } => Some(&pending.note_id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DragPhase::Idle => "idle",
            DragPhase::Dragging { .. } => "dragging",
            DragPhase::Reconciling { .. } => "reconciling",
        }
    }
}

/// How a server response was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveCompletion {
    /// Confirmed view updated; `diverged` when the server chose a different
    /// column than the working view shows
    Confirmed { column: ColumnId, diverged: bool },
    /// Request failed; working view keeps the optimistic column
    Failed(crate::shared::BoardError),
    /// Response belonged to a superseded ticket and was ignored
    Stale,
}
