//! Board change notifications.
//!
//! A [`BoardSession`](crate::board_app::BoardSession) publishes one
//! [`BoardEvent`] per mutation on a `tokio::sync::broadcast` channel, so any
//! number of views can observe the single authoritative state without
//! holding a reference to it.

use crate::shared::{ColumnId, NoteId};
use serde::Serialize;
use tokio::sync::broadcast;

/// Capacity of the per-session event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    DragStarted {
        note_id: NoteId,
    },
    /// Drag finished without a valid drop target
    DragEnded {
        note_id: NoteId,
    },
    /// Working state moved, confirmation pending
    NoteMoved {
        note_id: NoteId,
        from: ColumnId,
        to: ColumnId,
    },
    MoveConfirmed {
        note_id: NoteId,
        column: ColumnId,
        /// Server column differs from the working column
        diverged: bool,
    },
    MoveFailed {
        note_id: NoteId,
        reason: String,
    },
    NoteAdded {
        note_id: NoteId,
    },
    /// The board was reseeded from a fresh snapshot
    Reset,
}

pub type BoardEventBroadcast = broadcast::Sender<BoardEvent>;

/// Create the sender half of a session's event channel
pub fn channel() -> BoardEventBroadcast {
    let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
    tx
}

/// Publish an event to all subscribers.
///
/// Returns the number of subscribers that received it (0 if none).
pub fn publish(tx: &BoardEventBroadcast, event: BoardEvent) -> usize {
    match tx.send(event) {
        Ok(subscriber_count) => subscriber_count,
        Err(e) => {
            tracing::trace!("[EVENTS] No subscribers for {:?}", e.0);
            0
        }
    }
}
