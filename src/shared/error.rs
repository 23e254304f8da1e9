//! Shared Error Types
//!
//! This module defines the error taxonomy of the board client. Each variant
//! maps to one recovery policy:
//!
//! - `Load` - the initial board fetch failed; fatal to the board view
//! - `UnknownNote` - a drag referenced a note that is not on the board; logged only
//! - `MoveConfirmation` - the column update request failed; optimistic state is kept, logged only
//! - `DragInProgress` - a drag started while another one was still open or in flight
//! - `Validation` - a note draft was rejected before it reached the board
//!
//! # Usage
//!
//! ```rust
//! use noteboard::shared::error::BoardError;
//!
//! let error = BoardError::validation("title", "Title cannot be empty");
//! assert!(error.is_recoverable());
//! ```
use crate::shared::ids::NoteId;
use thiserror::Error;

/// Errors raised by the board client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Initial board fetch failed or returned a malformed payload
    #[error("Failed to load board: {reason}")]
    Load {
        /// Human-readable failure reason
        reason: String,
        /// HTTP status, when the server answered at all
        status: Option<u16>,
    },

    /// A drag referenced a note that is not in the working state
    #[error("No note with id {note_id}")]
    UnknownNote {
        /// The id the drag library reported
        note_id: NoteId,
    },

    /// The column update for a moved note was not confirmed by the server
    #[error("Failed to move note {note_id}: {reason}")]
    MoveConfirmation {
        /// The note whose move was not confirmed
        note_id: NoteId,
        /// Human-readable failure reason
        reason: String,
        /// HTTP status, when the server answered at all
        status: Option<u16>,
    },

    /// A drag was started while another one is still open or reconciling
    #[error("Note {active} is still being moved")]
    DragInProgress {
        /// The note that currently holds the drag slot
        active: NoteId,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl BoardError {
    /// Create a new load error
    pub fn load(reason: impl Into<String>, status: Option<u16>) -> Self {
        Self::Load {
            reason: reason.into(),
            status,
        }
    }

    /// Create a new unknown-note error
    pub fn unknown_note(note_id: NoteId) -> Self {
        Self::UnknownNote { note_id }
    }

    /// Create a new move confirmation error
    pub fn move_confirmation(
        note_id: NoteId,
        reason: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Self::MoveConfirmation {
            note_id,
            reason: reason.into(),
            status,
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the board view survives this error.
    ///
    /// Only a failed load takes the view down; everything else is reported
    /// on the diagnostic channel and the board stays usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Load { .. })
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Load { status, .. } | Self::MoveConfirmation { status, .. } => *status,
            _ => None,
        }
    }
}
