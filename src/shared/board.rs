//! Board Data Structures
//!
//! Notes, columns and users as the board API returns them, plus the
//! request/response bodies of the column update endpoint.

use crate::shared::error::BoardError;
use crate::shared::ids::{ColumnId, NoteId, UserId};
use serde::{Deserialize, Serialize};

/// A note placed in one column of the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Column the note is assigned to
    pub board_column_fk: ColumnId,
    /// Free-form status tag
    #[serde(default)]
    pub status: Option<String>,
}

/// A named bucket notes can be assigned to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
}

/// A user with access to the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
}

/// Board metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardInfo {
    pub name: String,
}

/// Response of `GET /api/board/{userKey}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub board: BoardInfo,
    #[serde(default)]
    pub users: Vec<User>,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Body of `PATCH /api/editNoteColumn/{noteId}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditNoteColumnRequest {
    pub new_column_id: ColumnId,
}

/// Note fields echoed back by the column update endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditedNote {
    pub board_column_fk: ColumnId,
}

/// Response of `PATCH /api/editNoteColumn/{noteId}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditNoteColumnResponse {
    pub note: EditedNote,
}

/// A validated title/description pair for a new note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    description: String,
}

impl NoteDraft {
    /// Validate a new note's fields. Both must contain something other
    /// than whitespace.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self, BoardError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(BoardError::validation("title", "Title cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(BoardError::validation(
                "description",
                "Description cannot be empty",
            ));
        }

        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Turn the draft into a note with the given id and column
    pub fn into_note(self, id: NoteId, column: ColumnId, status: Option<String>) -> Note {
        Note {
            id,
            title: self.title,
            description: self.description,
            board_column_fk: column,
            status,
        }
    }
}
