//! In-memory board API for unit tests.

use crate::board_app::board_api::BoardApi;
use crate::shared::{
    BoardError, BoardInfo, BoardSnapshot, Column, ColumnId, EditNoteColumnResponse, EditedNote,
    Note, NoteId, User, UserId,
};
use std::sync::{Arc, Mutex};

/// Columns `[backlog, doing, done]`, one user, note `N1` in `backlog`
pub fn snapshot() -> BoardSnapshot {
    let column = |id: &str| Column {
        id: ColumnId::new(id),
        name: id.to_string(),
    };
    BoardSnapshot {
        board: BoardInfo {
            name: "Team board".to_string(),
        },
        users: vec![User {
            id: UserId::new("1"),
            name: "Ada".to_string(),
        }],
        columns: vec![column("backlog"), column("doing"), column("done")],
        notes: vec![Note {
            id: NoteId::new("N1"),
            title: "Write docs".to_string(),
            description: "README and guide".to_string(),
            board_column_fk: ColumnId::new("backlog"),
            status: None,
        }],
    }
}

#[derive(Debug)]
struct FakeInner {
    fail_status: Option<u16>,
    snapshot: BoardSnapshot,
    edit_calls: Vec<(NoteId, ColumnId)>,
    fetch_calls: usize,
}

/// Answers every request from memory and records what was asked
#[derive(Debug, Clone)]
pub struct FakeBoardApi {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeBoardApi {
    fn with(fail_status: Option<u16>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeInner {
                fail_status,
                snapshot: snapshot(),
                edit_calls: Vec::new(),
                fetch_calls: 0,
            })),
        }
    }

    /// Confirms every move with the requested column
    pub fn confirming() -> Self {
        Self::with(None)
    }

    /// Fails every request with `status`
    pub fn failing(status: u16) -> Self {
        Self::with(Some(status))
    }

    pub fn response(column: ColumnId) -> EditNoteColumnResponse {
        EditNoteColumnResponse {
            note: EditedNote {
                board_column_fk: column,
            },
        }
    }

    pub fn edit_calls(&self) -> Vec<(NoteId, ColumnId)> {
        self.inner.lock().unwrap().edit_calls.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.inner.lock().unwrap().fetch_calls
    }
}

impl BoardApi for FakeBoardApi {
    async fn fetch_board(&self, _user_key: &str) -> Result<BoardSnapshot, BoardError> {
        let mut inner = self.inner.lock().unwrap();
        inner.fetch_calls += 1;
        match inner.fail_status {
            Some(status) => Err(BoardError::load(format!("Request failed: {}", status), Some(status))),
            None => Ok(inner.snapshot.clone()),
        }
    }

    async fn edit_note_column(
        &self,
        note_id: &NoteId,
        column: &ColumnId,
    ) -> Result<EditNoteColumnResponse, BoardError> {
        let mut inner = self.inner.lock().unwrap();
        inner.edit_calls.push((note_id.clone(), column.clone()));
        match inner.fail_status {
            Some(status) => Err(BoardError::move_confirmation(
                note_id.clone(),
                format!("Request failed: {}", status),
                Some(status),
            )),
            None => Ok(Self::response(column.clone())),
        }
    }
}
