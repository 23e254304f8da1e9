//! # Dual State Store
//!
//! Holds two views of note placement:
//!
//! - **confirmed**: mirrors the last state the server acknowledged
//! - **working**: what the user sees, including moves the server has not
//!   confirmed yet
//!
//! Every note in `confirmed` is also in `working`. Column fields may differ
//! while a move is pending and stay different after a failed move: the
//! working state is never rolled back, the note is tagged
//! [`SyncStatus::Failed`] instead.
//!
//! ## Usage
//!
//! ```rust
//! use noteboard::board_app::state::{DualState, SyncStatus};
//! use noteboard::shared::{ColumnId, Note, NoteId};
//!
//! let note = Note {
//!     id: NoteId::new("N1"),
//!     title: "Write docs".to_string(),
//!     description: String::new(),
//!     board_column_fk: ColumnId::new("backlog"),
//!     status: None,
//! };
//! let mut state = DualState::seeded(vec![note]);
//!
//! let id = NoteId::new("N1");
//! state.apply_optimistic_move(&id, &ColumnId::new("doing")).unwrap();
//! assert_eq!(state.sync_status(&id), Some(SyncStatus::Pending));
//! assert_eq!(state.notes_in_column(&ColumnId::new("doing")).len(), 1);
//! ```

mod note_table;

pub use note_table::NoteTable;

use crate::shared::{BoardError, ColumnId, Note, NoteId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-note agreement between the working and confirmed views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Last column change acknowledged by the server
    Confirmed,
    /// A column change is in flight
    Pending,
    /// The last column change was not acknowledged; working state kept
    Failed,
    /// Created on this client and never sent to the server
    LocalOnly,
}

/// Confirmed and working note placement plus the active drag slot
#[derive(Debug, Clone, Default)]
pub struct DualState {
    confirmed: NoteTable,
    working: NoteTable,
    sync: HashMap<NoteId, SyncStatus>,
    active_drag: Option<Note>,
}

impl DualState {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from a board snapshot: both views hold the same notes
    pub fn seeded(notes: Vec<Note>) -> Self {
        let confirmed: NoteTable = notes.into_iter().collect();
        let sync = confirmed
            .ids()
            .map(|id| (id.clone(), SyncStatus::Confirmed))
            .collect();
        Self {
            working: confirmed.clone(),
            confirmed,
            sync,
            active_drag: None,
        }
    }

    /// Record `note_id` as the active drag and return a copy of the note.
    ///
    /// The copy is detached from the store; mutating it has no effect on
    /// either view.
    pub fn begin_drag(&mut self, note_id: &NoteId) -> Result<Note, BoardError> {
        let note = self
            .working
            .get(note_id)
            .cloned()
            .ok_or_else(|| BoardError::unknown_note(note_id.clone()))?;
        self.active_drag = Some(note.clone());
        Ok(note)
    }

    /// Move the note in the working view right away and mark it pending.
    ///
    /// Returns the column the note was in before the move.
    pub fn apply_optimistic_move(
        &mut self,
        note_id: &NoteId,
        target: &ColumnId,
    ) -> Result<ColumnId, BoardError> {
        let note = self
            .working
            .get_mut(note_id)
            .ok_or_else(|| BoardError::unknown_note(note_id.clone()))?;
        let previous = std::mem::replace(&mut note.board_column_fk, target.clone());
        self.sync.insert(note_id.clone(), SyncStatus::Pending);
        Ok(previous)
    }

    /// Record the server's authoritative column in the confirmed view.
    ///
    /// The working view is left as it is. Returns `true` when the working
    /// column disagrees with the server's column afterwards.
    pub fn confirm_move(
        &mut self,
        note_id: &NoteId,
        server_column: &ColumnId,
    ) -> Result<bool, BoardError> {
        let working_column = self
            .working
            .get(note_id)
            .map(|n| n.board_column_fk.clone())
            .ok_or_else(|| BoardError::unknown_note(note_id.clone()))?;

        let confirmed = self
            .confirmed
            .get_mut(note_id)
            .ok_or_else(|| BoardError::unknown_note(note_id.clone()))?;
        confirmed.board_column_fk = server_column.clone();
        self.sync.insert(note_id.clone(), SyncStatus::Confirmed);
        Ok(&working_column != server_column)
    }

    /// Tag a note whose move was not confirmed. Working state is kept.
    pub fn mark_failed(&mut self, note_id: &NoteId) -> Result<(), BoardError> {
        if !self.working.contains(note_id) {
            return Err(BoardError::unknown_note(note_id.clone()));
        }
        self.sync.insert(note_id.clone(), SyncStatus::Failed);
        Ok(())
    }

    /// Clear the active drag slot, returning what it held
    pub fn discard_drag(&mut self) -> Option<Note> {
        self.active_drag.take()
    }

    /// Insert a client-created note into both views
    pub fn add_note(&mut self, note: Note) {
        self.sync.insert(note.id.clone(), SyncStatus::LocalOnly);
        self.confirmed.insert(note.clone());
        self.working.insert(note);
    }

    /// Notes of the working view assigned to `column`, in table order
    pub fn notes_in_column(&self, column: &ColumnId) -> Vec<&Note> {
        self.working
            .iter()
            .filter(|note| &note.board_column_fk == column)
            .collect()
    }

    pub fn active_drag(&self) -> Option<&Note> {
        self.active_drag.as_ref()
    }

    pub fn working_note(&self, note_id: &NoteId) -> Option<&Note> {
        self.working.get(note_id)
    }

    pub fn confirmed_note(&self, note_id: &NoteId) -> Option<&Note> {
        self.confirmed.get(note_id)
    }

    pub fn working(&self) -> &NoteTable {
        &self.working
    }

    pub fn confirmed(&self) -> &NoteTable {
        &self.confirmed
    }

    pub fn sync_status(&self, note_id: &NoteId) -> Option<SyncStatus> {
        self.sync.get(note_id).copied()
    }

    /// Working copies of notes whose last move failed
    pub fn failed_notes(&self) -> Vec<&Note> {
        self.working
            .iter()
            .filter(|note| self.sync.get(&note.id) == Some(&SyncStatus::Failed))
            .collect()
    }

    /// Number of notes in the working view
    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn note(id: &str, column: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: format!("Note {}", id),
            description: "desc".to_string(),
            board_column_fk: ColumnId::new(column),
            status: None,
        }
    }

    fn board() -> DualState {
        DualState::seeded(vec![note("N1", "backlog"), note("N2", "backlog"), note("N3", "done")])
    }

    fn superset_holds(state: &DualState) -> bool {
        state.confirmed().ids().all(|id| state.working().contains(id))
    }

    #[test]
    fn test_seeded_views_agree() {
        let state = board();
        assert_eq!(state.confirmed(), state.working());
        assert_eq!(state.sync_status(&NoteId::new("N1")), Some(SyncStatus::Confirmed));
        assert!(state.active_drag().is_none());
    }

    #[test]
    fn test_begin_drag_returns_detached_copy() {
        let mut state = board();
        let mut copy = state.begin_drag(&NoteId::new("N1")).unwrap();
        copy.title = "changed".to_string();

        assert_eq!(state.working_note(&NoteId::new("N1")).unwrap().title, "Note N1");
        assert_eq!(state.active_drag().unwrap().title, "Note N1");
    }

    #[test]
    fn test_begin_drag_unknown_note_changes_nothing() {
        let mut state = board();
        let before = state.clone();

        let result = state.begin_drag(&NoteId::new("missing"));

        assert_matches!(result, Err(BoardError::UnknownNote { note_id }) if note_id.as_str() == "missing");
        assert!(state.active_drag().is_none());
        assert_eq!(state.working(), before.working());
        assert_eq!(state.confirmed(), before.confirmed());
    }

    #[test]
    fn test_optimistic_move_touches_working_only() {
        let mut state = board();
        let id = NoteId::new("N1");

        let previous = state.apply_optimistic_move(&id, &ColumnId::new("doing")).unwrap();

        assert_eq!(previous, ColumnId::new("backlog"));
        assert_eq!(state.working_note(&id).unwrap().board_column_fk, ColumnId::new("doing"));
        assert_eq!(state.confirmed_note(&id).unwrap().board_column_fk, ColumnId::new("backlog"));
        assert_eq!(state.sync_status(&id), Some(SyncStatus::Pending));
    }

    #[test]
    fn test_confirm_move_converges() {
        let mut state = board();
        let id = NoteId::new("N1");
        let doing = ColumnId::new("doing");

        state.apply_optimistic_move(&id, &doing).unwrap();
        let diverged = state.confirm_move(&id, &doing).unwrap();

        assert!(!diverged);
        assert_eq!(state.confirmed_note(&id).unwrap().board_column_fk, doing);
        assert_eq!(state.working_note(&id).unwrap().board_column_fk, doing);
        assert_eq!(state.sync_status(&id), Some(SyncStatus::Confirmed));
    }

    #[test]
    fn test_confirm_move_keeps_working_on_divergence() {
        let mut state = board();
        let id = NoteId::new("N1");

        state.apply_optimistic_move(&id, &ColumnId::new("doing")).unwrap();
        let diverged = state.confirm_move(&id, &ColumnId::new("done")).unwrap();

        assert!(diverged);
        assert_eq!(state.confirmed_note(&id).unwrap().board_column_fk, ColumnId::new("done"));
        assert_eq!(state.working_note(&id).unwrap().board_column_fk, ColumnId::new("doing"));
    }

    #[test]
    fn test_mark_failed_does_not_roll_back() {
        let mut state = board();
        let id = NoteId::new("N2");

        state.apply_optimistic_move(&id, &ColumnId::new("doing")).unwrap();
        state.mark_failed(&id).unwrap();

        assert_eq!(state.working_note(&id).unwrap().board_column_fk, ColumnId::new("doing"));
        assert_eq!(state.sync_status(&id), Some(SyncStatus::Failed));
        assert_eq!(state.failed_notes().len(), 1);
    }

    #[test]
    fn test_add_note_goes_to_both_views() {
        let mut state = board();
        state.add_note(note("local-1", "backlog"));

        let id = NoteId::new("local-1");
        assert!(state.working_note(&id).is_some());
        assert!(state.confirmed_note(&id).is_some());
        assert_eq!(state.sync_status(&id), Some(SyncStatus::LocalOnly));
        assert_eq!(state.len(), 4);
        assert!(superset_holds(&state));
    }

    #[test]
    fn test_notes_in_column_keeps_table_order() {
        let mut state = board();
        state.apply_optimistic_move(&NoteId::new("N3"), &ColumnId::new("backlog")).unwrap();
        state.apply_optimistic_move(&NoteId::new("N1"), &ColumnId::new("doing")).unwrap();
        state.apply_optimistic_move(&NoteId::new("N1"), &ColumnId::new("backlog")).unwrap();

        let ids: Vec<&str> = state
            .notes_in_column(&ColumnId::new("backlog"))
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["N1", "N2", "N3"]);
        assert!(state.notes_in_column(&ColumnId::new("doing")).is_empty());
    }

    #[test]
    fn test_discard_drag() {
        let mut state = board();
        state.begin_drag(&NoteId::new("N3")).unwrap();
        assert_eq!(state.discard_drag().map(|n| n.id), Some(NoteId::new("N3")));
        assert!(state.active_drag().is_none());
        assert!(state.discard_drag().is_none());
    }

    #[test]
    fn test_operations_on_unknown_note() {
        let mut state = board();
        let missing = NoteId::new("nope");
        assert!(state.apply_optimistic_move(&missing, &ColumnId::new("doing")).is_err());
        assert!(state.confirm_move(&missing, &ColumnId::new("doing")).is_err());
        assert!(state.mark_failed(&missing).is_err());
        assert!(superset_holds(&state));
    }
}
