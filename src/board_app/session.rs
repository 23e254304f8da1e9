//! Board Session
//!
//! The single owned state object of a loaded board. It owns the dual state
//! store, the activity trail and the drag slot, and is the only thing that
//! mutates them: the drag and note-submit handlers below are the complete
//! mutation surface.
//!
//! Two ways to drive a drag:
//!
//! - [`BoardSession::handle_drag_end`] awaits the column update inline;
//! - [`BoardSession::drag_end`] + [`BoardSession::complete_move`] split the
//!   gesture so an event loop can issue the request elsewhere and feed the
//!   response back later. Responses for tickets the session no longer
//!   tracks are dropped.

use crate::board_app::activity::{ActivityEntry, ActivityTrail};
use crate::board_app::board_api::BoardApi;
use crate::board_app::columns::{columns_view, ColumnView};
use crate::board_app::diagnostics::{DiagnosticCategory, DiagnosticLog};
use crate::board_app::drag::{DragPhase, MoveCompletion, PendingMove};
use crate::board_app::events::{self, BoardEvent, BoardEventBroadcast};
use crate::board_app::state::DualState;
use crate::shared::{
    BoardError, BoardInfo, BoardSnapshot, Column, ColumnId, EditNoteColumnResponse, Note,
    NoteDraft, NoteId, User,
};
use tokio::sync::broadcast;

/// Name of the column new notes land in
pub const INITIAL_COLUMN_NAME: &str = "backlog";

/// Status tag given to notes created on the client
pub const NEW_NOTE_STATUS: &str = "backlog";

/// Pick the column new notes are created in: the column named `backlog`,
/// else the first column, else the literal `backlog` id.
pub fn initial_column(columns: &[Column]) -> ColumnId {
    columns
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(INITIAL_COLUMN_NAME))
        .or_else(|| columns.first())
        .map(|c| c.id.clone())
        .unwrap_or_else(|| ColumnId::new(INITIAL_COLUMN_NAME))
}

pub struct BoardSession<A> {
    api: A,
    user_key: String,
    board: BoardInfo,
    users: Vec<User>,
    columns: Vec<Column>,
    initial_column: ColumnId,
    state: DualState,
    activity: ActivityTrail,
    phase: DragPhase,
    epoch: u64,
    next_seq: u64,
    diagnostics: DiagnosticLog,
    events: BoardEventBroadcast,
}

impl<A> std::fmt::Debug for BoardSession<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardSession")
            .field("board", &self.board.name)
            .field("notes", &self.state.len())
            .field("phase", &self.phase.name())
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl<A: BoardApi> BoardSession<A> {
    /// Build a session from a complete snapshot. Both views start equal and
    /// the activity trail starts empty.
    pub fn from_snapshot(
        api: A,
        user_key: impl Into<String>,
        snapshot: BoardSnapshot,
        diagnostics: DiagnosticLog,
    ) -> Self {
        let initial_column = initial_column(&snapshot.columns);
        Self {
            api,
            user_key: user_key.into(),
            board: snapshot.board,
            users: snapshot.users,
            columns: snapshot.columns,
            initial_column,
            state: DualState::seeded(snapshot.notes),
            activity: ActivityTrail::new(),
            phase: DragPhase::Idle,
            epoch: 0,
            next_seq: 0,
            diagnostics,
            events: events::channel(),
        }
    }

    // --- read side -------------------------------------------------------

    pub fn board_name(&self) -> &str {
        &self.board.name
    }

    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn initial_column_id(&self) -> &ColumnId {
        &self.initial_column
    }

    pub fn state(&self) -> &DualState {
        &self.state
    }

    pub fn activity(&self) -> &ActivityTrail {
        &self.activity
    }

    pub fn active_drag(&self) -> Option<&Note> {
        self.state.active_drag()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Notes the user sees in `column`
    pub fn notes_in_column(&self, column: &ColumnId) -> Vec<&Note> {
        self.state.notes_in_column(column)
    }

    pub fn columns_view(&self) -> Vec<ColumnView<'_>> {
        columns_view(&self.columns, &self.state)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    fn column_label(&self, id: &ColumnId) -> String {
        self.columns
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn is_known_column(&self, id: &ColumnId) -> bool {
        self.columns.iter().any(|c| &c.id == id)
    }

    // --- drag protocol ---------------------------------------------------

    /// Idle -> Dragging.
    ///
    /// Rejected with `DragInProgress` while another gesture holds the slot,
    /// and with `UnknownNote` when the id is not on the board. Both are
    /// logged and leave the session untouched.
    pub fn drag_start(&mut self, note_id: &NoteId) -> Result<Note, BoardError> {
        if let Some(active) = self.phase.holder() {
            let err = BoardError::DragInProgress {
                active: active.clone(),
            };
            self.diagnostics.warn(
                DiagnosticCategory::Drag,
                format!("Rejected drag of {} ({}): {}", note_id, self.phase.name(), err),
            );
            return Err(err);
        }

        match self.state.begin_drag(note_id) {
            Ok(note) => {
                self.phase = DragPhase::Dragging { note: note.clone() };
                events::publish(
                    &self.events,
                    BoardEvent::DragStarted {
                        note_id: note_id.clone(),
                    },
                );
                Ok(note)
            }
            Err(err) => {
                self.diagnostics.error(DiagnosticCategory::Drag, err.to_string());
                Err(err)
            }
        }
    }

    /// Dragging -> Idle without a move
    pub fn drag_cancel(&mut self) -> Option<Note> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { note } => {
                self.state.discard_drag();
                events::publish(
                    &self.events,
                    BoardEvent::DragEnded {
                        note_id: note.id.clone(),
                    },
                );
                Some(note)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// End the current drag.
    ///
    /// Without a target (or with a target that is not a board column) the
    /// drag is dropped: no mutation, no request. With a column target the
    /// working view is moved right away and the returned ticket must be
    /// passed to [`complete_move`](Self::complete_move) together with the
    /// result of `BoardApi::edit_note_column`.
    pub fn drag_end(&mut self, target: Option<ColumnId>) -> Result<Option<PendingMove>, BoardError> {
        let note = match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { note } => note,
            other => {
                self.diagnostics.debug(
                    DiagnosticCategory::Drag,
                    format!("Ignoring drag end while {}", other.name()),
                );
                self.phase = other;
                return Ok(None);
            }
        };
        self.state.discard_drag();

        let target = match target {
            Some(column) if self.is_known_column(&column) => column,
            Some(column) => {
                self.diagnostics.warn(
                    DiagnosticCategory::Drag,
                    format!("Note {} dropped on unknown column {}", note.id, column),
                );
                self.drag_ended(&note.id);
                return Ok(None);
            }
            None => {
                self.drag_ended(&note.id);
                return Ok(None);
            }
        };

        let from = match self.state.apply_optimistic_move(&note.id, &target) {
            Ok(from) => from,
            Err(err) => {
                self.diagnostics.error(DiagnosticCategory::Drag, err.to_string());
                return Err(err);
            }
        };

        self.next_seq += 1;
        let pending = PendingMove {
            note_id: note.id.clone(),
            title: note.title.clone(),
            from: from.clone(),
            target: target.clone(),
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.phase = DragPhase::Reconciling {
            pending: pending.clone(),
        };
        tracing::info!("[DRAG] Note {} moved {} -> {} (pending)", note.id, from, target);
        events::publish(
            &self.events,
            BoardEvent::NoteMoved {
                note_id: note.id,
                from,
                to: target,
            },
        );
        Ok(Some(pending))
    }

    fn drag_ended(&mut self, note_id: &NoteId) {
        events::publish(
            &self.events,
            BoardEvent::DragEnded {
                note_id: note_id.clone(),
            },
        );
    }

    /// Reconciling -> Idle.
    ///
    /// On success the confirmed view takes the server's column and one
    /// activity entry is appended. On failure the note is tagged failed and
    /// the error goes to the diagnostic channel only; the working view keeps
    /// the optimistic column.
    pub fn complete_move(
        &mut self,
        pending: &PendingMove,
        result: Result<EditNoteColumnResponse, BoardError>,
    ) -> MoveCompletion {
        let current = matches!(&self.phase, DragPhase::Reconciling { pending: p } if p.same_ticket(pending));
        if pending.epoch != self.epoch || !current {
            self.diagnostics.debug(
                DiagnosticCategory::Network,
                format!("Dropping stale response for note {}", pending.note_id),
            );
            return MoveCompletion::Stale;
        }
        self.phase = DragPhase::Idle;

        let response = match result {
            Ok(response) => response,
            Err(err) => return self.fail_move(pending, err),
        };

        let column = response.note.board_column_fk;
        let diverged = match self.state.confirm_move(&pending.note_id, &column) {
            Ok(diverged) => diverged,
            Err(err) => return self.fail_move(pending, err),
        };
        if diverged {
            self.diagnostics.warn(
                DiagnosticCategory::Drag,
                format!(
                    "Server placed note {} in {} but the board shows {}",
                    pending.note_id, column, pending.target
                ),
            );
        }

        let label = self.column_label(&pending.target);
        self.activity.push(ActivityEntry::note_moved(
            &pending.title,
            pending.note_id.as_str(),
            &label,
        ));
        events::publish(
            &self.events,
            BoardEvent::MoveConfirmed {
                note_id: pending.note_id.clone(),
                column: column.clone(),
                diverged,
            },
        );
        MoveCompletion::Confirmed { column, diverged }
    }

    fn fail_move(&mut self, pending: &PendingMove, err: BoardError) -> MoveCompletion {
        if let Err(tag_err) = self.state.mark_failed(&pending.note_id) {
            self.diagnostics.warn(DiagnosticCategory::Drag, tag_err.to_string());
        }
        self.diagnostics.error_ctx(
            DiagnosticCategory::Drag,
            format!("Failed to move note: {}", err),
            format!("note={} target={}", pending.note_id, pending.target),
        );
        events::publish(
            &self.events,
            BoardEvent::MoveFailed {
                note_id: pending.note_id.clone(),
                reason: err.to_string(),
            },
        );
        MoveCompletion::Failed(err)
    }

    /// Finish the current drag, awaiting the column update inline.
    ///
    /// Returns `None` when the drag ended without a move.
    pub async fn handle_drag_end(
        &mut self,
        target: Option<ColumnId>,
    ) -> Result<Option<MoveCompletion>, BoardError> {
        let Some(pending) = self.drag_end(target)? else {
            return Ok(None);
        };
        let result = self
            .api
            .edit_note_column(&pending.note_id, &pending.target)
            .await;
        Ok(Some(self.complete_move(&pending, result)))
    }

    // --- note creation ---------------------------------------------------

    /// Create a note on this client only. It lands in the initial column,
    /// goes into both views and gets one activity entry. No request is made.
    pub fn submit_note(&mut self, draft: NoteDraft) -> Note {
        let note = draft.into_note(
            NoteId::local(),
            self.initial_column.clone(),
            Some(NEW_NOTE_STATUS.to_string()),
        );
        self.state.add_note(note.clone());
        self.activity.push(ActivityEntry::note_created(&note.title));
        self.diagnostics.info(
            DiagnosticCategory::Note,
            format!("Created note {} in {}", note.id, note.board_column_fk),
        );
        events::publish(
            &self.events,
            BoardEvent::NoteAdded {
                note_id: note.id.clone(),
            },
        );
        note
    }

    // --- reload ----------------------------------------------------------

    /// Reseed from a fresh snapshot. In-flight responses from before the
    /// reset are dropped when they arrive.
    pub fn reset(&mut self, snapshot: BoardSnapshot) {
        self.epoch += 1;
        self.initial_column = initial_column(&snapshot.columns);
        self.board = snapshot.board;
        self.users = snapshot.users;
        self.columns = snapshot.columns;
        self.state = DualState::seeded(snapshot.notes);
        self.activity = ActivityTrail::new();
        self.phase = DragPhase::Idle;
        events::publish(&self.events, BoardEvent::Reset);
    }

    /// Fetch the board again and reseed. On failure the current state is
    /// kept as it is.
    pub async fn reload(&mut self) -> Result<(), BoardError> {
        let result = self.api.fetch_board(&self.user_key).await;
        match result {
            Ok(snapshot) => {
                self.diagnostics.info(
                    DiagnosticCategory::Load,
                    format!(
                        "Reloaded board \"{}\" with {} notes",
                        snapshot.board.name,
                        snapshot.notes.len()
                    ),
                );
                self.reset(snapshot);
                Ok(())
            }
            Err(err) => {
                self.diagnostics.error(DiagnosticCategory::Load, err.to_string());
                Err(err)
            }
        }
    }
}
