//! Board Snapshot Loader
//!
//! Fetches the board for a user key and turns it into a [`BoardSession`].
//! A session only exists once the whole snapshot arrived, so the dual state
//! is either fully seeded or absent; there is no partially loaded board.

use crate::board_app::board_api::BoardApi;
use crate::board_app::diagnostics::{DiagnosticCategory, DiagnosticLog};
use crate::board_app::session::BoardSession;
use crate::shared::{BoardError, BoardSnapshot};

/// What the board view shows
#[derive(Debug)]
pub enum BoardLoad<A> {
    /// Request in flight; the view shows a loading indicator
    Loading,
    Ready(BoardSession<A>),
    /// Blocking error state
    Failed(BoardError),
}

impl<A> Default for BoardLoad<A> {
    fn default() -> Self {
        BoardLoad::Loading
    }
}

impl<A> BoardLoad<A> {
    pub fn is_loading(&self) -> bool {
        matches!(self, BoardLoad::Loading)
    }

    pub fn session(&self) -> Option<&BoardSession<A>> {
        match self {
            BoardLoad::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut BoardSession<A>> {
        match self {
            BoardLoad::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn into_session(self) -> Option<BoardSession<A>> {
        match self {
            BoardLoad::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&BoardError> {
        match self {
            BoardLoad::Failed(err) => Some(err),
            _ => None,
        }
    }
}

pub struct BoardLoader<A> {
    api: A,
    diagnostics: DiagnosticLog,
}

impl<A: BoardApi> BoardLoader<A> {
    pub fn new(api: A) -> Self {
        Self::with_diagnostics(api, DiagnosticLog::default())
    }

    pub fn with_diagnostics(api: A, diagnostics: DiagnosticLog) -> Self {
        Self { api, diagnostics }
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Issue the single board read for `user_key`
    pub async fn fetch(&self, user_key: &str) -> Result<BoardSnapshot, BoardError> {
        if user_key.trim().is_empty() {
            let err = BoardError::load("Board key is empty", None);
            self.diagnostics.error(DiagnosticCategory::Load, err.to_string());
            return Err(err);
        }

        match self.api.fetch_board(user_key).await {
            Ok(snapshot) => {
                self.diagnostics.info(
                    DiagnosticCategory::Load,
                    format!(
                        "Loaded board \"{}\": {} columns, {} users, {} notes",
                        snapshot.board.name,
                        snapshot.columns.len(),
                        snapshot.users.len(),
                        snapshot.notes.len()
                    ),
                );
                Ok(snapshot)
            }
            Err(err) => {
                self.diagnostics.error(DiagnosticCategory::Load, err.to_string());
                Err(err)
            }
        }
    }

    /// Load the board and hand the API client over to the new session
    pub async fn load(self, user_key: &str) -> BoardLoad<A> {
        let result = self.fetch(user_key).await;
        match result {
            Ok(snapshot) => BoardLoad::Ready(BoardSession::from_snapshot(
                self.api,
                user_key,
                snapshot,
                self.diagnostics,
            )),
            Err(err) => BoardLoad::Failed(err),
        }
    }
}
