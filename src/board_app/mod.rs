//! Board Client Module
//!
//! Client-side state manager for a shared note board.
//!
//! # Architecture
//!
//! - **`config`** - Backend URL and request timeout
//! - **`board_api`** - The two backend calls, behind the `BoardApi` trait
//! - **`loader`** - Fetches the snapshot and builds a session
//! - **`state`** - Confirmed and working note placement
//! - **`drag`** - Drag phases and pending move tickets
//! - **`session`** - Owns the state and drives drags and note creation
//! - **`activity`** - Human-readable trail of board changes
//! - **`columns`** - Working state partitioned by column
//! - **`events`** - Broadcast notifications for views
//! - **`diagnostics`** - Operator-facing error channel
//! - **`logging`** - Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use noteboard::board_app::{BoardLoader, Config, HttpBoardApi};
//! use noteboard::shared::{ColumnId, NoteId};
//!
//! # async fn example() -> Result<(), noteboard::shared::BoardError> {
//! let api = HttpBoardApi::new(Config::new())?;
//! let mut load = BoardLoader::new(api).load("owner-key").await;
//!
//! if let Some(session) = load.session_mut() {
//!     session.drag_start(&NoteId::new("1"))?;
//!     session.handle_drag_end(Some(ColumnId::new("2"))).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod board_api;
pub mod columns;
pub mod config;
pub mod diagnostics;
pub mod drag;
pub mod events;
pub mod loader;
pub mod logging;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use activity::{ActivityEntry, ActivityTrail};
pub use board_api::{BoardApi, HttpBoardApi};
pub use columns::ColumnView;
pub use config::Config;
pub use diagnostics::{DiagnosticCategory, DiagnosticLevel, DiagnosticLog};
pub use drag::{DragPhase, MoveCompletion, PendingMove};
pub use events::BoardEvent;
pub use loader::{BoardLoad, BoardLoader};
pub use session::BoardSession;
pub use state::{DualState, SyncStatus};
