//! Noteboard - Board Client Library
//!
//! Client-side state management for a shared note board: collaborators
//! rearrange notes across named columns, every move is shown immediately and
//! confirmed by the backend afterwards.
//!
//! # Module Structure
//!
//! - **`shared`** - Board data model, identifiers, errors and configuration
//!   - Notes, columns, users and the board snapshot as the backend sends them
//!   - Request/response bodies of the column update endpoint
//!
//! - **`board_app`** - The client state manager
//!   - Snapshot loading over HTTP
//!   - Confirmed/working dual state with optimistic drag moves
//!   - Activity trail, column views and change notifications
//!
//! # Consistency Model
//!
//! The working view is updated before the backend is asked; the confirmed
//! view only changes when the backend answers. A failed move is not rolled
//! back: the note stays where the user dropped it and is tagged
//! [`board_app::SyncStatus::Failed`].
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, shared::BoardError>`. Only a failed
//! board load is fatal to the board view; every other error is reported on
//! the diagnostic channel and the board stays usable.

/// Shared types and data structures
pub mod shared;

/// Board client state manager
pub mod board_app;
