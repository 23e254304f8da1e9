//! Shared Module
//!
//! Types shared by every part of the board client: the board data model as
//! the backend serializes it, opaque identifiers, the error taxonomy and the
//! application configuration.

/// Opaque note, column and user identifiers
pub mod ids;

/// Board, column, note and user data structures
pub mod board;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use board::{
    BoardInfo, BoardSnapshot, Column, EditNoteColumnRequest, EditNoteColumnResponse, EditedNote,
    Note, NoteDraft, User,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::BoardError;
pub use ids::{ColumnId, NoteId, UserId};
