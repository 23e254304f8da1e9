//! Activity trail: the session-local, human-readable log of board changes.
//!
//! Entries are only ever appended. The trail is not persisted and starts
//! empty on every load.

use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub description: String,
}

impl ActivityEntry {
    pub fn new(description: impl Into<String>) -> Self {
        Self::at(Local::now(), description)
    }

    pub fn at(timestamp: DateTime<Local>, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            description: description.into(),
        }
    }

    /// `"Title" (id) moved to Column at HH:MM:SS`
    pub fn note_moved(title: &str, note_id: &str, column: &str) -> Self {
        let now = Local::now();
        Self::at(
            now,
            format!(
                "\"{}\" ({}) moved to {} at {}",
                title,
                note_id,
                column,
                now.format("%H:%M:%S")
            ),
        )
    }

    /// `New note "Title" created at HH:MM:SS`
    pub fn note_created(title: &str) -> Self {
        let now = Local::now();
        Self::at(
            now,
            format!("New note \"{}\" created at {}", title, now.format("%H:%M:%S")),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityTrail {
    entries: Vec<ActivityEntry>,
}

impl ActivityTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ActivityEntry) {
        tracing::debug!("[ACTIVITY] {}", entry.description);
        self.entries.push(entry);
    }

    /// Entries in the order they were appended
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let mut trail = ActivityTrail::new();
        trail.push(ActivityEntry::new("first"));
        trail.push(ActivityEntry::new("second"));

        let descriptions: Vec<&str> = trail.entries().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
        assert_eq!(trail.latest().unwrap().description, "second");
        assert!(trail.entries()[0].timestamp <= trail.entries()[1].timestamp);
    }

    #[test]
    fn test_move_description() {
        let entry = ActivityEntry::note_moved("Write docs", "N1", "doing");
        assert!(entry.description.starts_with("\"Write docs\" (N1) moved to doing at "));
    }

    #[test]
    fn test_create_description() {
        let entry = ActivityEntry::note_created("T");
        assert!(entry.description.starts_with("New note \"T\" created at "));
    }
}
