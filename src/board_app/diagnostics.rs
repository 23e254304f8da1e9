//! Operator-facing diagnostic channel.
//!
//! Recoverable board errors (unknown drag targets, failed move
//! confirmations, rejected drags) are written here and never to the activity
//! trail. Every entry is mirrored to `tracing`; the in-memory ring keeps the
//! most recent entries for a debug panel.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Default number of entries kept in memory
pub const DEFAULT_MAX_ENTRIES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Debug => write!(f, "DEBUG"),
            DiagnosticLevel::Info => write!(f, "INFO"),
            DiagnosticLevel::Warn => write!(f, "WARN"),
            DiagnosticLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Load,
    Drag,
    Note,
    Network,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Load => write!(f, "LOAD"),
            DiagnosticCategory::Drag => write!(f, "DRAG"),
            DiagnosticCategory::Note => write!(f, "NOTE"),
            DiagnosticCategory::Network => write!(f, "NET"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub timestamp: DateTime<Local>,
    pub level: DiagnosticLevel,
    pub category: DiagnosticCategory,
    pub message: String,
    pub context: Option<String>,
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context_str = self
            .context
            .as_ref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        write!(
            f,
            "{} [{}] {} {}{}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.category,
            self.message,
            context_str
        )
    }
}

/// Bounded, cloneable diagnostic log. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<VecDeque<DiagnosticEntry>>>,
    max_entries: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl DiagnosticLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_entries: max_entries.max(1),
        }
    }

    pub fn log(
        &self,
        level: DiagnosticLevel,
        category: DiagnosticCategory,
        message: impl Into<String>,
        context: Option<String>,
    ) {
        let entry = DiagnosticEntry {
            timestamp: Local::now(),
            level,
            category,
            message: message.into(),
            context,
        };

        let ctx = entry.context.as_deref().unwrap_or("");
        match level {
            DiagnosticLevel::Debug => {
                tracing::debug!("[{}] {} {}", entry.category, entry.message, ctx)
            }
            DiagnosticLevel::Info => {
                tracing::info!("[{}] {} {}", entry.category, entry.message, ctx)
            }
            DiagnosticLevel::Warn => {
                tracing::warn!("[{}] {} {}", entry.category, entry.message, ctx)
            }
            DiagnosticLevel::Error => {
                tracing::error!("[{}] {} {}", entry.category, entry.message, ctx)
            }
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    pub fn debug(&self, category: DiagnosticCategory, msg: impl Into<String>) {
        self.log(DiagnosticLevel::Debug, category, msg, None);
    }

    pub fn info(&self, category: DiagnosticCategory, msg: impl Into<String>) {
        self.log(DiagnosticLevel::Info, category, msg, None);
    }

    pub fn warn(&self, category: DiagnosticCategory, msg: impl Into<String>) {
        self.log(DiagnosticLevel::Warn, category, msg, None);
    }

    pub fn error(&self, category: DiagnosticCategory, msg: impl Into<String>) {
        self.log(DiagnosticLevel::Error, category, msg, None);
    }

    pub fn error_ctx(
        &self,
        category: DiagnosticCategory,
        msg: impl Into<String>,
        ctx: impl Into<String>,
    ) {
        self.log(DiagnosticLevel::Error, category, msg, Some(ctx.into()));
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Entries at or above `level`
    pub fn entries_at_least(&self, level: DiagnosticLevel) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| entry.level >= level).cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
