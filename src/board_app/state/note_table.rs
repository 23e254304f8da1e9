use crate::shared::{Note, NoteId};
use std::collections::HashMap;

/// Notes keyed by id, iterated in insertion order.
///
/// Replacing a note keeps its original position, so moving a note between
/// columns never reorders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteTable {
    order: Vec<NoteId>,
    notes: HashMap<NoteId, Note>,
}

impl NoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a note, replacing any note with the same id in place
    pub fn insert(&mut self, note: Note) {
        if !self.notes.contains_key(&note.id) {
            self.order.push(note.id.clone());
        }
        self.notes.insert(note.id.clone(), note);
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn get_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.get_mut(id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.notes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NoteId> {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.order.iter().filter_map(|id| self.notes.get(id))
    }
}

impl FromIterator<Note> for NoteTable {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut table = NoteTable::new();
        for note in iter {
            table.insert(note);
        }
        table
    }
}
