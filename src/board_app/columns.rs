//! Column presentation: the working view partitioned by column.
//!
//! Derived on every call from the store; nothing is cached.

use crate::board_app::state::DualState;
use crate::shared::{Column, Note};

/// One column and the notes the user currently sees in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub notes: Vec<&'a Note>,
}

impl ColumnView<'_> {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Views for `columns` in the given order. Notes assigned to a column that
/// is not listed appear in no view.
pub fn columns_view<'a>(columns: &'a [Column], state: &'a DualState) -> Vec<ColumnView<'a>> {
    columns
        .iter()
        .map(|column| ColumnView {
            column,
            notes: state.notes_in_column(&column.id),
        })
        .collect()
}
