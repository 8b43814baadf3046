// src/ui/selection.rs
use bevy::prelude::*;
use std::collections::BTreeSet;

use crate::tables::{
    events::{
        RequestDeleteColumns, RequestDeleteRows, TableDataModifiedEvent, TableOperationFeedback,
        UpdateCellEvent,
    },
    CellId, EditableTable, TableRegistry,
};

/// Rows and columns picked by the user on the active table, plus the cell
/// whose text field is open. The editing cell is tracked by id so it stays
/// attached to the same cell when rows or columns are reordered.
#[derive(Resource, Default, Debug, Clone)]
pub struct TableSelection {
    active_table: Option<String>,
    selected_rows: BTreeSet<usize>,
    selected_columns: BTreeSet<usize>,
    editing: Option<CellId>,
}

impl TableSelection {
    pub fn active_table(&self) -> Option<&str> {
        self.active_table.as_deref()
    }

    /// Switches the screen to another table, dropping any selection or edit.
    pub fn set_active_table(&mut self, name: impl Into<String>) {
        self.active_table = Some(name.into());
        self.clear();
        self.editing = None;
    }

    /// Flips a row's selection. Returns whether the row is now selected.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        toggle(&mut self.selected_rows, index)
    }

    pub fn toggle_column(&mut self, index: usize) -> bool {
        toggle(&mut self.selected_columns, index)
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selected_rows.contains(&index)
    }

    pub fn is_column_selected(&self, index: usize) -> bool {
        self.selected_columns.contains(&index)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_rows.is_empty() || !self.selected_columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected_rows.clear();
        self.selected_columns.clear();
    }

    pub fn begin_edit(&mut self, cell: CellId) {
        self.editing = Some(cell);
    }

    pub fn end_edit(&mut self) -> Option<CellId> {
        self.editing.take()
    }

    pub fn editing(&self) -> Option<CellId> {
        self.editing
    }

    /// Where the editing cell currently sits in `table`.
    pub fn editing_position(&self, table: &EditableTable) -> Option<(usize, usize)> {
        self.editing.and_then(|id| table.position_of(id))
    }
}

fn toggle(set: &mut BTreeSet<usize>, index: usize) -> bool {
    if set.remove(&index) {
        false
    } else {
        set.insert(index);
        true
    }
}

/// "Delete" pressed with rows and/or columns selected on the active table.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteSelection;

/// Text field for the editing cell submitted.
#[derive(Event, Debug, Clone)]
pub struct RequestCommitEdit {
    pub text: String,
}

pub fn handle_delete_selection(
    mut events: EventReader<RequestDeleteSelection>,
    mut selection: ResMut<TableSelection>,
    mut delete_rows_writer: EventWriter<RequestDeleteRows>,
    mut delete_columns_writer: EventWriter<RequestDeleteColumns>,
) {
    for _ in events.read() {
        let Some(table) = selection.active_table.clone() else {
            warn!("Delete selection ignored: no active table.");
            continue;
        };
        if !selection.has_selection() {
            trace!("Delete selection ignored for '{}': nothing selected.", table);
            continue;
        }

        // Rows are handled before columns, so both index sets refer to the
        // layout the user was looking at.
        if !selection.selected_rows.is_empty() {
            delete_rows_writer.write(RequestDeleteRows {
                table: table.clone(),
                row_indices: selection.selected_rows.iter().copied().collect(),
            });
        }
        if !selection.selected_columns.is_empty() {
            delete_columns_writer.write(RequestDeleteColumns {
                table: table.clone(),
                column_indices: selection.selected_columns.iter().copied().collect(),
            });
        }
        selection.clear();
    }
}

pub fn handle_commit_edit(
    mut events: EventReader<RequestCommitEdit>,
    mut selection: ResMut<TableSelection>,
    registry: Res<TableRegistry>,
    mut cell_update_writer: EventWriter<UpdateCellEvent>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in events.read() {
        let Some(table_name) = selection.active_table.clone() else {
            warn!("Commit edit ignored: no active table.");
            continue;
        };
        let Some(cell_id) = selection.editing() else {
            trace!("Commit edit ignored for '{}': no cell being edited.", table_name);
            continue;
        };
        let position = registry
            .get(&table_name)
            .and_then(|table| selection.editing_position(table));
        selection.end_edit();

        match position {
            Some((row_index, col_index)) => {
                cell_update_writer.write(UpdateCellEvent {
                    table: table_name,
                    row_index,
                    col_index,
                    new_value: event.text.clone(),
                });
            }
            None => {
                warn!(
                    "Commit edit for '{}' dropped: cell {} no longer exists.",
                    table_name, cell_id
                );
                feedback_writer.write(TableOperationFeedback {
                    message: "Edit discarded: the cell was deleted.".to_string(),
                    is_error: true,
                });
            }
        }
    }
}

/// Mirrors the selection sets onto each cell's `selected` flag so the grid
/// can highlight whole rows and columns. Tables other than the active one
/// never keep highlighted cells.
pub fn sync_cell_selection(
    selection: Res<TableSelection>,
    mut modified_events: EventReader<TableDataModifiedEvent>,
    mut registry: ResMut<TableRegistry>,
) {
    let active = selection.active_table();
    let active_modified = modified_events
        .read()
        .filter(|ev| Some(ev.table.as_str()) == active)
        .count()
        > 0;

    if selection.is_changed() {
        for (name, table) in registry.iter_mut() {
            if Some(name) == active {
                mark_selected_cells(table, &selection);
            } else {
                for (_, _, cell) in table.cells_mut() {
                    cell.selected = false;
                }
            }
        }
    } else if active_modified {
        if let Some(table) = active.and_then(|name| registry.get_mut(name)) {
            mark_selected_cells(table, &selection);
        }
    }
}

fn mark_selected_cells(table: &mut EditableTable, selection: &TableSelection) {
    for (row, col, cell) in table.cells_mut() {
        cell.selected = selection.is_row_selected(row) || selection.is_column_selected(col);
    }
}
