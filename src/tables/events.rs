// src/tables/events.rs
use bevy::prelude::Event;

use super::export::ExportFormat;

/// Delete one or more rows, addressed against the table as it is when handled.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteRows {
    pub table: String,
    pub row_indices: Vec<usize>,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteColumns {
    pub table: String,
    pub column_indices: Vec<usize>,
}

#[derive(Event, Debug, Clone)]
pub struct RequestMoveRow {
    pub table: String,
    pub from: usize,
    pub to: usize,
}

#[derive(Event, Debug, Clone)]
pub struct RequestMoveColumn {
    pub table: String,
    pub from: usize,
    pub to: usize,
}

#[derive(Event, Debug, Clone)]
pub struct UpdateCellEvent {
    pub table: String,
    pub row_index: usize,
    pub col_index: usize,
    pub new_value: String,
}

/// Render a table and hand the text over through [`crate::tables::ExportBuffer`].
#[derive(Event, Debug, Clone)]
pub struct RequestExportTable {
    pub table: String,
    pub format: ExportFormat,
}

/// Sent after a request actually changed a table's cells or shape.
/// The presentation layer refreshes anything derived from the table on this.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TableDataModifiedEvent {
    pub table: String,
}

/// User-facing outcome of a request.
#[derive(Event, Debug, Clone)]
pub struct TableOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
